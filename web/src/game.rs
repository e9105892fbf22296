use gloo::timers::callback::Timeout;
use pairs_core as game;
use game::{BoardView, ClickOutcome, Coord2, GameConfig, Selection, TableView, VisualCell};
use web_sys::Element;
use yew::prelude::*;

use crate::source::PageSource;

const OUT_OF_SYNC: &str = "board view must stay in sync with game state";

/// Zero-padded to three digits, wider counts are shown in full.
fn format_for_counter(num: u32) -> String {
    format!("{:03}", num)
}

/// Reads the `(row, col)` a card element was rendered with.
fn cell_coords(element: &Element) -> Option<Coord2> {
    let row = element.get_attribute("data-row")?.parse().ok()?;
    let col = element.get_attribute("data-col")?.parse().ok()?;
    Some((row, col))
}

/// The table the component renders from, plus the blocking win alert.
#[derive(Debug, Default)]
pub(crate) struct PageView {
    table: TableView,
}

impl BoardView for PageView {
    fn render_board(&mut self, size: Coord2) {
        self.table.render_board(size)
    }

    fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn contains(&self, coords: Coord2) -> bool {
        self.table.contains(coords)
    }

    fn reveal(&mut self, cells: &[Selection], show_front: bool) -> game::Result<()> {
        self.table.reveal(cells, show_front)
    }

    fn remove(&mut self, cells: &[Selection]) -> game::Result<()> {
        self.table.remove(cells)
    }

    fn update_counter_display(&mut self, value: u32) {
        self.table.update_counter_display(value)
    }

    fn notify_win(&mut self, moves: u32) {
        self.table.notify_win(moves);
        gloo::dialogs::alert(&format!("You won! Moves: {}", moves));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClick(Coord2),
    Resolve,
    NewGame,
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    row: game::Coord,
    col: game::Coord,
    cell: VisualCell,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps { row, col, cell } = props.clone();

    let class = classes!(
        "game-card",
        match cell {
            VisualCell::FaceDown => "face-down",
            VisualCell::FaceUp(_) => "face-up",
        }
    );
    let style = format!(
        "grid-row: {}; grid-column: {}; background-image: url({})",
        u16::from(row) + 1,
        u16::from(col) + 1,
        cell.image_path()
    );

    html! {
        <div {class} {style} data-row={row.to_string()} data-col={col.to_string()}/>
    }
}

pub(crate) struct GameView {
    controller: game::Controller<PageView, PageSource>,
    pending_resolve: Option<Timeout>,
}

impl GameView {
    fn schedule_resolve(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let delay = self.controller.config().resolve_delay_ms;
        self.pending_resolve = Some(Timeout::new(delay, move || {
            link.send_message(Msg::Resolve)
        }));
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        Self {
            controller: game::Controller::new(config, PageView::default(), PageSource::new(seed)),
            pending_resolve: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardClick(coords) => {
                let outcome = self.controller.click(coords).expect(OUT_OF_SYNC);
                if outcome == ClickOutcome::ResolutionPending {
                    self.schedule_resolve(ctx);
                }
                outcome.has_update()
            }
            Resolve => {
                self.pending_resolve.take();
                let outcome = self.controller.resolve().expect(OUT_OF_SYNC);
                log::debug!("resolved: {:?}", outcome);
                outcome.has_update()
            }
            NewGame => {
                // a pending resolution belongs to the old board
                self.pending_resolve.take();
                self.controller.start_game();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let table = &self.controller.view().table;
        let (rows, cols) = table.size();
        let score = format_for_counter(table.counter());
        let last_win = table
            .last_win()
            .map(|moves| format!("Last win: {}", format_for_counter(moves)));
        let blocked = self.controller.is_input_blocked();

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_card_click = ctx.link().batch_callback(|e: MouseEvent| {
            let target = e.target_dyn_into::<Element>()?;
            let coords = cell_coords(&target)?;
            log::trace!("card click: {:?}", coords);
            Some(Msg::CardClick(coords))
        });

        html! {
            <div class="game">
                <nav>
                    <aside class="score">{score}</aside>
                    <button class="start" onclick={cb_new_game}>{"Start"}</button>
                    if let Some(last_win) = last_win {
                        <aside class="last-win">{last_win}</aside>
                    }
                </nav>
                <div class={classes!("game-board", blocked.then_some("blocked"))} onclick={cb_card_click}>
                    {
                        for (0..rows).flat_map(|row| (0..cols).map(move |col| (row, col))).filter_map(|(row, col)| {
                            let cell = table.cell_at((row, col))?;
                            let key = format!("{}-{}", row, col);
                            Some(html! { <CardView key={key} {row} {col} {cell}/> })
                        })
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{Controller, ResolveOutcome, SeededUnitSource, TurnPhase};

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(22), "022");
        assert_eq!(format_for_counter(999), "999");
    }

    #[test]
    fn counter_past_999_is_shown_in_full() {
        assert_eq!(format_for_counter(1000), "1000");
        assert_eq!(format_for_counter(4321), "4321");
    }

    #[test]
    fn endless_mismatches_keep_counting_on_the_page() {
        let mut ctl = Controller::new(
            GameConfig::default(),
            PageView::default(),
            SeededUnitSource::new(8),
        );
        let first = ctl.board().card_at((0, 0)).unwrap();
        let other = (0..4u8)
            .flat_map(|row| (0..5u8).map(move |col| (row, col)))
            .find(|&pos| ctl.board().card_at(pos).unwrap() != first)
            .unwrap();

        for _ in 0..600 {
            ctl.click((0, 0)).unwrap();
            ctl.click(other).unwrap();
            assert_eq!(ctl.resolve().unwrap(), ResolveOutcome::Mismatched);
        }

        let table = &ctl.view().table;
        assert_eq!(table.counter(), 1200);
        assert_eq!(format_for_counter(table.counter()), "1200");
    }

    #[test]
    fn page_view_feeds_the_rendered_table() {
        let mut ctl = Controller::new(
            GameConfig::default(),
            PageView::default(),
            SeededUnitSource::new(3),
        );
        let card = ctl.board().card_at((1, 1)).unwrap();

        assert_eq!(ctl.click((1, 1)).unwrap(), ClickOutcome::Selected);

        let table = &ctl.view().table;
        assert_eq!(table.cell_at((1, 1)), Some(VisualCell::FaceUp(card)));
        assert_eq!(table.counter(), 1);
        assert_eq!(ctl.phase(), TurnPhase::OneSelected);
    }

    #[test]
    fn mismatch_through_page_view_flips_back() {
        let mut ctl = Controller::new(
            GameConfig::default(),
            PageView::default(),
            SeededUnitSource::new(11),
        );
        let first = ctl.board().card_at((0, 0)).unwrap();
        let other = (0..4u8)
            .flat_map(|row| (0..5u8).map(move |col| (row, col)))
            .find(|&pos| ctl.board().card_at(pos).unwrap() != first)
            .unwrap();

        ctl.click((0, 0)).unwrap();
        ctl.click(other).unwrap();

        assert_eq!(ctl.resolve().unwrap(), ResolveOutcome::Mismatched);
        assert_eq!(ctl.view().table.cell_at(other), Some(VisualCell::FaceDown));
    }
}
