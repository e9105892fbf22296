use ndarray::Array2;

use crate::*;

/// Visual state of a cell that is still on the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisualCell {
    FaceDown,
    FaceUp(CardType),
}

impl VisualCell {
    pub const fn image_path(self) -> &'static str {
        match self {
            Self::FaceDown => CARD_BACK_IMAGE,
            Self::FaceUp(card) => card.image_path(),
        }
    }
}

/// Projects game state onto whatever surface shows the cards. Holds no rules.
pub trait BoardView {
    /// Drops every cell and lays out a fresh face-down grid.
    fn render_board(&mut self, size: Coord2);

    /// True once every cell has been removed.
    fn is_empty(&self) -> bool;

    /// Whether a cell is still on the table at `coords`.
    fn contains(&self, coords: Coord2) -> bool;

    fn reveal(&mut self, cells: &[Selection], show_front: bool) -> Result<()>;

    fn remove(&mut self, cells: &[Selection]) -> Result<()>;

    fn update_counter_display(&mut self, value: u32);

    /// Blocking notice that the board was cleared in `moves` moves.
    fn notify_win(&mut self, moves: u32);
}

impl<V: BoardView + ?Sized> BoardView for &mut V {
    fn render_board(&mut self, size: Coord2) {
        (**self).render_board(size)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, coords: Coord2) -> bool {
        (**self).contains(coords)
    }

    fn reveal(&mut self, cells: &[Selection], show_front: bool) -> Result<()> {
        (**self).reveal(cells, show_front)
    }

    fn remove(&mut self, cells: &[Selection]) -> Result<()> {
        (**self).remove(cells)
    }

    fn update_counter_display(&mut self, value: u32) {
        (**self).update_counter_display(value)
    }

    fn notify_win(&mut self, moves: u32) {
        (**self).notify_win(moves)
    }
}

/// In-memory table of visual cells; `None` marks a removed cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableView {
    cells: Array2<Option<VisualCell>>,
    remaining: CellCount,
    counter: u32,
    last_win: Option<u32>,
    win_count: u32,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<VisualCell> {
        self.cells.get(coords.to_nd_index()).copied().flatten()
    }

    pub fn remaining(&self) -> CellCount {
        self.remaining
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Final move count of the most recently cleared board.
    pub fn last_win(&self) -> Option<u32> {
        self.last_win
    }

    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    fn slot_mut(&mut self, coords: Coord2) -> Result<&mut Option<VisualCell>> {
        self.cells
            .get_mut(coords.to_nd_index())
            .filter(|slot| slot.is_some())
            .ok_or(GameError::CellNotFound(coords))
    }
}

impl BoardView for TableView {
    fn render_board(&mut self, size: Coord2) {
        self.cells = Array2::from_elem(size.to_nd_index(), Some(VisualCell::FaceDown));
        self.remaining = mult(size.0, size.1);
    }

    fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    fn contains(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some()
    }

    fn reveal(&mut self, cells: &[Selection], show_front: bool) -> Result<()> {
        for sel in cells {
            let slot = self.slot_mut(sel.coords)?;
            *slot = Some(if show_front {
                VisualCell::FaceUp(sel.card)
            } else {
                VisualCell::FaceDown
            });
        }
        Ok(())
    }

    fn remove(&mut self, cells: &[Selection]) -> Result<()> {
        for sel in cells {
            self.slot_mut(sel.coords)?.take();
            self.remaining -= 1;
        }
        Ok(())
    }

    fn update_counter_display(&mut self, value: u32) {
        self.counter = value;
    }

    fn notify_win(&mut self, moves: u32) {
        self.last_win = Some(moves);
        self.win_count = self.win_count.saturating_add(1);
    }
}
