use pairs_core::*;

/// Replays a fixed list of target indices, then keeps every cell in place.
struct Scripted {
    indices: Vec<usize>,
    size: usize,
    draws: usize,
}

impl Scripted {
    fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            size: 20,
            draws: 0,
        }
    }

    fn identity() -> Self {
        Self::new(&(0..20).collect::<Vec<_>>())
    }
}

impl UnitSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let step = self.draws % self.size;
        let target = self.indices.get(self.draws).copied().unwrap_or(step);
        self.draws += 1;
        (target as f64 + 0.5) / self.size as f64
    }
}

fn controller(source: Scripted) -> Controller<TableView, Scripted> {
    Controller::new(GameConfig::default(), TableView::new(), source)
}

/// Flat index of the other cell holding the same card in the unshuffled layout.
fn partner(index: usize) -> usize {
    (index + 10) % 20
}

#[test]
fn initial_layout_repeats_type_sequence_twice() {
    use CardType::*;
    let board = Board::new(GameConfig::default());
    let sequence = [
        Lemon,
        Banana,
        Watermelon,
        Kiwi,
        Orange,
        RedApple,
        GreenApple,
        YellowFruit,
        Cherry,
        Strawberry,
    ];
    let expected: Vec<_> = sequence.iter().chain(sequence.iter()).copied().collect();

    assert_eq!(board.to_vec(), expected);
    let names: Vec<_> = board.to_vec().iter().take(10).map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "lemon",
            "banana",
            "watermelon",
            "kiwi",
            "orange",
            "red_apple",
            "green_apple",
            "yellow_fruit",
            "cherry",
            "strawberry"
        ]
    );
}

#[test]
fn seeded_shuffles_keep_the_multiset() {
    let mut board = Board::new(GameConfig::default());
    let mut before = board.to_vec();
    before.sort();

    let mut source = SeededUnitSource::new(2024);
    for _ in 0..100 {
        board.shuffle(&mut source);
        let mut after = board.to_vec();
        after.sort();
        assert_eq!(after, before);
    }
}

#[test]
fn matching_pair_is_removed_after_resolution() {
    // step 8 swaps index 8 with 10, putting the second lemon at (1, 3)
    let mut indices: Vec<usize> = (0..20).collect();
    indices[8] = 10;
    let mut ctl = controller(Scripted::new(&indices));
    assert_eq!(ctl.board().card_at((1, 3)).unwrap(), CardType::Lemon);

    assert_eq!(ctl.click((0, 0)).unwrap(), ClickOutcome::Selected);
    assert_eq!(ctl.click((1, 3)).unwrap(), ClickOutcome::ResolutionPending);
    assert_eq!(ctl.phase(), TurnPhase::Resolving);
    assert_eq!(ctl.config().resolve_delay_ms, 500);

    assert_eq!(ctl.resolve().unwrap(), ResolveOutcome::Matched);

    assert_eq!(ctl.view().cell_at((0, 0)), None);
    assert_eq!(ctl.view().cell_at((1, 3)), None);
    assert_eq!(ctl.view().remaining(), 18);
    assert_eq!(ctl.view().counter(), 2);
    assert!(ctl.state().selection().is_empty());
    assert!(!ctl.is_input_blocked());
    assert_eq!(ctl.phase(), TurnPhase::Idle);
}

#[test]
fn mismatched_pair_flips_back_face_down() {
    let mut ctl = controller(Scripted::identity());
    assert_ne!(
        ctl.board().card_at((0, 0)).unwrap(),
        ctl.board().card_at((0, 1)).unwrap()
    );

    ctl.click((0, 0)).unwrap();
    ctl.click((0, 1)).unwrap();
    assert_eq!(
        ctl.view().cell_at((0, 1)),
        Some(VisualCell::FaceUp(CardType::Banana))
    );

    assert_eq!(ctl.resolve().unwrap(), ResolveOutcome::Mismatched);

    assert_eq!(ctl.view().cell_at((0, 0)), Some(VisualCell::FaceDown));
    assert_eq!(ctl.view().cell_at((0, 1)), Some(VisualCell::FaceDown));
    assert_eq!(ctl.view().remaining(), 20);
    assert_eq!(ctl.view().counter(), 2);
    assert!(ctl.state().selection().is_empty());
    assert!(!ctl.is_input_blocked());
}

#[test]
fn clearing_the_board_announces_win_then_restarts() {
    let mut ctl = controller(Scripted::identity());

    // one miss first so the final count is not simply the cell count
    ctl.click((0, 0)).unwrap();
    ctl.click((0, 1)).unwrap();
    assert_eq!(ctl.resolve().unwrap(), ResolveOutcome::Mismatched);

    let mut last = ResolveOutcome::Idle;
    for index in 0..10 {
        let a = project(index as CellCount, 5);
        let b = project(partner(index) as CellCount, 5);
        assert_eq!(ctl.click(a).unwrap(), ClickOutcome::Selected);
        assert_eq!(ctl.click(b).unwrap(), ClickOutcome::ResolutionPending);
        assert_eq!(ctl.view().win_count(), 0);
        last = ctl.resolve().unwrap();
    }

    assert_eq!(last, ResolveOutcome::Won { moves: 22 });
    assert_eq!(ctl.view().last_win(), Some(22));
    assert_eq!(ctl.view().win_count(), 1);
    assert_eq!(ctl.source().draws, 40);
    assert_eq!(ctl.view().counter(), 0);
    assert_eq!(ctl.state().moves(), 0);
    assert_eq!(ctl.view().remaining(), 20);
    assert_eq!(ctl.phase(), TurnPhase::Idle);
    assert_eq!(ctl.board().type_counts(), [2; CardType::COUNT]);
}

#[test]
fn win_is_announced_once_per_board() {
    let mut ctl = controller(Scripted::identity());

    for _ in 0..2 {
        for index in 0..10 {
            ctl.click(project(index as CellCount, 5)).unwrap();
            ctl.click(project(partner(index) as CellCount, 5)).unwrap();
            ctl.resolve().unwrap();
        }
    }

    assert_eq!(ctl.view().win_count(), 2);
    assert_eq!(ctl.view().last_win(), Some(20));
}

#[test]
fn counter_tracks_single_reveals_not_pairs() {
    let mut ctl = controller(Scripted::identity());

    ctl.click((0, 0)).unwrap();
    assert_eq!(ctl.view().counter(), 1);
    ctl.click((0, 0)).unwrap();
    assert_eq!(ctl.view().counter(), 1);
    ctl.click((3, 4)).unwrap();
    assert_eq!(ctl.view().counter(), 2);
    ctl.resolve().unwrap();
    ctl.click((3, 4)).unwrap();
    assert_eq!(ctl.view().counter(), 3);

    ctl.start_game();
    assert_eq!(ctl.view().counter(), 0);
}

#[test]
fn seeded_games_are_reproducible() {
    let a = Controller::new(
        GameConfig::default(),
        TableView::new(),
        SeededUnitSource::new(77),
    );
    let b = Controller::new(
        GameConfig::default(),
        TableView::new(),
        SeededUnitSource::new(77),
    );

    assert_eq!(a.board(), b.board());
    assert_eq!(a.source().seed(), 77);
}
