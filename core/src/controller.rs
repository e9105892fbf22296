use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    OneSelected,
    Resolving,
}

impl TurnPhase {
    pub const fn accepts_input(self) -> bool {
        !matches!(self, Self::Resolving)
    }
}

/// Outcome of clicking a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected,
    /// Second card is up, the host must call [`Controller::resolve`] after the configured delay.
    ResolutionPending,
}

impl ClickOutcome {
    /// Whether this outcome could have caused an update to the view
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Selected => true,
            ResolutionPending => true,
        }
    }
}

/// Outcome of resolving a pending pair
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Nothing was pending.
    Idle,
    Matched,
    Mismatched,
    /// Last pair removed; a fresh game has already been started.
    Won { moves: u32 },
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Drives a turn: clicks in, view updates out, one pending resolution at a time.
#[derive(Debug)]
pub struct Controller<V, S> {
    config: GameConfig,
    board: Board,
    state: GameState,
    view: V,
    source: S,
    input_blocked: bool,
}

impl<V: BoardView, S: UnitSource> Controller<V, S> {
    /// Builds the board and starts the first game right away.
    pub fn new(config: GameConfig, view: V, source: S) -> Self {
        let mut controller = Self {
            config,
            board: Board::new(config),
            state: GameState::new(),
            view,
            source,
            input_blocked: false,
        };
        controller.start_game();
        controller
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_input_blocked(&self) -> bool {
        self.input_blocked
    }

    pub fn phase(&self) -> TurnPhase {
        if self.input_blocked {
            TurnPhase::Resolving
        } else if self.state.pending_len() == 0 {
            TurnPhase::Idle
        } else {
            TurnPhase::OneSelected
        }
    }

    /// Resets the counter, reshuffles and lays out a fresh face-down board.
    pub fn start_game(&mut self) {
        self.state.reset();
        self.input_blocked = false;
        self.view.update_counter_display(self.state.moves());
        self.board.shuffle(&mut self.source);
        self.view.render_board(self.board.size());
        log::debug!("game started on a {:?} board", self.board.size());
    }

    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        log::trace!("click at {:?} in {:?}", coords, self.phase());

        if !self.phase().accepts_input() {
            return Ok(ClickOutcome::Ignored);
        }
        // removed cells and the card that is already face-up cannot be picked
        if !self.view.contains(coords) || self.state.is_pending(coords) {
            return Ok(ClickOutcome::Ignored);
        }

        let selection = self.state.record_selection(&self.board, coords)?;
        self.view.reveal(&[selection], true)?;
        let moves = self.state.increment_counter();
        self.view.update_counter_display(moves);
        log::debug!("revealed {:?} at {:?}, moves: {}", selection.card, coords, moves);

        if self.state.pending_len() == GameState::MAX_SELECTION {
            self.input_blocked = true;
            Ok(ClickOutcome::ResolutionPending)
        } else {
            Ok(ClickOutcome::Selected)
        }
    }

    /// Settles the pending pair. Input is unblocked on every path out of here.
    pub fn resolve(&mut self) -> Result<ResolveOutcome> {
        if !self.input_blocked {
            log::warn!("resolve called with no pair pending, ignored");
            return Ok(ResolveOutcome::Idle);
        }

        let settled = self.settle_pair();
        self.state.clear_selection();
        self.input_blocked = false;
        let matched = settled?;

        if self.view.is_empty() {
            let moves = self.state.moves();
            log::info!("board cleared in {} moves", moves);
            self.view.notify_win(moves);
            self.start_game();
            return Ok(ResolveOutcome::Won { moves });
        }

        Ok(if matched {
            ResolveOutcome::Matched
        } else {
            ResolveOutcome::Mismatched
        })
    }

    fn settle_pair(&mut self) -> Result<bool> {
        let matched = self.state.is_match()?;
        let cells = self.state.selection();
        if matched {
            self.view.remove(cells)?;
        } else {
            self.view.reveal(cells, false)?;
        }
        log::debug!("pair {:?} matched: {}", cells, matched);
        Ok(matched)
    }
}
