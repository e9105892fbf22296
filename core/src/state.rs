use smallvec::SmallVec;

use crate::*;

/// A face-up card waiting for its pair to be resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub coords: Coord2,
    pub card: CardType,
}

/// Pending selections and the move counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    selection: SmallVec<[Selection; 2]>,
    moves: u32,
}

impl GameState {
    pub const MAX_SELECTION: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &[Selection] {
        &self.selection
    }

    pub fn pending_len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_pending(&self, coords: Coord2) -> bool {
        self.selection.iter().any(|sel| sel.coords == coords)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Captures the board's card at `coords`. The caller guards against
    /// duplicates and a full selection.
    pub fn record_selection(&mut self, board: &Board, coords: Coord2) -> Result<Selection> {
        debug_assert!(self.selection.len() < Self::MAX_SELECTION);
        let card = board.card_at(coords)?;
        let selection = Selection { coords, card };
        self.selection.push(selection);
        Ok(selection)
    }

    pub fn is_match(&self) -> Result<bool> {
        match self.selection.as_slice() {
            [first, second] => Ok(first.card == second.card),
            _ => Err(GameError::IncompleteSelection),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn increment_counter(&mut self) -> u32 {
        self.moves = self.moves.saturating_add(1);
        self.moves
    }

    pub fn reset(&mut self) {
        self.moves = 0;
        self.clear_selection();
    }
}
