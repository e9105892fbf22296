#![no_std]

extern crate alloc;

pub use board::*;
pub use card::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use state::*;
pub use types::*;
pub use view::*;

mod board;
mod card;
mod controller;
mod error;
mod generator;
mod state;
mod types;
mod view;

/// Delay between revealing the second card of a pair and resolving it.
pub const DEFAULT_RESOLVE_DELAY_MS: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: Coord2,
    pub resolve_delay_ms: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, resolve_delay_ms: u32) -> Self {
        Self {
            size,
            resolve_delay_ms,
        }
    }

    /// Only sizes where the cyclic fill leaves every type an even number of
    /// times are accepted, otherwise the board could never be cleared.
    pub fn new(size: Coord2, resolve_delay_ms: u32) -> Result<Self> {
        let config = Self::new_unchecked(size, resolve_delay_ms);
        let total = usize::from(config.total_cells());
        if total == 0 || total % (2 * CardType::COUNT) != 0 {
            return Err(GameError::InvalidBoardSize);
        }
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((4, 5), DEFAULT_RESOLVE_DELAY_MS)
    }
}
