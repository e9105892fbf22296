use crate::Coord2;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size cannot hold every card type in pairs")]
    InvalidBoardSize,
    #[error("No visual cell at {0:?}, view is out of sync with game state")]
    CellNotFound(Coord2),
    #[error("Match check needs exactly two selected cards")]
    IncompleteSelection,
}

pub type Result<T> = core::result::Result<T, GameError>;
