use thiserror::Error;

use crate::{CellCount, Coord2};

/// Reason a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board dimensions must be at least 1x1")]
    ZeroDimension,
    #[error("Too many mines: {mines} requested but the board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Layout places {placed} mines but {expected} were requested")]
    MineCountMismatch { expected: CellCount, placed: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Mine layout is {actual:?} but the board is {expected:?}")]
    InvalidBoardShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("Coordinates {coords:?} are outside the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Game already ended, no new moves are accepted")]
    SessionTerminated,
}

pub type Result<T> = core::result::Result<T, GameError>;
