//! Error types for board setup, tile construction and placement.

use std::fmt;

use thiserror::Error;

/// Why a placement on an in-range cell was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejection {
    /// Cell already holds a tile
    Occupied,
    /// The opening tile may not go on the outer ring
    OpeningOnBorder,
    /// No orthogonal neighbor holds a tile
    NotAdjacent,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRejection::Occupied => write!(f, "cell is occupied"),
            PlacementRejection::OpeningOnBorder => write!(f, "opening tile must not touch the border"),
            PlacementRejection::NotAdjacent => write!(f, "no orthogonal neighbor holds a tile"),
        }
    }
}

/// Errors returned by the game core.
///
/// All of these are local validation failures: nothing is mutated when one is
/// returned, and the caller is free to try something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    InvalidPosition { row: usize, col: usize, size: usize },

    #[error("illegal placement at ({row}, {col}): {reason}")]
    IllegalPlacement {
        row: usize,
        col: usize,
        reason: PlacementRejection,
    },

    #[error("tile corners must be a permutation of all four colors")]
    MalformedTile,

    #[error("chip value {0} is outside the allowed range")]
    InvalidChipValue(u8),

    #[error("tile value {0} is outside the allowed range")]
    InvalidTileValue(u8),

    #[error("player count {0} is not supported (2-4 players)")]
    InvalidPlayerCount(usize),

    #[error("board size {0} is not supported")]
    InvalidBoardSize(usize),

    #[error("current player has no tile to place")]
    NoTileSelected,

    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameError>;
