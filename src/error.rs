//! Crate error types.

use std::path::PathBuf;

/// Errors surfaced by the board and the game controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Row or column outside `[0, 2]`.
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    IndexOutOfRange { row: usize, col: usize },

    /// The target cell already holds a token.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// A move was submitted after a winner or tie was reached.
    #[error("game is already over")]
    GameOver,

    /// The computer was asked to move on a board with no empty cell.
    ///
    /// The controller checks for game over before invoking the
    /// heuristic, so seeing this means that precondition was violated.
    #[error("no empty cell available for the computer to play")]
    NoMovesAvailable,
}

/// Errors from statistics persistence.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("failed to read statistics from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write statistics to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse statistics from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}
