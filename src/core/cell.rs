//! Fundamental value types: cells, winners, moves.

use serde::{Deserialize, Serialize};

/// A single cell on the 3x3 board.
///
/// Plain tagged state; rendering tokens as 'X'/'O' is a presentation
/// concern and lives outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No token placed yet.
    Empty,
    /// Token placed by the human player.
    Player,
    /// Token placed by the computer opponent.
    Computer,
}

impl Cell {
    /// Whether the cell holds no token.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Outcome of a game, derived from board contents on demand and never
/// stored.
///
/// `Tie` requires a full board with no three-in-a-row; `None` means the
/// game is still in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The human player has three in a row.
    Player,
    /// The computer has three in a row.
    Computer,
    /// Board full, nobody has three in a row.
    Tie,
    /// Board not full, nobody has three in a row.
    None,
}

/// A (row, column) position on the board, each coordinate in `[0, 2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Player.is_empty());
        assert!(!Cell::Computer.is_empty());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(format!("{}", Move::new(2, 0)), "(2, 0)");
    }

    #[test]
    fn test_winner_serde() {
        let json = serde_json::to_string(&Winner::Tie).unwrap();
        let deserialized: Winner = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Winner::Tie);
    }
}
