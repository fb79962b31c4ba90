//! 3x3 board state and line-based winner detection.
//!
//! The board is a fixed row-major array of nine [`Cell`]s. Winner
//! detection scans the eight possible lines directly; no text
//! formatting is involved. Callers outside the crate only ever receive
//! [`BoardSnapshot`] value copies, never the live grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Move, Winner};
use crate::error::GameError;

/// Board side length. The grid is always `SIZE` x `SIZE`.
pub const SIZE: usize = 3;

/// The eight winning lines, in heuristic scan order: row 0, column 0,
/// row 1, column 1, row 2, column 2, main diagonal, anti-diagonal.
///
/// Cell order within a line doubles as the tie-break order when the
/// heuristic picks the open cell of a two-token line: rows scan left to
/// right, columns top to bottom, and diagonals try the center first.
pub(crate) const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 2), (1, 2), (2, 2)],
    [(1, 1), (0, 0), (2, 2)],
    [(1, 1), (0, 2), (2, 0)],
];

/// 3x3 tic-tac-toe board, row-major.
///
/// Holds cell state only. Game rules (whose turn, move legality) live
/// in the controller; `set` will happily overwrite any cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::IndexOutOfRange { row, col });
        }
        Ok(row * SIZE + col)
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// No game rules are enforced here; move legality is the caller's
    /// responsibility.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        self.cells[Self::index(row, col)?] = cell;
        Ok(())
    }

    /// True iff no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Sets every cell back to `Empty`. No reallocation.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SIZE * SIZE];
    }

    /// The three cells of a line, in the line's own order.
    pub(crate) fn line(&self, line: &[(usize, usize); SIZE]) -> [Cell; SIZE] {
        line.map(|(row, col)| self.cells[row * SIZE + col])
    }

    /// Scans all rows, columns, and both diagonals for three in a row.
    ///
    /// Returns `Tie` when no line wins and the board is full, `None`
    /// when no line wins and it is not.
    #[must_use]
    pub fn winner(&self) -> Winner {
        for line in &LINES {
            match self.line(line) {
                [Cell::Player, Cell::Player, Cell::Player] => return Winner::Player,
                [Cell::Computer, Cell::Computer, Cell::Computer] => return Winner::Computer,
                _ => {}
            }
        }

        if self.is_full() {
            Winner::Tie
        } else {
            Winner::None
        }
    }

    /// All currently empty positions, in row-major order.
    pub(crate) fn empty_cells(&self) -> SmallVec<[Move; SIZE * SIZE]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Move::new(i / SIZE, i % SIZE))
            .collect()
    }

    /// Returns an immutable value copy of the grid.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                cells[row][col] = self.cells[row * SIZE + col];
            }
        }
        BoardSnapshot { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only value copy of a board.
///
/// Snapshots are plain values: mutations of the live board after a
/// snapshot is taken never show through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: [[Cell; SIZE]; SIZE],
}

impl BoardSnapshot {
    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::IndexOutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Rows in top-to-bottom order.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}
