//! Computer-move selection.
//!
//! Fixed priority order, no search:
//!
//! 1. take the center if it is open,
//! 2. complete a line already holding two computer tokens,
//! 3. block a line already holding two player tokens,
//! 4. pick a random empty cell.
//!
//! Offense comes before defense on purpose: a winning move beats a
//! blocking one.

use tracing::trace;

use crate::board::{Board, LINES};
use crate::core::{Cell, GameRng, Move};
use crate::error::GameError;

/// Picks the computer's move for the current board.
///
/// Fails with [`GameError::NoMovesAvailable`] when the board has no
/// empty cell. The controller checks for game over before calling, so
/// that only happens when its precondition is violated.
pub(crate) fn choose_move(board: &Board, rng: &mut GameRng) -> Result<Move, GameError> {
    if board.get(1, 1)?.is_empty() {
        trace!("taking the center");
        return Ok(Move::new(1, 1));
    }

    if let Some(mv) = completing_move(board, Cell::Computer) {
        trace!(row = mv.row, col = mv.col, "completing own line");
        return Ok(mv);
    }

    if let Some(mv) = completing_move(board, Cell::Player) {
        trace!(row = mv.row, col = mv.col, "blocking player line");
        return Ok(mv);
    }

    let open = board.empty_cells();
    match rng.choose(&open) {
        Some(&mv) => {
            trace!(row = mv.row, col = mv.col, "fallback random move");
            Ok(mv)
        }
        None => Err(GameError::NoMovesAvailable),
    }
}

/// Finds the open cell of a line holding two `token` cells and no
/// opponent cell, if any line qualifies.
///
/// Each line gets a signed count: +1 per `token`, -1 per opponent
/// token, 0 per empty cell. A count of +2 means exactly two `token`
/// cells and one empty cell. Lines are scanned in the fixed order of
/// [`LINES`]; the first qualifying line wins, and the line's own cell
/// order decides which empty cell is returned.
fn completing_move(board: &Board, token: Cell) -> Option<Move> {
    for line in &LINES {
        let cells = board.line(line);
        let count: i32 = cells
            .iter()
            .map(|&cell| match cell {
                Cell::Empty => 0,
                cell if cell == token => 1,
                _ => -1,
            })
            .sum();

        if count == 2 {
            for (&(row, col), cell) in line.iter().zip(cells.iter()) {
                if cell.is_empty() {
                    return Some(Move::new(row, col));
                }
            }
        }
    }

    None
}
