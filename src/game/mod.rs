//! Game orchestration: move validation, turn sequence, game-over
//! detection, and the computer's heuristic reply.

mod heuristic;

use tracing::debug;

use crate::board::{Board, BoardSnapshot};
use crate::core::{Cell, GameRng, Winner};
use crate::error::GameError;

/// Orchestrates one game: validates player moves, applies them, and
/// answers each with the computer's heuristic move.
///
/// The controller exclusively owns its [`Board`]. Callers only ever see
/// [`BoardSnapshot`] values, so the live grid cannot be mutated from
/// outside.
///
/// Not internally synchronized; one controller per session, external
/// locking if shared.
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    rng: GameRng,
}

impl GameController {
    /// Creates a controller with an empty board and the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Creates a controller with a caller-supplied RNG.
    ///
    /// Tests inject a fixed-seed [`GameRng`] here to pin down the
    /// fallback move.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            rng,
        }
    }

    /// Resumes from an existing position, e.g. for scenario tests.
    #[must_use]
    pub fn from_board(board: Board, rng: GameRng) -> Self {
        Self { board, rng }
    }

    /// Applies a player move and, if the game then continues, the
    /// computer's reply.
    ///
    /// Fails with [`GameError::GameOver`] once a winner or tie exists,
    /// [`GameError::IndexOutOfRange`] outside the grid, and
    /// [`GameError::CellOccupied`] on a taken cell. The board is never
    /// altered on an error return.
    pub fn submit_player_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.get(row, col)?.is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }

        self.board.set(row, col, Cell::Player)?;
        debug!(row, col, "player move applied");

        if self.is_game_over() {
            return Ok(());
        }

        let reply = heuristic::choose_move(&self.board, &mut self.rng)?;
        self.board.set(reply.row, reply.col, Cell::Computer)?;
        debug!(row = reply.row, col = reply.col, "computer move applied");

        Ok(())
    }

    /// True once [`GameController::winner`] is anything but
    /// [`Winner::None`].
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner() != Winner::None
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Current outcome, recomputed from the board.
    #[must_use]
    pub fn winner(&self) -> Winner {
        self.board.winner()
    }

    /// Read-only value copy of the board.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Clears the board and returns to the in-progress state.
    pub fn reset(&mut self) {
        self.board.reset();
        debug!("board reset");
    }
}
