//! # tictactoe-engine
//!
//! A tic-tac-toe game engine with a heuristic (non-search) computer
//! opponent. The crate is a pure in-process model: a view layer (CLI,
//! GUI, test harness) submits player moves and reads back immutable
//! board snapshots.
//!
//! ## Design Principles
//!
//! 1. **Controller owns the board**: callers never touch the live grid,
//!    only [`BoardSnapshot`] value copies.
//!
//! 2. **Derived outcomes**: the winner is recomputed from board
//!    contents on demand, never stored.
//!
//! 3. **Injectable randomness**: the fallback move draws from a seeded
//!    [`GameRng`], so whole games are reproducible under test.
//!
//! ## Modules
//!
//! - `core`: cells, winners, moves, RNG
//! - `board`: 3x3 grid, line scanning, snapshots
//! - `game`: move validation, turn sequence, computer heuristic
//! - `stats`: win/loss/tie counters with JSON persistence
//! - `error`: error taxonomy
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::{Cell, GameController, Winner};
//!
//! let mut game = GameController::new(42);
//! game.submit_player_move(0, 0)?;
//!
//! let snapshot = game.board_snapshot();
//! assert_eq!(snapshot.get(0, 0)?, Cell::Player);
//! // The heuristic always answers a non-center opening with the center.
//! assert_eq!(snapshot.get(1, 1)?, Cell::Computer);
//! assert_eq!(game.winner(), Winner::None);
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod stats;

// Re-export commonly used types
pub use crate::board::{Board, BoardSnapshot, SIZE};
pub use crate::core::{Cell, GameRng, Move, Winner};
pub use crate::error::{GameError, StatsError};
pub use crate::game::GameController;
pub use crate::stats::Statistics;
