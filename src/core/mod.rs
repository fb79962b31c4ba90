//! Core engine types: cells, winners, moves, and the injectable RNG.

pub mod cell;
pub mod rng;

pub use cell::{Cell, Move, Winner};
pub use rng::GameRng;
