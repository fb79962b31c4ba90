//! Win/loss/tie counters with JSON persistence.
//!
//! The view layer records one outcome per finished game and may reset
//! the counters; the engine core never touches this state. Counters are
//! kept from the player's point of view.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Winner;
use crate::error::StatsError;

/// Aggregate outcomes across games: `wins` counts player wins,
/// `losses` computer wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Games the player won.
    pub wins: u32,
    /// Games the computer won.
    pub losses: u32,
    /// Games that ended with a full board and no winner.
    pub ties: u32,
}

impl Statistics {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter matching `winner`.
    ///
    /// [`Winner::None`] records nothing; an unfinished game is not an
    /// outcome.
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.wins += 1,
            Winner::Computer => self.losses += 1,
            Winner::Tie => self.ties += 1,
            Winner::None => {}
        }
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of recorded games.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Loads statistics from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| StatsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StatsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads statistics, falling back to zeroed counters when the file
    /// does not exist yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves statistics as pretty-printed JSON, creating the file if
    /// it does not exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StatsError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| StatsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "statistics saved");
        Ok(())
    }
}
