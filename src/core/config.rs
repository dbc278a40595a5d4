//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game that does not change
//! between moves: the board extent, komi, and how the final board is
//! scored.

use serde::{Deserialize, Serialize};

use super::error::GoError;

/// Largest supported board dimension. The Zobrist table covers this extent.
pub const MAX_BOARD_SIZE: u8 = 19;

/// Default komi granted to white.
pub const DEFAULT_KOMI: f32 = 7.5;

/// How a finished board is turned into scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringMethod {
    /// Territory plus stones on the board.
    #[default]
    Area,
    /// Territory plus captured stones.
    Territory,
}

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board rows.
    pub rows: u8,

    /// Number of board columns.
    pub cols: u8,

    /// Points added to white's score.
    pub komi: f32,

    /// Scoring rule used when the game ends by two passes.
    pub scoring: ScoringMethod,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 9,
            komi: DEFAULT_KOMI,
            scoring: ScoringMethod::Area,
        }
    }
}

impl GameConfig {
    /// Square board of the given size with default komi and scoring.
    #[must_use]
    pub fn square(size: u8) -> Self {
        Self::default().with_size(size, size)
    }

    /// Set the board dimensions.
    pub fn with_size(mut self, rows: u8, cols: u8) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set komi.
    pub fn with_komi(mut self, komi: f32) -> Self {
        self.komi = komi;
        self
    }

    /// Set the scoring method.
    pub fn with_scoring(mut self, scoring: ScoringMethod) -> Self {
        self.scoring = scoring;
        self
    }

    /// Total number of intersections.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Check the configuration against engine limits.
    pub fn validate(&self) -> Result<(), GoError> {
        check_dimensions(self.rows, self.cols)?;
        if !self.komi.is_finite() {
            return Err(GoError::InvalidKomi(self.komi));
        }
        Ok(())
    }
}

/// Check board dimensions against `1..=MAX_BOARD_SIZE`.
pub fn check_dimensions(rows: u8, cols: u8) -> Result<(), GoError> {
    let valid = |n: u8| (1..=MAX_BOARD_SIZE).contains(&n);
    if valid(rows) && valid(cols) {
        Ok(())
    } else {
        Err(GoError::UnsupportedBoardSize {
            rows,
            cols,
            max: MAX_BOARD_SIZE,
        })
    }
}
