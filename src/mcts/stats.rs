//! Per-search counters for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `select_move` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rounds performed.
    pub iterations: u32,

    /// Nodes added to the tree (root excluded).
    pub nodes_expanded: u32,

    /// Rollouts played.
    pub simulations: u32,

    /// Deepest node created.
    pub max_depth: u16,

    /// Visits of the chosen root child.
    pub chosen_visits: u32,

    /// Win rate of the chosen child for the player to move at the root.
    pub chosen_win_rate: f64,

    /// Wall time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.simulations) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
