//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::GoError;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Rollouts per search. Each round adds at most one node.
    pub rounds: u32,

    /// UCT exploration constant.
    /// Higher values favor exploration over exploitation.
    pub temperature: f64,

    /// Random seed for the search.
    /// Same seed and position produce the same move.
    pub seed: u64,

    /// Move cap per rollout (0 = three times the number of board points).
    /// A capped rollout is scored as it stands.
    pub max_rollout_moves: u32,

    /// Offer resignation as an expansion candidate.
    pub include_resign: bool,

    /// Skip moves that fill the mover's own eye, both when expanding and
    /// during rollouts.
    pub filter_eyes: bool,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            temperature: 1.5,
            seed: 42,
            max_rollout_moves: 0,
            include_resign: false,
            filter_eyes: true,
        }
    }
}

impl MCTSConfig {
    /// Config with the given round budget and exploration constant.
    #[must_use]
    pub fn new(rounds: u32, temperature: f64) -> Self {
        Self {
            rounds,
            temperature,
            ..Self::default()
        }
    }

    /// Create a new config with a custom round budget.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Create a new config with a custom exploration constant.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom rollout move cap.
    pub fn with_max_rollout_moves(mut self, moves: u32) -> Self {
        self.max_rollout_moves = moves;
        self
    }

    /// Allow or forbid resignation as a tree move.
    pub fn with_resign(mut self, include: bool) -> Self {
        self.include_resign = include;
        self
    }

    /// Enable or disable the eye-filling filter.
    pub fn with_eye_filter(mut self, enabled: bool) -> Self {
        self.filter_eyes = enabled;
        self
    }

    /// Rollout move cap for a board with `num_points` intersections.
    #[must_use]
    pub fn rollout_cap(&self, num_points: usize) -> u32 {
        if self.max_rollout_moves > 0 {
            self.max_rollout_moves
        } else {
            (num_points as u32).saturating_mul(3)
        }
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> Result<(), GoError> {
        if self.rounds == 0 {
            return Err(GoError::InvalidSearchConfig(
                "rounds must be at least 1".to_string(),
            ));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(GoError::InvalidSearchConfig(format!(
                "temperature must be a non-negative number, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}
