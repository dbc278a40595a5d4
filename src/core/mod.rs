//! Core engine types: players, points, RNG, configuration, errors.
//!
//! Everything here is board-agnostic and has no dependency on the rest of
//! the crate.

pub mod config;
pub mod error;
pub mod player;
pub mod point;
pub mod rng;

pub use config::{check_dimensions, GameConfig, ScoringMethod, DEFAULT_KOMI, MAX_BOARD_SIZE};
pub use error::GoError;
pub use player::{Player, PlayerPair};
pub use point::{Point, COLS};
pub use rng::GameRng;
