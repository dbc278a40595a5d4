//! Game rules: moves, the turn-taking state machine, and scoring.
//!
//! - [`Move`]: play / pass / resign
//! - [`GameState`]: legality (occupancy, self-capture, positional superko),
//!   termination, and winner
//! - [`compute_game_result`]: scores a final board
//! - [`is_point_an_eye`]: local eye check used to prune random play

pub mod eye;
pub mod moves;
pub mod scoring;
pub mod state;

pub use eye::is_point_an_eye;
pub use moves::Move;
pub use scoring::{compute_game_result, GameResult, Territory};
pub use state::{GameState, Situation};
