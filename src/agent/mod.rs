//! Move-selection agents.
//!
//! Every agent answers one question: given a position, which move? The
//! MCTS agent in [`crate::mcts`] and the [`RandomAgent`] baseline share
//! the [`Agent`] contract so callers can swap them freely.

pub mod filter;
pub mod random;

pub use filter::{EyeFilter, NoFilter, WastefulMoveFilter};
pub use random::{random_move, RandomAgent};

use crate::rules::{GameState, Move};

/// Something that picks moves.
pub trait Agent {
    /// Choose a move for the player to move in `game_state`.
    ///
    /// Implementations return a move valid in `game_state`, or pass when
    /// nothing better is available.
    fn select_move(&mut self, game_state: &GameState) -> Move;
}
