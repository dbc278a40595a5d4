//! # rust-go
//!
//! A Go rules engine with a Monte Carlo tree search player.
//!
//! ## Design Principles
//!
//! 1. **Cheap snapshots**: boards are persistent maps, so cloning a board
//!    or branching a game state is O(1). Search trees branch freely.
//!
//! 2. **Incremental bookkeeping**: strings, liberties and the Zobrist hash
//!    are updated per stone, never recomputed from scratch.
//!
//! 3. **Deterministic**: every random choice flows from an explicit seed.
//!
//! ## Architecture
//!
//! - **Shared geometry**: neighbor and corner tables are built once per
//!   board size and shared read-only across boards and threads.
//!
//! - **Positional superko**: each state remembers every earlier
//!   (player to move, position hash) pair in a persistent set.
//!
//! ## Modules
//!
//! - `core`: players, points, configuration, errors, RNG
//! - `board`: geometry tables, Zobrist codes, strings, the board
//! - `rules`: moves, the game state machine, scoring, eyes
//! - `agent`: the `Agent` trait, move filters, random play
//! - `mcts`: Monte Carlo tree search
//!
//! ## Example
//!
//! ```rust
//! use rust_go::{Agent, GameState, MCTSAgent, Move};
//!
//! let mut game = GameState::new_game(5);
//! let mut bot = MCTSAgent::new(20, 1.5);
//! for _ in 0..4 {
//!     let mv = bot.select_move(&game);
//!     game = game.apply_move(mv);
//! }
//! assert_eq!(game.move_number(), 4);
//! assert!(game.last_move().is_some_and(|mv| mv != Move::Resign));
//! ```

pub mod agent;
pub mod board;
pub mod core;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GoError, Player, PlayerPair, Point, ScoringMethod};

pub use crate::board::{Board, GoString};

pub use crate::rules::{compute_game_result, is_point_an_eye, GameResult, GameState, Move};

pub use crate::agent::{Agent, EyeFilter, NoFilter, RandomAgent, WastefulMoveFilter};

pub use crate::mcts::{MCTSAgent, MCTSConfig, MCTSTree, SearchStats, TreeStats};
