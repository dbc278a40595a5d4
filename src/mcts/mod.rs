//! Monte Carlo Tree Search agent.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat vector and refer to each other by
//!   [`NodeId`]; each node owns its [`GameState`](crate::rules::GameState)
//! - **UCT selection**: win rate plus a `temperature`-weighted exploration term
//! - **Random rollouts**: eye-respecting random play, capped per rollout
//! - **Robust choice**: the most visited root child is played
//! - **Deterministic**: the search RNG is reseeded from the config each move
//!
//! ## Usage
//!
//! ```rust
//! use rust_go::agent::Agent;
//! use rust_go::mcts::{MCTSAgent, MCTSConfig};
//! use rust_go::rules::GameState;
//!
//! let game = GameState::new_game(5);
//! let config = MCTSConfig::new(50, 1.5).with_seed(7);
//! let mut bot = MCTSAgent::from_config(config).unwrap();
//!
//! let mv = bot.select_move(&game);
//! assert!(game.is_valid_move(mv));
//!
//! for (mv, prob) in bot.action_probabilities() {
//!     println!("{mv}: {:.1}%", prob * 100.0);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{expansion_candidates, uct_score, RandomRollout, SelectionPolicy, SimulationPolicy, UCT};
pub use search::MCTSAgent;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
