//! Board engine: geometry tables, Zobrist codes, strings, and the board.
//!
//! ## Overview
//!
//! - [`Geometry`]: per-dimension neighbor/corner tables, built once and
//!   shared by every board of that size
//! - [`zobrist`]: fixed 63-bit code per (point, color)
//! - [`GoString`]: one connected group and its liberties, as a value
//! - [`Board`]: persistent point → string map plus the running hash
//!
//! ## Usage
//!
//! ```rust
//! use rust_go::board::Board;
//! use rust_go::core::{Player, Point};
//!
//! let mut board = Board::new(9, 9);
//! board.place_stone(Player::White, Point::new(1, 1));
//! board.place_stone(Player::Black, Point::new(1, 2));
//!
//! // Snapshots are O(1) and unaffected by later moves.
//! let before = board.clone();
//! board.place_stone(Player::Black, Point::new(2, 1));
//!
//! assert_eq!(board.get(Point::new(1, 1)), None);
//! assert_eq!(before.get(Point::new(1, 1)), Some(Player::White));
//! ```

pub mod geometry;
pub mod grid;
pub mod string;
pub mod zobrist;

pub use geometry::Geometry;
pub use grid::Board;
pub use string::{GoString, PointSet};
