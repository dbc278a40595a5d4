//! Errors returned at the fallible boundaries of the engine.
//!
//! Rule violations are not errors: `GameState::is_valid_move` answers them
//! with `false`. Contract faults (placing on an occupied point, off-board
//! placement) panic.

use thiserror::Error;

/// Errors from parsing and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoError {
    /// Coordinate text such as `"D4"` could not be parsed.
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// Move text was neither `pass`, `resign`, nor a coordinate.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// Board dimensions are outside the supported range.
    #[error("unsupported board size {rows}x{cols} (supported: 1..={max})")]
    UnsupportedBoardSize { rows: u8, cols: u8, max: u8 },

    /// Komi must be a finite number.
    #[error("invalid komi: {0}")]
    InvalidKomi(f32),

    /// Search configuration rejected.
    #[error("invalid search config: {0}")]
    InvalidSearchConfig(String),
}
