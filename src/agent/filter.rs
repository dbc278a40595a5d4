//! Pluggable pruning of candidate moves that waste a playout.
//!
//! Random play that fills its own eyes kills its own groups and drags
//! rollouts out; agents consult a filter before trying a point.

use crate::board::Board;
use crate::core::{Player, Point};
use crate::rules::is_point_an_eye;

/// Predicate marking moves not worth trying.
pub trait WastefulMoveFilter: Send + Sync {
    /// Should `color` skip playing at `point` on `board`?
    fn is_likely_wasteful(&self, board: &Board, point: Point, color: Player) -> bool;
}

/// Skip points that are the mover's own eyes.
#[derive(Clone, Copy, Debug, Default)]
pub struct EyeFilter;

impl WastefulMoveFilter for EyeFilter {
    fn is_likely_wasteful(&self, board: &Board, point: Point, color: Player) -> bool {
        is_point_an_eye(board, point, color)
    }
}

/// Never skip anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFilter;

impl WastefulMoveFilter for NoFilter {
    fn is_likely_wasteful(&self, _board: &Board, _point: Point, _color: Player) -> bool {
        false
    }
}

impl<F> WastefulMoveFilter for F
where
    F: Fn(&Board, Point, Player) -> bool + Send + Sync,
{
    fn is_likely_wasteful(&self, board: &Board, point: Point, color: Player) -> bool {
        self(board, point, color)
    }
}
