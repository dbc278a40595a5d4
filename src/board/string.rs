//! Connected stone groups ("strings") and their liberties.
//!
//! A `GoString` is a value: every change produces a new string. Boards hold
//! strings behind `Arc`, so board snapshots taken before a change keep
//! seeing the old value.

use std::hash::BuildHasherDefault;

use im::HashSet as ImHashSet;
use rustc_hash::FxHasher;

use crate::core::{Player, Point};

/// Persistent point set with a fixed (non-random) hasher.
pub type PointSet = ImHashSet<Point, BuildHasherDefault<FxHasher>>;

/// Stones of one color linked by orthogonal adjacency.
///
/// Invariant: `liberties` and `stones` never intersect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    color: Player,
    stones: PointSet,
    liberties: PointSet,
}

impl GoString {
    /// Create a string. Liberties that are also stones are dropped.
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        let stones: PointSet = stones.into_iter().collect();
        let liberties: PointSet = liberties.into_iter().collect();
        Self {
            color,
            liberties: liberties.relative_complement(stones.clone()),
            stones,
        }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Player {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn stones(&self) -> &PointSet {
        &self.stones
    }

    #[inline]
    #[must_use]
    pub fn liberties(&self) -> &PointSet {
        &self.liberties
    }

    #[inline]
    #[must_use]
    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    #[inline]
    #[must_use]
    pub fn num_stones(&self) -> usize {
        self.stones.len()
    }

    /// A copy of this string with `point` no longer a liberty.
    #[must_use]
    pub fn without_liberty(&self, point: Point) -> Self {
        Self {
            color: self.color,
            stones: self.stones.clone(),
            liberties: self.liberties.without(&point),
        }
    }

    /// A copy of this string with `point` added as a liberty.
    #[must_use]
    pub fn with_liberty(&self, point: Point) -> Self {
        debug_assert!(!self.stones.contains(&point));
        Self {
            color: self.color,
            stones: self.stones.clone(),
            liberties: self.liberties.update(point),
        }
    }

    /// A new string holding the stones of both strings.
    ///
    /// Liberties occupied by the combined stones are dropped.
    #[must_use]
    pub fn merged_with(&self, other: &GoString) -> Self {
        assert_eq!(self.color, other.color, "cannot merge strings of different colors");
        let stones = self.stones.clone().union(other.stones.clone());
        let liberties = self
            .liberties
            .clone()
            .union(other.liberties.clone())
            .relative_complement(stones.clone());
        Self {
            color: self.color,
            stones,
            liberties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_new_drops_occupied_liberties() {
        let s = GoString::new(Player::Black, [p(1, 1)], [p(1, 1), p(1, 2)]);
        assert_eq!(s.num_stones(), 1);
        assert_eq!(s.num_liberties(), 1);
        assert!(s.liberties().contains(&p(1, 2)));
    }

    #[test]
    fn test_liberty_updates_leave_original_untouched() {
        let s = GoString::new(Player::White, [p(2, 2)], [p(1, 2), p(3, 2)]);
        let fewer = s.without_liberty(p(1, 2));
        let more = s.with_liberty(p(2, 1));

        assert_eq!(s.num_liberties(), 2);
        assert_eq!(fewer.num_liberties(), 1);
        assert_eq!(more.num_liberties(), 3);
    }

    #[test]
    fn test_merge() {
        // Two stones at (1,1) and (1,3) joined by a stone at (1,2).
        let left = GoString::new(Player::Black, [p(1, 1)], [p(1, 2), p(2, 1)]);
        let right = GoString::new(Player::Black, [p(1, 3)], [p(1, 2), p(2, 3), p(1, 4)]);
        let middle = GoString::new(Player::Black, [p(1, 2)], [p(2, 2)]);

        let merged = middle.merged_with(&left).merged_with(&right);

        assert_eq!(merged.num_stones(), 3);
        assert!(!merged.liberties().contains(&p(1, 2)));
        assert_eq!(merged.num_liberties(), 4);
    }

    #[test]
    #[should_panic(expected = "different colors")]
    fn test_merge_different_colors_panics() {
        let a = GoString::new(Player::Black, [p(1, 1)], std::iter::empty());
        let b = GoString::new(Player::White, [p(1, 2)], std::iter::empty());
        let _ = a.merged_with(&b);
    }
}
