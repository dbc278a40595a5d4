//! Board intersections.
//!
//! Points are 1-indexed `(row, col)` pairs. Row 1 is the bottom edge and
//! column 1 is the left edge, matching the usual text coordinates where
//! `"A1"` is the lower-left corner.

use serde::{Deserialize, Serialize};

use super::error::GoError;

/// Column letters used in text coordinates. `I` is skipped by convention.
pub const COLS: &[u8; 19] = b"ABCDEFGHJKLMNOPQRST";

/// A board intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    /// Create a point.
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbors, unfiltered.
    ///
    /// Neighbors of edge points fall outside the board (row or column 0
    /// or past the last line); callers filter with the board dimensions.
    #[must_use]
    pub const fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row.wrapping_sub(1), self.col),
            Point::new(self.row.wrapping_add(1), self.col),
            Point::new(self.row, self.col.wrapping_sub(1)),
            Point::new(self.row, self.col.wrapping_add(1)),
        ]
    }

    /// The four diagonal neighbors, unfiltered.
    #[must_use]
    pub const fn corners(self) -> [Point; 4] {
        [
            Point::new(self.row.wrapping_sub(1), self.col.wrapping_sub(1)),
            Point::new(self.row.wrapping_sub(1), self.col.wrapping_add(1)),
            Point::new(self.row.wrapping_add(1), self.col.wrapping_sub(1)),
            Point::new(self.row.wrapping_add(1), self.col.wrapping_add(1)),
        ]
    }

    /// Check whether this point lies on a `rows x cols` board.
    #[inline]
    #[must_use]
    pub const fn is_within(self, rows: u8, cols: u8) -> bool {
        self.row >= 1 && self.row <= rows && self.col >= 1 && self.col <= cols
    }

    /// Parse text coordinates such as `"C3"` or `"q16"`.
    ///
    /// ```
    /// use rust_go::core::Point;
    ///
    /// assert_eq!(Point::from_coords("C3").unwrap(), Point::new(3, 3));
    /// assert_eq!(Point::from_coords("J1").unwrap(), Point::new(1, 9));
    /// assert!(Point::from_coords("I5").is_err());
    /// ```
    pub fn from_coords(text: &str) -> Result<Self, GoError> {
        let invalid = || GoError::InvalidCoordinate(text.to_string());

        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let col = COLS
            .iter()
            .position(|&c| c as char == letter)
            .ok_or_else(invalid)?;
        let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 || row as usize > COLS.len() {
            return Err(invalid());
        }

        Ok(Point::new(row, col as u8 + 1))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match COLS.get((self.col as usize).wrapping_sub(1)) {
            Some(&letter) => write!(f, "{}{}", letter as char, self.row),
            None => write!(f, "(r {}, c {})", self.row, self.col),
        }
    }
}
