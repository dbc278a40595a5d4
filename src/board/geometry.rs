//! Precomputed adjacency tables per board dimension.
//!
//! Tables are built the first time a dimension is requested and kept for the
//! life of the process. Each dimension has its own `OnceCell`, so the first
//! build is guarded once and every later lookup is a plain read.

use once_cell::sync::OnceCell;
use smallvec::SmallVec;

use crate::core::{check_dimensions, Point, MAX_BOARD_SIZE};

const SLOTS: usize = MAX_BOARD_SIZE as usize * MAX_BOARD_SIZE as usize;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: OnceCell<Geometry> = OnceCell::new();

static TABLES: [OnceCell<Geometry>; SLOTS] = [EMPTY_SLOT; SLOTS];

/// On-board neighbor and corner lists for every point of one board size.
#[derive(Debug)]
pub struct Geometry {
    rows: u8,
    cols: u8,
    points: Vec<Point>,
    neighbors: Vec<SmallVec<[Point; 4]>>,
    corners: Vec<SmallVec<[Point; 4]>>,
}

impl Geometry {
    /// Shared tables for a `rows x cols` board.
    ///
    /// Panics if the dimensions are outside `1..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn get(rows: u8, cols: u8) -> &'static Geometry {
        if let Err(err) = check_dimensions(rows, cols) {
            panic!("{err}");
        }
        let slot = (rows as usize - 1) * MAX_BOARD_SIZE as usize + (cols as usize - 1);
        TABLES[slot].get_or_init(|| Geometry::build(rows, cols))
    }

    fn build(rows: u8, cols: u8) -> Self {
        let points: Vec<Point> = (1..=rows)
            .flat_map(|row| (1..=cols).map(move |col| Point::new(row, col)))
            .collect();

        let on_board = |candidates: [Point; 4]| -> SmallVec<[Point; 4]> {
            candidates
                .into_iter()
                .filter(|p| p.is_within(rows, cols))
                .collect()
        };

        let neighbors = points.iter().map(|p| on_board(p.neighbors())).collect();
        let corners = points.iter().map(|p| on_board(p.corners())).collect();

        Self {
            rows,
            cols,
            points,
            neighbors,
            corners,
        }
    }

    #[inline]
    fn index(&self, point: Point) -> usize {
        assert!(
            point.is_within(self.rows, self.cols),
            "point {point} is off the {}x{} board",
            self.rows,
            self.cols
        );
        (point.row as usize - 1) * self.cols as usize + (point.col as usize - 1)
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Every point in row-major order, bottom row first.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// On-board orthogonal neighbors of `point`.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, point: Point) -> &[Point] {
        &self.neighbors[self.index(point)]
    }

    /// On-board diagonal neighbors of `point`.
    #[inline]
    #[must_use]
    pub fn corners(&self, point: Point) -> &[Point] {
        &self.corners[self.index(point)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_shared() {
        let a = Geometry::get(9, 9);
        let b = Geometry::get(9, 9);
        assert!(std::ptr::eq(a, b));

        let c = Geometry::get(9, 13);
        assert!(!std::ptr::eq(a, c));
        assert_eq!(c.rows(), 9);
        assert_eq!(c.cols(), 13);
    }

    #[test]
    fn test_neighbor_counts() {
        let g = Geometry::get(9, 9);
        assert_eq!(g.neighbors(Point::new(1, 1)).len(), 2);
        assert_eq!(g.neighbors(Point::new(1, 5)).len(), 3);
        assert_eq!(g.neighbors(Point::new(5, 5)).len(), 4);
        assert_eq!(g.corners(Point::new(1, 1)).len(), 1);
        assert_eq!(g.corners(Point::new(1, 5)).len(), 2);
        assert_eq!(g.corners(Point::new(5, 5)).len(), 4);
    }

    #[test]
    fn test_points_row_major() {
        let g = Geometry::get(2, 3);
        assert_eq!(
            g.points(),
            &[
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_single_point_board() {
        let g = Geometry::get(1, 1);
        assert!(g.neighbors(Point::new(1, 1)).is_empty());
        assert!(g.corners(Point::new(1, 1)).is_empty());
    }

    #[test]
    #[should_panic(expected = "off the 9x9 board")]
    fn test_off_board_lookup_panics() {
        let _ = Geometry::get(9, 9).neighbors(Point::new(10, 1));
    }

    #[test]
    #[should_panic(expected = "unsupported board size")]
    fn test_oversized_board_panics() {
        let _ = Geometry::get(20, 20);
    }
}
