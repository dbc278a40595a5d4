//! The Go board: strings on a grid plus an incrementally updated hash.
//!
//! ## Data Layout
//!
//! - `grid`: persistent map from occupied point to the `Arc<GoString>` on
//!   it. Every stone of a string maps to the same `Arc`.
//! - `hash`: XOR of the Zobrist codes of every occupied (point, color).
//!
//! Cloning a board clones the persistent map (O(1), structure shared) and
//! copies the scalars. Mutations replace whole strings, never edit one in
//! place, so other snapshots are unaffected.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use im::HashMap as ImHashMap;
use rustc_hash::FxHasher;
use smallvec::SmallVec;

use super::geometry::Geometry;
use super::string::GoString;
use super::zobrist::{self, EMPTY_BOARD};
use crate::core::{Player, PlayerPair, Point};

type StringMap = ImHashMap<Point, Arc<GoString>, BuildHasherDefault<FxHasher>>;

/// A board position.
#[derive(Clone)]
pub struct Board {
    geometry: &'static Geometry,
    grid: StringMap,
    hash: u64,
    captures: PlayerPair<u32>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if either dimension is outside `1..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(num_rows: u8, num_cols: u8) -> Self {
        Self {
            geometry: Geometry::get(num_rows, num_cols),
            grid: StringMap::default(),
            hash: EMPTY_BOARD,
            captures: PlayerPair::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn num_rows(&self) -> u8 {
        self.geometry.rows()
    }

    #[inline]
    #[must_use]
    pub fn num_cols(&self) -> u8 {
        self.geometry.cols()
    }

    /// Adjacency tables shared by every board of this size.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &'static Geometry {
        self.geometry
    }

    #[inline]
    #[must_use]
    pub fn is_on_grid(&self, point: Point) -> bool {
        point.is_within(self.num_rows(), self.num_cols())
    }

    /// On-board orthogonal neighbors.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, point: Point) -> &'static [Point] {
        self.geometry.neighbors(point)
    }

    /// On-board diagonal neighbors.
    #[inline]
    #[must_use]
    pub fn corners(&self, point: Point) -> &'static [Point] {
        self.geometry.corners(point)
    }

    /// Every point in row-major order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &'static [Point] {
        self.geometry.points()
    }

    /// Empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points()
            .iter()
            .copied()
            .filter(move |p| !self.grid.contains_key(p))
    }

    /// Color of the stone at `point`, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Player> {
        self.grid.get(&point).map(|s| s.color())
    }

    /// The whole string at `point`, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn get_go_string(&self, point: Point) -> Option<&Arc<GoString>> {
        self.grid.get(&point)
    }

    /// Position hash: XOR of the codes of every stone on the board.
    #[inline]
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    /// Opposing stones `player` has captured so far on this board.
    #[must_use]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player]
    }

    /// Number of `player`'s stones on the board.
    #[must_use]
    pub fn stone_count(&self, player: Player) -> usize {
        self.grid.values().filter(|s| s.color() == player).count()
    }

    /// Place a stone and resolve captures.
    ///
    /// Panics if `point` is off the board or already occupied; legality
    /// must be checked by the caller.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(
            self.is_on_grid(point),
            "point {point} is off the {}x{} board",
            self.num_rows(),
            self.num_cols()
        );
        assert!(
            !self.grid.contains_key(&point),
            "point {point} is already occupied"
        );

        let mut liberties: SmallVec<[Point; 4]> = SmallVec::new();
        let mut same_color: SmallVec<[Arc<GoString>; 4]> = SmallVec::new();
        let mut opposite_color: SmallVec<[Point; 4]> = SmallVec::new();

        for &neighbor in self.neighbors(point) {
            match self.grid.get(&neighbor) {
                None => liberties.push(neighbor),
                Some(string) if string.color() == player => {
                    if !same_color.iter().any(|s| Arc::ptr_eq(s, string)) {
                        same_color.push(Arc::clone(string));
                    }
                }
                Some(_) => opposite_color.push(neighbor),
            }
        }

        let mut new_string = GoString::new(player, [point], liberties);
        for string in &same_color {
            new_string = new_string.merged_with(string);
        }
        self.replace_string(new_string);
        self.hash ^= zobrist::hash_code(point, player);

        for neighbor in opposite_color {
            // Several neighbors may belong to one string, and an earlier
            // capture may already have cleared this one.
            let Some(string) = self.grid.get(&neighbor).cloned() else {
                continue;
            };
            if !string.liberties().contains(&point) {
                continue;
            }
            let reduced = string.without_liberty(point);
            if reduced.num_liberties() == 0 {
                self.remove_string(&reduced);
            } else {
                self.replace_string(reduced);
            }
        }
    }

    /// Would playing `player` at `point` leave the new string without
    /// liberties while capturing nothing?
    #[must_use]
    pub fn is_self_capture(&self, player: Player, point: Point) -> bool {
        let mut friendly: SmallVec<[&Arc<GoString>; 4]> = SmallVec::new();
        for neighbor in self.neighbors(point) {
            match self.grid.get(neighbor) {
                None => return false,
                Some(string) if string.color() == player => friendly.push(string),
                Some(string) => {
                    if string.num_liberties() == 1 {
                        return false;
                    }
                }
            }
        }
        friendly.iter().all(|s| s.num_liberties() == 1)
    }

    fn replace_string(&mut self, string: GoString) {
        let string = Arc::new(string);
        for &point in string.stones() {
            self.grid.insert(point, Arc::clone(&string));
        }
    }

    fn remove_string(&mut self, string: &GoString) {
        let color = string.color();
        for &point in string.stones() {
            self.grid.remove(&point);
            self.hash ^= zobrist::hash_code(point, color);
        }

        let geometry = self.geometry;
        for &point in string.stones() {
            for neighbor in geometry.neighbors(point) {
                let Some(adjacent) = self.grid.get(neighbor).cloned() else {
                    continue;
                };
                if !adjacent.liberties().contains(&point) {
                    self.replace_string(adjacent.with_liberty(point));
                }
            }
        }

        self.captures[color.other()] += string.num_stones() as u32;
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows() == other.num_rows()
            && self.num_cols() == other.num_cols()
            && self.hash == other.hash
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.num_rows())
            .field("cols", &self.num_cols())
            .field("stones", &self.grid.len())
            .field("hash", &format_args!("{:#018x}", self.hash))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9, 9);
        assert_eq!(board.num_rows(), 9);
        assert_eq!(board.num_cols(), 9);
        assert_eq!(board.zobrist_hash(), EMPTY_BOARD);
        assert_eq!(board.empty_points().count(), 81);
        assert_eq!(board.get(p(5, 5)), None);
    }

    #[test]
    fn test_place_single_stone() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(1, 1));

        assert_eq!(board.get(p(1, 1)), Some(Player::Black));
        let string = board.get_go_string(p(1, 1)).unwrap();
        assert_eq!(string.num_liberties(), 2);
        assert_eq!(board.zobrist_hash(), zobrist::hash_code(p(1, 1), Player::Black));
    }

    #[test]
    fn test_merge_shares_one_string() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(3, 3));
        board.place_stone(Player::Black, p(3, 5));
        board.place_stone(Player::Black, p(3, 4));

        let a = board.get_go_string(p(3, 3)).unwrap();
        let b = board.get_go_string(p(3, 5)).unwrap();
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(a.num_stones(), 3);
        assert_eq!(a.num_liberties(), 8);
    }

    #[test]
    fn test_opponent_loses_liberty() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(5, 5));
        board.place_stone(Player::White, p(5, 6));

        assert_eq!(board.get_go_string(p(5, 5)).unwrap().num_liberties(), 3);
        assert_eq!(board.get_go_string(p(5, 6)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_capture_in_corner() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, p(1, 1));
        board.place_stone(Player::Black, p(1, 2));
        board.place_stone(Player::Black, p(2, 1));

        assert_eq!(board.get(p(1, 1)), None);
        assert_eq!(board.captures(Player::Black), 1);
        assert_eq!(board.get_go_string(p(1, 2)).unwrap().num_liberties(), 3);
        assert_eq!(board.get_go_string(p(2, 1)).unwrap().num_liberties(), 3);

        let mut expected = Board::new(9, 9);
        expected.place_stone(Player::Black, p(1, 2));
        expected.place_stone(Player::Black, p(2, 1));
        assert_eq!(board, expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, p(1, 1));
        board.place_stone(Player::Black, p(1, 2));
        let snapshot = board.clone();

        board.place_stone(Player::Black, p(2, 1));

        assert_eq!(snapshot.get(p(1, 1)), Some(Player::White));
        assert_eq!(snapshot.get_go_string(p(1, 1)).unwrap().num_liberties(), 1);
        assert_eq!(snapshot.get_go_string(p(1, 2)).unwrap().num_liberties(), 2);
        assert_ne!(snapshot.zobrist_hash(), board.zobrist_hash());
    }

    #[test]
    fn test_self_capture_detection() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(1, 2));
        board.place_stone(Player::Black, p(2, 1));

        assert!(board.is_self_capture(Player::White, p(1, 1)));
        assert!(!board.is_self_capture(Player::Black, p(1, 1)));
        assert!(!board.is_self_capture(Player::White, p(5, 5)));
    }

    #[test]
    fn test_capture_is_not_self_capture() {
        // Both black stones are in atari, so white at (1,1) captures.
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(1, 2));
        board.place_stone(Player::Black, p(2, 1));
        board.place_stone(Player::White, p(1, 3));
        board.place_stone(Player::White, p(2, 2));
        board.place_stone(Player::White, p(3, 1));

        assert_eq!(board.get_go_string(p(1, 2)).unwrap().num_liberties(), 1);
        assert!(!board.is_self_capture(Player::White, p(1, 1)));
    }

    #[test]
    fn test_friendly_liberty_prevents_self_capture() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, p(1, 2));
        board.place_stone(Player::Black, p(2, 1));
        board.place_stone(Player::Black, p(2, 2));

        // White (1,2) still has (1,3), so filling (1,1) connects to a liberty.
        assert!(!board.is_self_capture(Player::White, p(1, 1)));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_panics() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(3, 3));
        board.place_stone(Player::White, p(3, 3));
    }

    #[test]
    #[should_panic(expected = "off the 9x9 board")]
    fn test_place_off_board_panics() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(10, 3));
    }

    #[test]
    fn test_stone_count() {
        let mut board = Board::new(5, 5);
        board.place_stone(Player::Black, p(1, 1));
        board.place_stone(Player::Black, p(1, 2));
        board.place_stone(Player::White, p(3, 3));

        assert_eq!(board.stone_count(Player::Black), 2);
        assert_eq!(board.stone_count(Player::White), 1);
    }
}
