//! Eye detection used to keep random play from filling its own eyes.

use crate::board::Board;
use crate::core::{Player, Point};

/// Is `point` an eye of `color`?
///
/// The point must be empty with every on-board neighbor held by `color`.
/// Diagonals decide whether the eye is real: in the center at least three
/// of the four must be friendly; on the edge or in the corner every
/// on-board diagonal must be friendly.
#[must_use]
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    if board
        .neighbors(point)
        .iter()
        .any(|&n| board.get(n) != Some(color))
    {
        return false;
    }

    let corners = board.corners(point);
    let off_board = 4 - corners.len();
    let friendly = corners
        .iter()
        .filter(|&&c| board.get(c) == Some(color))
        .count();

    if off_board > 0 {
        off_board + friendly == 4
    } else {
        friendly >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Point {
        Point::new(row, col)
    }

    fn surround(board: &mut Board, point: Point, color: Player) {
        for &n in board.neighbors(point) {
            board.place_stone(color, n);
        }
    }

    #[test]
    fn test_center_eye() {
        let mut board = Board::new(9, 9);
        surround(&mut board, p(5, 5), Player::Black);
        assert!(!is_point_an_eye(&board, p(5, 5), Player::Black));

        board.place_stone(Player::Black, p(4, 4));
        board.place_stone(Player::Black, p(6, 6));
        assert!(!is_point_an_eye(&board, p(5, 5), Player::Black));

        board.place_stone(Player::Black, p(4, 6));
        assert!(is_point_an_eye(&board, p(5, 5), Player::Black));
        assert!(!is_point_an_eye(&board, p(5, 5), Player::White));
    }

    #[test]
    fn test_corner_eye_needs_its_diagonal() {
        let mut board = Board::new(9, 9);
        surround(&mut board, p(1, 1), Player::White);
        assert!(!is_point_an_eye(&board, p(1, 1), Player::White));

        board.place_stone(Player::White, p(2, 2));
        assert!(is_point_an_eye(&board, p(1, 1), Player::White));
    }

    #[test]
    fn test_enemy_diagonal_spoils_edge_eye() {
        let mut board = Board::new(9, 9);
        surround(&mut board, p(1, 5), Player::Black);
        board.place_stone(Player::Black, p(2, 4));
        board.place_stone(Player::White, p(2, 6));
        assert!(!is_point_an_eye(&board, p(1, 5), Player::Black));
    }

    #[test]
    fn test_occupied_or_open_point_is_not_an_eye() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, p(3, 3));
        assert!(!is_point_an_eye(&board, p(3, 3), Player::Black));
        assert!(!is_point_an_eye(&board, p(3, 4), Player::Black));
    }
}
