//! Final-board scoring.
//!
//! Empty regions are flood-filled. A region whose border is a single color
//! is that color's territory; any other region is neutral. Dead stones are
//! not detected: every stone on the board counts as alive.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Player, PlayerPair, Point, ScoringMethod};

/// Point counts per owner on a final board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub territory: PlayerPair<u32>,
    pub stones: PlayerPair<u32>,
    pub dame: u32,
}

impl Territory {
    /// Classify every point of `board`.
    #[must_use]
    pub fn evaluate(board: &Board) -> Self {
        let mut result = Territory::default();
        let mut seen: FxHashSet<Point> = FxHashSet::default();

        for &point in board.points() {
            if let Some(color) = board.get(point) {
                result.stones[color] += 1;
                continue;
            }
            if seen.contains(&point) {
                continue;
            }

            let (size, borders) = flood_region(board, point, &mut seen);
            match borders.as_slice() {
                [owner] => result.territory[*owner] += size,
                _ => result.dame += size,
            }
        }

        result
    }
}

/// BFS over the empty region containing `start`.
///
/// Returns the region size and the distinct colors bordering it.
fn flood_region(board: &Board, start: Point, seen: &mut FxHashSet<Point>) -> (u32, Vec<Player>) {
    let mut queue = VecDeque::from([start]);
    let mut borders = Vec::with_capacity(2);
    let mut size = 0;
    seen.insert(start);

    while let Some(point) = queue.pop_front() {
        size += 1;
        for &neighbor in board.neighbors(point) {
            match board.get(neighbor) {
                Some(color) => {
                    if !borders.contains(&color) {
                        borders.push(color);
                    }
                }
                None => {
                    if seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    (size, borders)
}

/// Scores of a finished game. White's score includes komi.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub black: f32,
    pub white: f32,
    pub komi: f32,
}

impl GameResult {
    /// Black wins only with a strictly higher score.
    #[must_use]
    pub fn winner(&self) -> Player {
        if self.black > self.white {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Winning margin in points.
    #[must_use]
    pub fn margin(&self) -> f32 {
        (self.black - self.white).abs()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Player::Black => write!(f, "B+{:.1}", self.margin()),
            Player::White => write!(f, "W+{:.1}", self.margin()),
        }
    }
}

/// Score a final board.
#[must_use]
pub fn compute_game_result(board: &Board, komi: f32, method: ScoringMethod) -> GameResult {
    let territory = Territory::evaluate(board);
    let points = |player: Player| -> f32 {
        let bonus = match method {
            ScoringMethod::Area => territory.stones[player],
            ScoringMethod::Territory => board.captures(player),
        };
        (territory.territory[player] + bonus) as f32
    };

    GameResult {
        black: points(Player::Black),
        white: points(Player::White) + komi,
        komi,
    }
}
