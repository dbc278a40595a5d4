//! Uniform random play.
//!
//! Candidates are drawn in shuffled order and the first legal, non-wasteful
//! one is taken, so a move costs one legality check in the common case
//! instead of a full board scan.

use super::filter::{EyeFilter, WastefulMoveFilter};
use super::Agent;
use crate::core::{GameRng, Point};
use crate::rules::{GameState, Move};

/// Pick a uniformly random legal move that `filter` does not prune.
///
/// Falls back to pass when no point qualifies (or the game is over).
pub fn random_move(state: &GameState, rng: &mut GameRng, filter: &dyn WastefulMoveFilter) -> Move {
    if state.is_over() {
        return Move::Pass;
    }

    let board = state.board();
    let player = state.next_player();
    let mut candidates: Vec<Point> = board.empty_points().collect();
    rng.shuffle(&mut candidates);

    candidates
        .into_iter()
        .filter(|&point| !filter.is_likely_wasteful(board, point, player))
        .map(Move::Play)
        .find(|&mv| state.is_valid_move(mv))
        .unwrap_or(Move::Pass)
}

/// Baseline agent playing uniformly random sensible moves.
pub struct RandomAgent {
    rng: GameRng,
    filter: Box<dyn WastefulMoveFilter>,
}

impl RandomAgent {
    /// Random agent that never fills its own eyes.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            filter: Box::new(EyeFilter),
        }
    }

    /// Replace the pruning predicate.
    pub fn with_filter<F: WastefulMoveFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, game_state: &GameState) -> Move {
        random_move(game_state, &mut self.rng, self.filter.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::NoFilter;
    use crate::core::Player;

    #[test]
    fn test_random_move_is_legal() {
        let mut agent = RandomAgent::new(7);
        let mut game = GameState::new_game(5);
        for _ in 0..20 {
            let mv = agent.select_move(&game);
            assert!(game.is_valid_move(mv));
            game = game.apply_move(mv);
            if game.is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_passes_when_only_eyes_remain() {
        // 2x2 board: black holds three points, the fourth is black's eye.
        let game = GameState::new_game(2)
            .apply_move(Move::Play(Point::new(1, 2)))
            .apply_move(Move::Pass)
            .apply_move(Move::Play(Point::new(2, 1)))
            .apply_move(Move::Pass)
            .apply_move(Move::Play(Point::new(2, 2)))
            .apply_move(Move::Pass);
        assert_eq!(game.next_player(), Player::Black);

        let mut agent = RandomAgent::new(1);
        assert_eq!(agent.select_move(&game), Move::Pass);

        // Without the filter the only candidate is suicide, so it still passes.
        let mut unfiltered = RandomAgent::new(1).with_filter(NoFilter);
        assert_eq!(unfiltered.select_move(&game), Move::Pass);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let game = GameState::new_game(9);
        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);
        for _ in 0..5 {
            assert_eq!(a.select_move(&game), b.select_move(&game));
        }
    }

    #[test]
    fn test_terminal_state_passes() {
        let game = GameState::new_game(9).apply_move(Move::Resign);
        let mut agent = RandomAgent::new(3);
        assert_eq!(agent.select_move(&game), Move::Pass);
    }
}
