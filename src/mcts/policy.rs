//! MCTS policies for selection, expansion candidates, and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: which child to descend into (UCT)
//! - `SimulationPolicy`: how to play out a leaf (random rollout)

use crate::agent::{random_move, WastefulMoveFilter};
use crate::core::{GameRng, Player};
use crate::rules::{GameState, Move};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Pick a child of `node` to descend into, or `None` if it has none.
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCT score of a child for the player choosing it.
///
/// `win_frac + temperature * sqrt(ln(parent_visits) / child_visits)`.
/// Unvisited children score infinitely high.
#[must_use]
pub fn uct_score(parent_visits: u32, child_visits: u32, win_frac: f64, temperature: f64) -> f64 {
    if child_visits == 0 {
        return f64::INFINITY;
    }
    let ln_parent = f64::from(parent_visits.max(1)).ln();
    win_frac + temperature * (ln_parent / f64::from(child_visits)).sqrt()
}

/// Upper Confidence bounds applied to Trees.
///
/// Each child is scored from the point of view of the player moving at the
/// parent. Ties go to the earliest expanded child.
#[derive(Clone, Debug, Default)]
pub struct UCT;

impl SelectionPolicy for UCT {
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent = tree.get(node);
        let chooser = parent.state.next_player();

        let mut best: Option<(NodeId, f64)> = None;
        for (id, child) in tree.children(node) {
            let score = uct_score(
                parent.visits,
                child.visits,
                child.winning_frac(chooser),
                config.temperature,
            );
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }
}

// =============================================================================
// Expansion candidates
// =============================================================================

/// Moves a fresh node may expand into.
///
/// Every empty point `filter` does not prune, then pass, then resign when
/// `include_resign` is set. Legality is left to the node, which checks each
/// candidate when it is drawn. Empty for finished games.
pub fn expansion_candidates(
    state: &GameState,
    filter: &dyn WastefulMoveFilter,
    include_resign: bool,
) -> Vec<Move> {
    if state.is_over() {
        return Vec::new();
    }
    let board = state.board();
    let player = state.next_player();
    let mut moves: Vec<Move> = board
        .empty_points()
        .filter(|&point| !filter.is_likely_wasteful(board, point, player))
        .map(Move::Play)
        .collect();
    moves.push(Move::Pass);
    if include_resign {
        moves.push(Move::Resign);
    }
    moves
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Play out `state` and report the winner.
    fn simulate(
        &self,
        state: &GameState,
        rng: &mut GameRng,
        filter: &dyn WastefulMoveFilter,
        max_moves: u32,
    ) -> Player;
}

/// Both sides play random non-wasteful moves until the game ends.
///
/// A rollout that reaches `max_moves` is scored on the board as it stands.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl SimulationPolicy for RandomRollout {
    fn simulate(
        &self,
        state: &GameState,
        rng: &mut GameRng,
        filter: &dyn WastefulMoveFilter,
        max_moves: u32,
    ) -> Player {
        let mut state = state.clone();
        let mut moves = 0;
        while !state.is_over() {
            if moves >= max_moves {
                tracing::trace!(moves, "rollout hit move cap, scoring board as is");
                return state.score().winner();
            }
            let mv = random_move(&state, rng, filter);
            state = state.apply_move(mv);
            moves += 1;
        }
        match state.winner() {
            Some(winner) => winner,
            None => state.score().winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{EyeFilter, NoFilter};
    use crate::core::Point;
    use crate::mcts::node::MCTSNode;

    fn tree_with_children(stats: &[(u32, u32)]) -> MCTSTree {
        // (visits, black wins) per child; black moves at the root.
        let root_state = GameState::new_game(5);
        let mut tree = MCTSTree::new(MCTSNode::root(root_state.clone(), Vec::new()));
        let root = tree.root();
        for (i, &(visits, wins)) in stats.iter().enumerate() {
            let mv = Move::Play(Point::new(1, i as u8 + 1));
            let mut child = MCTSNode::new(root_state.apply_move(mv), root, Some(mv), 1, Vec::new());
            child.visits = visits;
            child.win_counts[Player::Black] = wins;
            child.win_counts[Player::White] = visits - wins;
            tree.add_child(root, child);
        }
        tree.get_mut(root).visits = stats.iter().map(|&(v, _)| v).sum();
        tree
    }

    #[test]
    fn test_uct_score() {
        assert_eq!(uct_score(10, 0, 0.0, 1.0), f64::INFINITY);
        assert_eq!(uct_score(10, 5, 0.4, 0.0), 0.4);
        let expected = 0.5 + 2.0 * (f64::from(16u32).ln() / 4.0).sqrt();
        assert!((uct_score(16, 4, 0.5, 2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uct_exploits_with_zero_temperature() {
        let tree = tree_with_children(&[(10, 3), (10, 8), (10, 5)]);
        let config = MCTSConfig::default().with_temperature(0.0);
        assert_eq!(UCT.select(&tree, tree.root(), &config), Some(NodeId::new(2)));
    }

    #[test]
    fn test_uct_explores_rarely_visited() {
        let tree = tree_with_children(&[(100, 60), (2, 1)]);
        let config = MCTSConfig::default().with_temperature(1.5);
        assert_eq!(UCT.select(&tree, tree.root(), &config), Some(NodeId::new(2)));
    }

    #[test]
    fn test_uct_ties_go_to_first_child() {
        let tree = tree_with_children(&[(4, 2), (4, 2), (4, 2)]);
        let config = MCTSConfig::default();
        assert_eq!(UCT.select(&tree, tree.root(), &config), Some(NodeId::new(1)));
    }

    #[test]
    fn test_uct_without_children() {
        let tree = tree_with_children(&[]);
        assert_eq!(UCT.select(&tree, tree.root(), &MCTSConfig::default()), None);
    }

    #[test]
    fn test_expansion_candidates() {
        let game = GameState::new_game(3);
        let moves = expansion_candidates(&game, &EyeFilter, false);
        assert_eq!(moves.len(), 9 + 1);
        assert_eq!(moves.last(), Some(&Move::Pass));

        let moves = expansion_candidates(&game, &NoFilter, true);
        assert_eq!(moves.last(), Some(&Move::Resign));

        let over = game.apply_move(Move::Resign);
        assert!(expansion_candidates(&over, &NoFilter, true).is_empty());
    }

    #[test]
    fn test_rollout_reports_resignation_winner() {
        let over = GameState::new_game(5).apply_move(Move::Resign);
        let mut rng = GameRng::new(1);
        assert_eq!(RandomRollout.simulate(&over, &mut rng, &EyeFilter, 75), Player::White);
    }

    #[test]
    fn test_rollout_with_zero_cap_scores_immediately() {
        // Empty board: white wins on komi.
        let game = GameState::new_game(5);
        let mut rng = GameRng::new(1);
        assert_eq!(RandomRollout.simulate(&game, &mut rng, &EyeFilter, 0), Player::White);
    }

    #[test]
    fn test_rollout_is_deterministic() {
        let game = GameState::new_game(5);
        let a = RandomRollout.simulate(&game, &mut GameRng::new(9), &EyeFilter, 75);
        let b = RandomRollout.simulate(&game, &mut GameRng::new(9), &EyeFilter, 75);
        assert_eq!(a, b);
    }
}
