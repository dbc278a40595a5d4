//! Core MCTS search algorithm.
//!
//! Each round walks from the root, expanding the first node that still has
//! an untried legal move and otherwise descending by the selection policy.
//! The new (or terminal) node is played out once and the result is counted
//! on every node back up to the root.

use std::time::Instant;

use crate::agent::{Agent, EyeFilter, NoFilter, WastefulMoveFilter};
use crate::core::{GameRng, GoError, Player};
use crate::rules::{GameState, Move};

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::policy::{expansion_candidates, RandomRollout, SelectionPolicy, SimulationPolicy, UCT};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Monte Carlo tree search agent.
///
/// The tree is rebuilt from scratch on every call and kept afterwards for
/// inspection. The RNG is reseeded from the config at the start of each
/// search, so a given position always yields the same move.
pub struct MCTSAgent {
    config: MCTSConfig,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy>,
    filter: Box<dyn WastefulMoveFilter>,
    tree: Option<MCTSTree>,
    stats: SearchStats,
}

impl MCTSAgent {
    /// Agent with `rounds` rollouts per move and UCT constant `temperature`.
    ///
    /// Panics on an invalid combination; use [`MCTSAgent::from_config`] to
    /// get an error instead.
    #[must_use]
    pub fn new(rounds: u32, temperature: f64) -> Self {
        let config = MCTSConfig::new(rounds, temperature);
        if let Err(err) = config.validate() {
            panic!("{err}");
        }
        Self::build(config)
    }

    pub fn from_config(config: MCTSConfig) -> Result<Self, GoError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MCTSConfig) -> Self {
        let filter: Box<dyn WastefulMoveFilter> = if config.filter_eyes {
            Box::new(EyeFilter)
        } else {
            Box::new(NoFilter)
        };
        Self {
            config,
            selection: Box::new(UCT),
            simulation: Box::new(RandomRollout),
            filter,
            tree: None,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Replace the pruning predicate used for expansion and rollouts.
    pub fn with_filter<F: WastefulMoveFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Run a full search from `state` and return the most visited move.
    pub fn search(&mut self, state: &GameState) -> Move {
        let start = Instant::now();
        self.stats.reset();
        let mut rng = GameRng::new(self.config.seed);

        let candidates = expansion_candidates(state, self.filter.as_ref(), self.config.include_resign);
        let mut tree = MCTSTree::new(MCTSNode::root(state.clone(), candidates));

        if state.is_over() {
            self.tree = Some(tree);
            return Move::Pass;
        }

        let max_moves = self.config.rollout_cap(state.board().points().len());
        for _ in 0..self.config.rounds {
            self.iteration(&mut tree, &mut rng, max_moves);
            self.stats.iterations += 1;
        }

        let chosen = Self::best_child(&tree, &mut rng);
        let (mv, visits, win_rate) = match chosen {
            Some(id) => {
                let child = tree.get(id);
                let mv = child.mv.unwrap_or(Move::Pass);
                (mv, child.visits, child.winning_frac(state.next_player()))
            }
            None => (Move::Pass, 0, 0.0),
        };
        self.stats.chosen_visits = visits;
        self.stats.chosen_win_rate = win_rate;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            rounds = self.config.rounds,
            nodes = tree.len(),
            chosen = %mv,
            visits,
            win_rate,
            elapsed_us = self.stats.time_us,
            "search complete"
        );

        self.tree = Some(tree);
        mv
    }

    /// Single round: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut MCTSTree, rng: &mut GameRng, max_moves: u32) {
        let mut current = tree.root();
        loop {
            if let Some(mv) = tree.get_mut(current).pop_unvisited(rng) {
                current = self.expand(tree, current, mv);
                break;
            }
            match self.selection.select(tree, current, &self.config) {
                Some(child) => current = child,
                None => break,
            }
        }

        let mut sim_rng = rng.fork();
        let winner = self.simulation.simulate(
            &tree.get(current).state,
            &mut sim_rng,
            self.filter.as_ref(),
            max_moves,
        );
        self.stats.simulations += 1;
        Self::backpropagate(tree, current, winner);
    }

    fn expand(&mut self, tree: &mut MCTSTree, parent: NodeId, mv: Move) -> NodeId {
        let parent_node = tree.get(parent);
        let state = parent_node.state.apply_move(mv);
        let depth = parent_node.depth + 1;
        let candidates = expansion_candidates(&state, self.filter.as_ref(), self.config.include_resign);

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        tree.add_child(parent, MCTSNode::new(state, parent, Some(mv), depth, candidates))
    }

    fn backpropagate(tree: &mut MCTSTree, leaf: NodeId, winner: Player) {
        let mut current = leaf;
        while !current.is_none() {
            let node = tree.get_mut(current);
            node.record_win(winner);
            current = node.parent;
        }
    }

    /// Most visited root child; ties are broken at random.
    fn best_child(tree: &MCTSTree, rng: &mut GameRng) -> Option<NodeId> {
        let root = tree.root();
        let most = tree.children(root).map(|(_, c)| c.visits).max()?;
        let tied: Vec<NodeId> = tree
            .children(root)
            .filter(|(_, c)| c.visits == most)
            .map(|(id, _)| id)
            .collect();
        rng.choose(&tied).copied()
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree from the most recent search.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree> {
        self.tree.as_ref()
    }

    /// Visit counts of the root's children from the most recent search.
    pub fn action_visits(&self) -> Vec<(Move, u32)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        tree.children(tree.root())
            .filter_map(|(_, c)| c.mv.map(|mv| (mv, c.visits)))
            .collect()
    }

    /// Root children's visit shares from the most recent search.
    ///
    /// Returns (move, probability) pairs summing to ~1.0.
    pub fn action_probabilities(&self) -> Vec<(Move, f64)> {
        let visits = self.action_visits();
        let total: u32 = visits.iter().map(|&(_, v)| v).sum();
        if total == 0 {
            let uniform = 1.0 / visits.len().max(1) as f64;
            return visits.into_iter().map(|(mv, _)| (mv, uniform)).collect();
        }
        visits
            .into_iter()
            .map(|(mv, v)| (mv, f64::from(v) / f64::from(total)))
            .collect()
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

impl Agent for MCTSAgent {
    fn select_move(&mut self, game_state: &GameState) -> Move {
        self.search(game_state)
    }
}
