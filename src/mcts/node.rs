//! MCTS node structure.
//!
//! Nodes live in an arena and refer to each other by `NodeId`. Each node
//! owns the game state it represents; sibling states share their common
//! history through the state's persistent handle.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, PlayerPair};
use crate::rules::{GameState, Move};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
#[derive(Clone, Debug)]
pub struct MCTSNode {
    /// Position this node represents.
    pub state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (None for root).
    pub mv: Option<Move>,

    /// Expanded children, in expansion order.
    pub children: Vec<NodeId>,

    /// Rollouts that passed through this node.
    pub visits: u32,

    /// Rollouts won, per player.
    pub win_counts: PlayerPair<u32>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Candidate moves not yet expanded. Legality is checked when drawn.
    unvisited_moves: Vec<Move>,
}

impl MCTSNode {
    /// Create a node for `state` reached by `mv` from `parent`.
    pub fn new(
        state: GameState,
        parent: NodeId,
        mv: Option<Move>,
        depth: u16,
        candidates: Vec<Move>,
    ) -> Self {
        let unvisited_moves = if state.is_over() { Vec::new() } else { candidates };
        Self {
            state,
            parent,
            mv,
            children: Vec::new(),
            visits: 0,
            win_counts: PlayerPair::default(),
            depth,
            unvisited_moves,
        }
    }

    /// Create a root node.
    pub fn root(state: GameState, candidates: Vec<Move>) -> Self {
        Self::new(state, NodeId::NONE, None, 0, candidates)
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_over()
    }

    /// Candidates left to draw. Some may turn out illegal when drawn.
    #[inline]
    #[must_use]
    pub fn unvisited_count(&self) -> usize {
        self.unvisited_moves.len()
    }

    #[inline]
    #[must_use]
    pub fn can_add_child(&self) -> bool {
        !self.unvisited_moves.is_empty()
    }

    /// Draw a random legal move among the unvisited candidates.
    ///
    /// Illegal candidates drawn along the way are discarded for good.
    pub fn pop_unvisited(&mut self, rng: &mut GameRng) -> Option<Move> {
        while !self.unvisited_moves.is_empty() {
            let idx = rng.gen_range_usize(0..self.unvisited_moves.len());
            let mv = self.unvisited_moves.swap_remove(idx);
            if self.state.is_valid_move(mv) {
                return Some(mv);
            }
        }
        None
    }

    /// Count one rollout won by `winner`.
    pub fn record_win(&mut self, winner: Player) {
        self.visits += 1;
        self.win_counts[winner] += 1;
    }

    /// Fraction of rollouts through this node won by `player`.
    #[must_use]
    pub fn winning_frac(&self, player: Player) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.win_counts[player]) / f64::from(self.visits)
        }
    }
}
