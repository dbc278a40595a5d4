//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. The root is
//! always at index 0 and nodes are never removed during a search.

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSTree {
    nodes: Vec<MCTSNode>,
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree holding just `root`.
    pub fn new(root: MCTSNode) -> Self {
        Self::with_capacity(root, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root: MCTSNode, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(root);
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate `node` and register it as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: MCTSNode) -> NodeId {
        let id = self.alloc(node);
        self.get_mut(parent).children.push(id);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    pub fn root_node_mut(&mut self) -> &mut MCTSNode {
        self.get_mut(self.root)
    }

    /// Children of `id` paired with their ids.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.get(id).children.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let expanded_nodes = self.nodes.iter().filter(|n| !n.children.is_empty()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            expanded_nodes,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeStats {
    pub node_count: usize,
    pub max_depth: u16,
    pub terminal_count: usize,
    /// Nodes with at least one child.
    pub expanded_nodes: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_nodes == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / self.expanded_nodes as f64
        }
    }
}
