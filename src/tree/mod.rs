//! Rooted tree data structures.
//!
//! This module provides the arena tree that every layout strategy reads.
//! Nodes are stored in breadth-first order, so the arena itself doubles as
//! a traversal order:
//! - iterating forward visits parents before children (pre-order passes)
//! - iterating backward visits children before parents (post-order passes)

mod builder;
mod edge_map;
mod node;

pub use builder::TreeBuilder;
pub use edge_map::EdgeMap;
pub use node::{NodeId, TreeNode};

use crate::error::MalformedTreeError;

/// A rooted, ordered tree stored as an arena of [`TreeNode`]s.
///
/// The tree is immutable once built. Layout strategies keep their scratch
/// state in separate per-call buffers, so a `Tree` can be laid out from
/// several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// Arena in breadth-first order; index 0 is the root.
    nodes: Vec<TreeNode>,
    /// Node id → arena index (None for ids unreachable from the root).
    slots: Vec<Option<usize>>,
}

impl Tree {
    /// Arena index of the root.
    pub const ROOT: usize = 0;

    pub(crate) fn from_parts(nodes: Vec<TreeNode>, slots: Vec<Option<usize>>) -> Self {
        Self { nodes, slots }
    }

    /// Build a tree from an edge map with the default [`TreeBuilder`].
    pub fn from_edge_map(edges: &EdgeMap, node_count: usize) -> Result<Self, MalformedTreeError> {
        TreeBuilder::new().build(edges, node_count)
    }

    /// Build a tree from flat `[parent, child, ...]` pairs.
    pub fn from_pairs(pairs: &[u32], node_count: usize) -> Result<Self, MalformedTreeError> {
        Self::from_edge_map(&EdgeMap::from_pairs(pairs)?, node_count)
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT]
    }

    /// Node at an arena index.
    #[inline]
    pub fn node(&self, idx: usize) -> &TreeNode {
        &self.nodes[idx]
    }

    /// All nodes in breadth-first order.
    #[inline]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Children of the node at `idx`, as arena indices.
    #[inline]
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].children
    }

    /// Number of nodes in the tree (reachable from the root).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the position table produced for this tree.
    ///
    /// May exceed [`len`](Self::len) when some ids are unreachable.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Arena index of a node id, if the id is part of the tree.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.slots.get(id.slot()).copied().flatten()
    }

    /// Largest depth of any node (0 for a root-only tree).
    pub fn max_depth(&self) -> u32 {
        // Breadth-first order puts the deepest node last.
        self.nodes.last().map_or(0, |n| n.depth)
    }

    /// Parent → child edges as node ids, in breadth-first order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.children
                .iter()
                .map(move |&child| (node.id, self.nodes[child].id))
        })
    }
}
