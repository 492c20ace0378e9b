//! Node identifiers and arena entries.
//!
//! Every vertex of a [`Tree`](super::Tree) lives in a flat arena. Nodes
//! refer to each other by arena index:
//! - `children` owns the ordered child indices (left-to-right drawing order)
//! - `parent` is a plain back-index with no ownership implication
//!
//! The caller-facing [`NodeId`] is kept separately because it indexes the
//! output position table, while arena indices follow breadth-first order.

use std::fmt;

/// Caller-facing node identifier.
///
/// Ids come from the input edge map and index the output position table.
/// It wraps a u32 for efficient storage and WebAssembly interop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root id of every edge map.
    pub const ROOT: NodeId = NodeId(0);

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Slot of this node in a position table.
    #[inline]
    pub fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// One vertex of the tree arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Caller-facing id (index into the position table).
    pub id: NodeId,
    /// Arena index of the parent (None for the root).
    pub parent: Option<usize>,
    /// Arena indices of the children, in drawing order.
    pub children: Vec<usize>,
    /// Distance from the root (root = 0).
    pub depth: u32,
}

impl TreeNode {
    pub(crate) fn new(id: NodeId, parent: Option<usize>, depth: u32) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            depth,
        }
    }

    /// True when the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child in drawing order.
    #[inline]
    pub fn first_child(&self) -> Option<usize> {
        self.children.first().copied()
    }

    /// Last child in drawing order.
    #[inline]
    pub fn last_child(&self) -> Option<usize> {
        self.children.last().copied()
    }
}
