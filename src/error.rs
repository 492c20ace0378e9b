//! Error types for tree construction and layout.

use thiserror::Error;

use crate::tree::NodeId;

/// The edge map does not describe a single rooted tree.
///
/// Raised by the tree builder. Fatal to the call: no partial tree is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeError {
    #[error("tree has no nodes")]
    EmptyTree,

    #[error("edge list has odd length {0}; expected [parent, child] pairs")]
    OddEdgeList(usize),

    #[error("edge map key {0:?} is not a node id")]
    InvalidKey(String),

    #[error("parent {parent} is out of range for {node_count} nodes")]
    ParentOutOfRange { parent: NodeId, node_count: usize },

    #[error("child {child} of {parent} is out of range for {node_count} nodes")]
    ChildOutOfRange {
        parent: NodeId,
        child: NodeId,
        node_count: usize,
    },

    #[error("{0} is listed as its own child")]
    SelfLoop(NodeId),

    #[error("edge map contains a cycle through {0}")]
    Cycle(NodeId),

    #[error("{child} is listed under both {first} and {second}")]
    DuplicateParent {
        child: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("root is listed as a child of {0}")]
    RootHasParent(NodeId),
}

/// A layout call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The strategy cannot place this tree shape.
    #[error("{node} has {children} children; the strategy supports at most two")]
    UnsupportedShape { node: NodeId, children: usize },

    #[error("unknown layout strategy {0:?}")]
    UnknownStrategy(String),

    #[error(transparent)]
    Tree(#[from] MalformedTreeError),
}
