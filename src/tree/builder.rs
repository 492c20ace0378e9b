//! Tree construction from an edge map.
//!
//! The builder validates the whole edge map before materializing anything:
//!
//! 1. **Range and shape scan:** every key and child id must be below
//!    `node_count`, no node may list itself, and every child has exactly
//!    one parent.
//! 2. **Cycle check:** the edges are loaded into a petgraph `StableGraph`
//!    and topologically sorted, which catches cycles even among ids the
//!    root cannot reach.
//! 3. **Breadth-first materialization:** starting at id 0, one arena node
//!    is created per reachable id, children in edge map order.
//!
//! Ids unreachable from the root are left out of the tree. Their slots in a
//! position table stay at `(0, 0)`.

use std::collections::VecDeque;

use log::{debug, warn};
use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use super::edge_map::EdgeMap;
use super::node::{NodeId, TreeNode};
use super::Tree;
use crate::error::MalformedTreeError;

/// Builds [`Tree`]s from edge maps.
///
/// Every pass over the tree, here and in the layout strategies, walks the
/// arena with a queue or an explicit stack, so tree height is unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the tree rooted at id 0.
    ///
    /// # Arguments
    ///
    /// * `edges` - Parent id → ordered child ids
    /// * `node_count` - Length of the position table; every id must be below it
    pub fn build(&self, edges: &EdgeMap, node_count: usize) -> Result<Tree, MalformedTreeError> {
        if node_count == 0 {
            return Err(MalformedTreeError::EmptyTree);
        }

        let root_parent = Self::check_edges(edges, node_count)?;
        Self::check_acyclic(edges, node_count)?;
        if let Some(parent) = root_parent {
            return Err(MalformedTreeError::RootHasParent(parent));
        }

        let mut nodes: Vec<TreeNode> = Vec::with_capacity(node_count);
        let mut slots: Vec<Option<usize>> = vec![None; node_count];
        let mut queue = VecDeque::new();

        nodes.push(TreeNode::new(NodeId::ROOT, None, 0));
        slots[0] = Some(0);
        queue.push_back(0_usize);

        while let Some(idx) = queue.pop_front() {
            let id = nodes[idx].id;
            let depth = nodes[idx].depth;
            let children = edges.children(id.raw());
            if children.is_empty() {
                continue;
            }

            let mut child_indices = Vec::with_capacity(children.len());
            for &child in children {
                let child_idx = nodes.len();
                nodes.push(TreeNode::new(NodeId(child), Some(idx), depth + 1));
                slots[child as usize] = Some(child_idx);
                child_indices.push(child_idx);
                queue.push_back(child_idx);
            }
            nodes[idx].children = child_indices;
        }

        let dropped = node_count - nodes.len();
        if dropped > 0 {
            warn!(
                dropped,
                node_count;
                "Ids unreachable from the root were left out of the tree"
            );
        }
        debug!("Built tree with {} of {} nodes", nodes.len(), node_count);

        Ok(Tree::from_parts(nodes, slots))
    }

    /// Validate ids and parent uniqueness.
    ///
    /// Returns the parent of the root, if the root is listed as a child.
    fn check_edges(
        edges: &EdgeMap,
        node_count: usize,
    ) -> Result<Option<NodeId>, MalformedTreeError> {
        let mut parent_of: Vec<Option<u32>> = vec![None; node_count];

        for (parent, children) in edges.iter() {
            if parent as usize >= node_count {
                return Err(MalformedTreeError::ParentOutOfRange {
                    parent: NodeId(parent),
                    node_count,
                });
            }
            for &child in children {
                if child as usize >= node_count {
                    return Err(MalformedTreeError::ChildOutOfRange {
                        parent: NodeId(parent),
                        child: NodeId(child),
                        node_count,
                    });
                }
                if child == parent {
                    return Err(MalformedTreeError::SelfLoop(NodeId(child)));
                }
                if let Some(first) = parent_of[child as usize] {
                    return Err(MalformedTreeError::DuplicateParent {
                        child: NodeId(child),
                        first: NodeId(first),
                        second: NodeId(parent),
                    });
                }
                parent_of[child as usize] = Some(parent);
            }
        }

        Ok(parent_of[0].map(NodeId))
    }

    /// Reject edge maps whose directed graph has a cycle.
    fn check_acyclic(edges: &EdgeMap, node_count: usize) -> Result<(), MalformedTreeError> {
        let mut graph: StableDiGraph<NodeId, ()> =
            StableDiGraph::with_capacity(node_count, edges.edge_count());
        for id in 0..node_count {
            graph.add_node(NodeId(id as u32));
        }
        for (parent, children) in edges.iter() {
            for &child in children {
                graph.add_edge(
                    NodeIndex::new(parent as usize),
                    NodeIndex::new(child as usize),
                    (),
                );
            }
        }

        toposort(&graph, None)
            .map(|_| ())
            .map_err(|cycle| MalformedTreeError::Cycle(graph[cycle.node_id()]))
    }
}
