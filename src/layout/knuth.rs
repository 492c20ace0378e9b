//! In-order placement for binary trees.
//!
//! The first child is read as the left child and the second as the right
//! child. An in-order walk hands out x slots from a single counter, so every
//! node sits strictly right of its whole left subtree and strictly left of
//! its whole right subtree.
//!
//! There is no generalization to wider nodes. Children past the second are
//! never visited and keep the `(0, 0)` pre-fill, unless
//! [`LayoutConfig::strict_binary`] asks for an error instead.

use log::warn;

use super::{LayoutConfig, Position, PositionTable};
use crate::error::LayoutError;
use crate::tree::Tree;

/// In-order layout.
pub fn knuth_layout(tree: &Tree, config: &LayoutConfig) -> Result<PositionTable, LayoutError> {
    let wide_nodes = tree.nodes().iter().filter(|n| n.children.len() > 2);
    if config.strict_binary {
        if let Some(node) = wide_nodes.clone().next() {
            return Err(LayoutError::UnsupportedShape {
                node: node.id,
                children: node.children.len(),
            });
        }
    } else {
        let truncated = wide_nodes.count();
        if truncated > 0 {
            warn!(truncated; "In-order layout ignores children past the second");
        }
    }

    Ok(in_order(tree, config.scale))
}

/// Walk left subtree, node, right subtree with an explicit stack, handing
/// out one x slot per visited node.
fn in_order(tree: &Tree, scale: f64) -> PositionTable {
    let mut positions = vec![Position::ORIGIN; tree.node_count()];
    let mut counter = 0_u32;
    // `true` once the node's left subtree has been placed.
    let mut stack = vec![(Tree::ROOT, false)];

    while let Some((idx, left_done)) = stack.pop() {
        let node = tree.node(idx);
        if !left_done {
            stack.push((idx, true));
            if let Some(&left) = node.children.first() {
                stack.push((left, false));
            }
            continue;
        }

        positions[node.id.slot()] = Position::new(
            scale * (counter as f64 + 1.0),
            scale * (node.depth as f64 + 1.0),
        );
        counter += 1;
        if let Some(&right) = node.children.get(1) {
            stack.push((right, false));
        }
    }
    positions
}
