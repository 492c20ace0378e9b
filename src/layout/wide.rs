//! Extent-based centered layout.
//!
//! # Algorithm
//!
//! 1. **Extents (bottom-up):** every node records how far its subtree
//!    reaches left and right of itself. Children are placed left to right,
//!    each one just far enough right that its leftmost extent clears the
//!    previous child's rightmost extent by the separation. The children are
//!    then shifted left by half their span so the parent sits centered.
//! 2. **Offsets (top-down):** modifiers are summed from the root to every
//!    node to get final x coordinates.
//!
//! Extents bound whole subtrees, so sibling subtrees never share any
//! horizontal range. That is stricter than per-depth contours and wastes
//! space on ragged trees.

use super::{LayoutConfig, PositionTable, Scratch, apply_modifiers};
use crate::tree::Tree;

/// Extent-based layout.
pub fn wide_layout(tree: &Tree, config: &LayoutConfig) -> PositionTable {
    let scratch = subtree_extents(tree, config.node_separation);
    let root_offset = 1.0 - scratch[Tree::ROOT].leftmost;
    apply_modifiers(tree, &scratch, config.scale, root_offset)
}

/// First pass: modifiers and extents in layout units.
pub(crate) fn subtree_extents(tree: &Tree, separation: f64) -> Vec<Scratch> {
    let mut scratch = Scratch::for_tree(tree);

    // Reverse arena order finishes every child before its parent.
    for idx in (0..tree.len()).rev() {
        let children = tree.children(idx);
        let (Some(&first), Some(&last)) = (children.first(), children.last()) else {
            continue;
        };

        let mut span = 0.0;
        for pair in children.windows(2) {
            let (prev, child) = (pair[0], pair[1]);
            span += scratch[prev].rightmost - scratch[child].leftmost + separation;
            scratch[child].modifier = span;
        }
        for &child in children {
            scratch[child].modifier -= span / 2.0;
        }

        scratch[idx].leftmost = scratch[first].modifier + scratch[first].leftmost;
        scratch[idx].rightmost = scratch[last].modifier + scratch[last].rightmost;
    }
    scratch
}
