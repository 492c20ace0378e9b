//! Level-order ("thin") placement.
//!
//! Each depth keeps its own slot counter. Nodes take the next free slot on
//! their level in breadth-first order, so a level is packed left to right
//! with no regard for where the parent sits. Parents are not centered and a
//! wide subtree can reach under a narrow sibling's subtree.

use super::{LayoutConfig, Position, PositionTable};
use crate::tree::Tree;

/// Thin layout with unit slot spacing.
pub fn thin_layout(tree: &Tree, config: &LayoutConfig) -> PositionTable {
    level_order(tree, config.scale, 1.0)
}

/// Place nodes at successive slots per level.
///
/// Slot `k` on depth `d` lands at `x = scale * (separation * k + 1)`,
/// `y = scale * (d + 1)`.
pub(crate) fn level_order(tree: &Tree, scale: f64, separation: f64) -> PositionTable {
    let mut positions = vec![Position::ORIGIN; tree.node_count()];
    let mut nexts = vec![0_u32; tree.max_depth() as usize + 1];

    // The arena is stored breadth-first, so walking it is the level-order visit.
    for node in tree.nodes() {
        let depth = node.depth as usize;
        positions[node.id.slot()] = Position::new(
            scale * (separation * nexts[depth] as f64 + 1.0),
            scale * (depth as f64 + 1.0),
        );
        nexts[depth] += 1;
    }
    positions
}
