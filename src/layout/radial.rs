//! Radial layouts with angular wedge allocation (Eades).
//!
//! Each node owns a wedge `[low, high]` of the circle and sits at the
//! wedge's mid-angle. Its wedge is split among its children in proportion
//! to their leaf counts. The two variants differ only in the radius:
//!
//! - **R1** ([`radial_depth_layout`]): ring = depth from the root.
//! - **R2** ([`radial_height_layout`]): ring = root height minus node
//!   height, so every leaf lands on the outermost ring.
//!
//! A node on ring `k > 0` never hands its children more than
//! `2 * acos(k / (k + 1))` radians: wider than that, the chord to the next
//! ring would cut through ring `k` and edges from neighbouring wedges could
//! cross. The capped wedge is re-centered on the node's own angle. The root
//! (ring 0) always distributes the full circle.

use std::f64::consts::TAU;

use super::{LayoutConfig, Position, PositionTable, Scratch, min_corner, translate};
use crate::tree::Tree;

/// How a node's ring is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ring {
    Depth,
    Height,
}

/// Eades R1: radius proportional to depth.
pub fn radial_depth_layout(tree: &Tree, config: &LayoutConfig) -> PositionTable {
    normalized(tree, polar_layout(tree, config.scale, Ring::Depth))
}

/// Eades R2: radius proportional to distance above the deepest leaf level.
pub fn radial_height_layout(tree: &Tree, config: &LayoutConfig) -> PositionTable {
    normalized(tree, polar_layout(tree, config.scale, Ring::Height))
}

/// Leaf counts and heights, computed bottom-up.
pub(crate) fn subtree_metrics(tree: &Tree) -> Vec<Scratch> {
    let mut scratch = Scratch::for_tree(tree);
    for idx in (0..tree.len()).rev() {
        let children = tree.children(idx);
        if children.is_empty() {
            scratch[idx].width = 1;
            scratch[idx].height = 0;
            continue;
        }
        scratch[idx].width = children.iter().map(|&c| scratch[c].width).sum();
        scratch[idx].height = 1 + children.iter().map(|&c| scratch[c].height).max().unwrap_or(0);
    }
    scratch
}

/// Largest angle a node on `ring` may pass down to its children.
fn wedge_cap(ring: u32) -> Option<f64> {
    if ring == 0 {
        return None;
    }
    let ring = ring as f64;
    Some(2.0 * (ring / (ring + 1.0)).acos())
}

/// Positions before translation; the root sits at the origin.
fn polar_layout(tree: &Tree, scale: f64, mode: Ring) -> PositionTable {
    let metrics = subtree_metrics(tree);
    let root_height = metrics[Tree::ROOT].height;
    let ring_of = |idx: usize| match mode {
        Ring::Depth => tree.node(idx).depth,
        Ring::Height => root_height - metrics[idx].height,
    };

    let mut positions = vec![Position::ORIGIN; tree.node_count()];
    let mut wedges = vec![(0.0_f64, TAU); tree.len()];

    // Arena order assigns every wedge before its node is visited.
    for (idx, node) in tree.nodes().iter().enumerate() {
        let (mut low, mut high) = wedges[idx];
        let angle = (low + high) / 2.0;
        let ring = ring_of(idx);
        positions[node.id.slot()] = Position::from_polar(scale * ring as f64, angle);

        if node.is_leaf() {
            continue;
        }
        if let Some(cap) = wedge_cap(ring) {
            if high - low > cap {
                low = angle - cap / 2.0;
                high = angle + cap / 2.0;
            }
        }

        let total = metrics[idx].width as f64;
        let mut cursor = low;
        for &child in &node.children {
            let share = (high - low) * metrics[child].width as f64 / total;
            wedges[child] = (cursor, cursor + share);
            cursor += share;
        }
    }
    positions
}

/// Translate so the smallest x and y are both zero.
fn normalized(tree: &Tree, mut positions: PositionTable) -> PositionTable {
    let min = min_corner(tree, &positions);
    translate(tree, &mut positions, -min.x, -min.y);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::*;

    fn distance(a: Position, b: Position) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn test_metrics() {
        let tree = lopsided();
        let metrics = subtree_metrics(&tree);
        let root = &metrics[Tree::ROOT];
        assert_eq!(root.width, 7); // 7, 8, 9, 5, 2, 10, 11
        assert_eq!(root.height, 3);
        let node2 = tree.index_of(crate::tree::NodeId(2)).unwrap();
        assert_eq!(metrics[node2].width, 1);
        assert_eq!(metrics[node2].height, 0);
    }

    #[test]
    fn test_root_at_origin_before_translation() {
        let tree = cherry();
        for mode in [Ring::Depth, Ring::Height] {
            let polar = polar_layout(&tree, 30.0, mode);
            assert_eq!(polar[0], Position::ORIGIN);
            assert!(approx(distance(polar[1], polar[0]), 30.0));
            assert!(approx(distance(polar[2], polar[0]), 30.0));
        }
    }

    #[test]
    fn test_translated_to_non_negative() {
        let tree = lopsided();
        let config = LayoutConfig::default();
        for positions in [
            radial_depth_layout(&tree, &config),
            radial_height_layout(&tree, &config),
        ] {
            let min = min_corner(&tree, &positions);
            assert!(approx(min.x, 0.0));
            assert!(approx(min.y, 0.0));
        }
    }

    #[test]
    fn test_depth_rings() {
        let tree = lopsided();
        let polar = polar_layout(&tree, 10.0, Ring::Depth);
        for node in tree.nodes() {
            let r = distance(polar[node.id.slot()], Position::ORIGIN);
            assert!(approx(r, 10.0 * node.depth as f64), "{} at radius {r}", node.id);
        }
    }

    #[test]
    fn test_height_rings_put_leaves_outside() {
        let tree = lopsided();
        let polar = polar_layout(&tree, 10.0, Ring::Height);
        for node in tree.nodes().iter().filter(|n| n.is_leaf()) {
            let r = distance(polar[node.id.slot()], Position::ORIGIN);
            assert!(approx(r, 30.0), "leaf {} at radius {r}", node.id);
        }
        // 3 is two levels above its leaves, so it sits on ring 1.
        let r = distance(polar[3], Position::ORIGIN);
        assert!(approx(r, 10.0));
    }

    #[test]
    fn test_children_share_parent_wedge_by_width() {
        let tree = tree(&[(0, &[1, 2]), (1, &[3, 4, 5])], 6);
        let polar = polar_layout(&tree, 10.0, Ring::Depth);
        // 1 holds 3 of 4 leaves: wedge [0, 1.5π], mid-angle 0.75π.
        let angle1 = polar[1].y.atan2(polar[1].x);
        assert!(approx(angle1, 0.75 * std::f64::consts::PI));
        // 2 holds [1.5π, 2π], mid-angle 1.75π.
        let angle2 = polar[2].y.atan2(polar[2].x).rem_euclid(TAU);
        assert!(approx(angle2, 1.75 * std::f64::consts::PI));
    }

    #[test]
    fn test_wedge_capped_below_root() {
        let tree = tree(&[(0, &[1]), (1, &[2, 3, 4])], 5);
        let polar = polar_layout(&tree, 10.0, Ring::Depth);
        let cap = wedge_cap(1).unwrap();
        assert!(approx(cap, 2.0 * 0.5_f64.acos()));

        let angles: Vec<f64> = [2, 3, 4]
            .iter()
            .map(|&id| polar[id].y.atan2(polar[id].x).rem_euclid(TAU))
            .collect();
        let spread = angles[2] - angles[0];
        // Three equal slices of the capped wedge; outer mid-angles are two
        // slices apart.
        assert!(approx(spread, cap * 2.0 / 3.0));
        // Still centered on the parent's angle.
        let parent_angle = polar[1].y.atan2(polar[1].x).rem_euclid(TAU);
        assert!(approx(angles[1], parent_angle));
    }

    #[test]
    fn test_no_cap_at_root() {
        assert_eq!(wedge_cap(0), None);
        let tree = tree(&[], 1);
        let positions = radial_depth_layout(&tree, &LayoutConfig::default());
        assert_eq!(positions, vec![Position::ORIGIN]);
    }
}
