//! Contour-based centered layout.
//!
//! Produces the same kind of drawing as [`wide`](super::wide) but separates
//! sibling subtrees level by level instead of by whole-subtree extents, so
//! ragged subtrees tuck under each other.
//!
//! # Algorithm Overview
//!
//! 1. **First walk (bottom-up):** for each node, place its first child at
//!    modifier 0 and keep a merged right contour of everything placed so
//!    far. Each later child is pushed right by the smallest amount that
//!    keeps its left contour clear of the merged right contour at every
//!    shared depth, then its own right contour is merged in. Finally the
//!    children shift left by half their span to center the parent.
//! 2. **Second walk (top-down):** apply accumulated modifiers, then
//!    translate so the leftmost node sits one unit in from the margin.

use super::{LayoutConfig, PositionTable, Scratch, apply_modifiers, min_corner, translate};
use crate::tree::Tree;

/// Selects which side of a subtree a contour follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Left contour: smallest offset per depth.
    Min,
    /// Right contour: largest offset per depth.
    Max,
}

impl Comparator {
    #[inline]
    fn pick(self, a: f64, b: f64) -> f64 {
        match self {
            Comparator::Min => a.min(b),
            Comparator::Max => a.max(b),
        }
    }
}

/// Contour-based layout.
pub fn buchheim_layout(tree: &Tree, config: &LayoutConfig) -> PositionTable {
    let scratch = first_walk(tree, config.node_separation);

    let root_offset = 1.0 - scratch[Tree::ROOT].leftmost;
    let mut positions = apply_modifiers(tree, &scratch, config.scale, root_offset);

    let min_x = min_corner(tree, &positions).x;
    translate(tree, &mut positions, -min_x + config.scale, 0.0);
    positions
}

/// One value per depth of the subtree under `root`: the smallest (or
/// largest) accumulated modifier at that depth, relative to `root`.
pub(crate) fn contour(tree: &Tree, scratch: &[Scratch], root: usize, side: Comparator) -> Vec<f64> {
    let mut contour: Vec<f64> = Vec::new();
    let mut stack = vec![(root, 0_usize, 0.0_f64)];

    while let Some((idx, level, offset)) = stack.pop() {
        // An ancestor has always filled the level above, so `level` is at
        // most `contour.len()` here.
        match contour.get_mut(level) {
            Some(extreme) => *extreme = side.pick(*extreme, offset),
            None => contour.push(offset),
        }
        for &child in tree.children(idx) {
            stack.push((child, level + 1, offset + scratch[child].modifier));
        }
    }
    contour
}

/// Distance the subtree with `left_contour` must move right to clear
/// `right_contour` by `separation` at every shared depth.
pub(crate) fn push(left_contour: &[f64], right_contour: &[f64], separation: f64) -> f64 {
    left_contour
        .iter()
        .zip(right_contour)
        .fold(0.0_f64, |gap, (left, right)| gap.max(right - left))
        + separation
}

fn first_walk(tree: &Tree, separation: f64) -> Vec<Scratch> {
    let mut scratch = Scratch::for_tree(tree);

    // Reverse arena order finishes every subtree before its root.
    for idx in (0..tree.len()).rev() {
        let children = tree.children(idx);
        let Some((&first, rest)) = children.split_first() else {
            continue;
        };

        let mut merged = contour(tree, &scratch, first, Comparator::Max);
        for &child in rest {
            let left = contour(tree, &scratch, child, Comparator::Min);
            let offset = push(&left, &merged, separation);
            scratch[child].modifier = offset;

            let right = contour(tree, &scratch, child, Comparator::Max);
            for (level, x) in right.into_iter().enumerate() {
                let x = x + offset;
                match merged.get_mut(level) {
                    Some(extreme) => *extreme = extreme.max(x),
                    None => merged.push(x),
                }
            }
        }

        let span = rest.last().map_or(0.0, |&last| scratch[last].modifier);
        let mut leftmost = 0.0_f64;
        for &child in children {
            scratch[child].modifier -= span / 2.0;
            leftmost = leftmost.min(scratch[child].modifier + scratch[child].leftmost);
        }
        scratch[idx].leftmost = leftmost;
    }
    scratch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::*;
    use crate::layout::wide::wide_layout;

    #[test]
    fn test_root_midpoint_of_children() {
        let tree = cherry();
        let positions = buchheim_layout(&tree, &LayoutConfig::default());
        assert!(approx(positions[0].x, (positions[1].x + positions[2].x) / 2.0));
        assert!(approx(positions[1].x, 30.0));
        assert!(approx(positions[2].x, 60.0));
    }

    #[test]
    fn test_push() {
        assert_eq!(push(&[0.0, -1.0], &[0.0, 1.0, 5.0], 1.0), 3.0);
        // Never pulls a subtree left.
        assert_eq!(push(&[0.0], &[-4.0], 1.0), 1.0);
    }

    #[test]
    fn test_contour_per_depth() {
        let tree = lopsided();
        let scratch = first_walk(&tree, 1.0);
        let left = contour(&tree, &scratch, Tree::ROOT, Comparator::Min);
        let right = contour(&tree, &scratch, Tree::ROOT, Comparator::Max);
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert_eq!(left[0], 0.0);
        for (l, r) in left.iter().zip(&right) {
            assert!(l <= r);
        }
    }

    #[test]
    fn test_siblings_clear_per_depth() {
        let tree = lopsided();
        let separation = 1.0;
        let scratch = first_walk(&tree, separation);

        for idx in 0..tree.len() {
            for pair in tree.children(idx).windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let right = contour(&tree, &scratch, a, Comparator::Max);
                let left = contour(&tree, &scratch, b, Comparator::Min);
                let gap = scratch[b].modifier - scratch[a].modifier;
                for (r, l) in right.iter().zip(&left) {
                    assert!(r + separation <= gap + l + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_more_compact_than_extents() {
        // The deep left subtree of 1 can tuck under 2, which sits between 1
        // and 3 at depth 1 only.
        let tree = tree(&[(0, &[1, 2]), (1, &[3, 4]), (3, &[5, 6, 7, 8])], 9);
        let config = LayoutConfig::default();
        let contour_width = width(&buchheim_layout(&tree, &config));
        let extent_width = width(&wide_layout(&tree, &config));
        assert!(contour_width <= extent_width + 1e-9);
    }

    #[test]
    fn test_min_x_one_unit_in() {
        let tree = lopsided();
        let positions = buchheim_layout(&tree, &LayoutConfig::default());
        let min_x = positions.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert!(approx(min_x, 30.0));
    }

    fn width(positions: &[crate::layout::Position]) -> f64 {
        let (lo, hi) = positions.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
        hi - lo
    }
}
