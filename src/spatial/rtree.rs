//! R-tree over the drawn nodes of one layout, using the rstar crate.
//!
//! Answers the two questions a renderer asks of a drawing: which node
//! circle is under the pointer, and which circles overlap.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::layout::Position;
use crate::tree::{NodeId, Tree};

/// A node at its laid-out position.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlacedNode {
    id: NodeId,
    at: [f64; 2],
}

impl RTreeObject for PlacedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.at)
    }
}

impl PointDistance for PlacedNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.at[0] - point[0];
        let dy = self.at[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over the nodes of one layout, bulk loaded once per
/// position table.
pub struct SpatialIndex {
    rtree: RTree<PlacedNode>,
}

impl SpatialIndex {
    /// Index the nodes of `tree` at their positions.
    ///
    /// Ids outside the tree are skipped: their slots hold a placeholder, not
    /// a drawn node.
    pub fn from_positions(tree: &Tree, positions: &[Position]) -> Self {
        let placed: Vec<PlacedNode> = tree
            .nodes()
            .iter()
            .map(|node| {
                let p = positions[node.id.slot()];
                PlacedNode {
                    id: node.id,
                    at: [p.x, p.y],
                }
            })
            .collect();

        Self {
            rtree: RTree::bulk_load(placed),
        }
    }

    /// The node closest to `(x, y)`, if it lies within `radius`.
    pub fn nearest_within(&self, x: f64, y: f64, radius: f64) -> Option<NodeId> {
        let query = [x, y];
        self.rtree
            .nearest_neighbor(&query)
            .filter(|node| node.distance_2(&query) <= radius * radius)
            .map(|node| node.id)
    }

    /// Pairs of nodes whose circles of `node_radius` overlap.
    ///
    /// Circles that merely touch do not count. Each pair is reported once,
    /// smaller id first, and the list is sorted.
    pub fn overlapping_pairs(&self, node_radius: f64) -> Vec<(NodeId, NodeId)> {
        let reach = 2.0 * node_radius;
        let reach_sq = reach * reach;

        let mut pairs: Vec<(NodeId, NodeId)> = self
            .rtree
            .iter()
            .flat_map(|a| {
                self.rtree
                    .locate_within_distance(a.at, reach_sq)
                    .filter(move |b| a.id < b.id && b.distance_2(&a.at) < reach_sq)
                    .map(move |b| (a.id, b.id))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, Strategy, layout};
    use crate::tree::EdgeMap;

    /// Root with one leaf per remaining point.
    fn star(points: &[(f64, f64)]) -> (Tree, Vec<Position>) {
        let children: Vec<u32> = (1..points.len() as u32).collect();
        let tree = Tree::from_edge_map(&EdgeMap::from([(0, children)]), points.len()).unwrap();
        let positions = points.iter().map(|&(x, y)| Position::new(x, y)).collect();
        (tree, positions)
    }

    #[test]
    fn test_nearest_within() {
        let (tree, positions) = star(&[(0.0, 0.0), (10.0, 10.0), (5.0, 5.0)]);
        let index = SpatialIndex::from_positions(&tree, &positions);

        assert_eq!(index.nearest_within(0.5, 0.0, 1.0), Some(NodeId(0)));
        assert_eq!(index.nearest_within(6.0, 6.0, 2.0), Some(NodeId(2)));
        assert_eq!(index.nearest_within(11.0, 11.0, 2.0), Some(NodeId(1)));
    }

    #[test]
    fn test_nearest_within_radius_bound() {
        let (tree, positions) = star(&[(0.0, 0.0), (10.0, 10.0)]);
        let index = SpatialIndex::from_positions(&tree, &positions);

        // (3, 4) is 5 from node 0 and ~9.2 from node 1.
        assert_eq!(index.nearest_within(3.0, 4.0, 4.9), None);
        assert_eq!(index.nearest_within(3.0, 4.0, 5.0), Some(NodeId(0)));
        assert_eq!(index.nearest_within(3.0, 4.0, 20.0), Some(NodeId(0)));
    }

    #[test]
    fn test_overlapping_pairs() {
        let (tree, positions) = star(&[(0.0, 0.0), (15.0, 0.0), (20.0, 0.0), (100.0, 0.0)]);
        let index = SpatialIndex::from_positions(&tree, &positions);

        // Radius 10: 0-1 (15 apart) and 1-2 (5 apart) overlap; 0-2 touch.
        assert_eq!(
            index.overlapping_pairs(10.0),
            vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2))]
        );
        assert!(index.overlapping_pairs(2.0).is_empty());
    }

    #[test]
    fn test_unreachable_ids_not_indexed() {
        // Ids 2 and 3 stay at the origin, on top of nothing drawn.
        let tree = Tree::from_edge_map(&EdgeMap::from([(0, vec![1])]), 4).unwrap();
        let positions = layout(&tree, Strategy::Thin, &LayoutConfig::default()).unwrap();
        let index = SpatialIndex::from_positions(&tree, &positions);

        assert_eq!(index.nearest_within(0.0, 0.0, 10.0), None);
        assert!(index.overlapping_pairs(1.0).is_empty());
    }
}
