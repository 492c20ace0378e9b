//! Runs strategies over one tree and summarizes each drawing.

use log::debug;

use super::{LayoutConfig, Position, PositionTable, Strategy, layout};
use crate::error::LayoutError;
use crate::spatial::SpatialIndex;
use crate::tree::Tree;

/// Axis-aligned box around the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of the nodes of `tree`. Slots of ids outside the tree are
    /// ignored.
    pub fn from_positions(tree: &Tree, positions: &[Position]) -> Self {
        let init = Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        // A tree always holds its root, so the fold sees at least one node.
        tree.nodes().iter().fold(init, |acc, node| {
            let p = positions[node.id.slot()];
            Self {
                min_x: acc.min_x.min(p.x),
                min_y: acc.min_y.min(p.y),
                max_x: acc.max_x.max(p.x),
                max_y: acc.max_y.max(p.y),
            }
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Components as `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// One strategy's drawing of a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub strategy: Strategy,
    pub positions: PositionTable,
    pub bounds: BoundingBox,
    /// Pairs of node circles of `node_radius` that overlap.
    pub collisions: usize,
}

/// Lays out a single tree with any number of strategies.
#[derive(Debug, Clone)]
pub struct LayoutRunner<'a> {
    tree: &'a Tree,
    config: LayoutConfig,
}

impl<'a> LayoutRunner<'a> {
    pub fn new(tree: &'a Tree, config: LayoutConfig) -> Self {
        Self { tree, config }
    }

    /// Lay out the tree with `strategy` and measure the result.
    pub fn run(&self, strategy: Strategy) -> Result<LayoutReport, LayoutError> {
        let positions = layout(self.tree, strategy, &self.config)?;
        let bounds = BoundingBox::from_positions(self.tree, &positions);
        let collisions = SpatialIndex::from_positions(self.tree, &positions)
            .overlapping_pairs(self.config.node_radius)
            .len();

        debug!(
            strategy = strategy.name(),
            width = bounds.width(),
            height = bounds.height(),
            collisions;
            "Layout finished"
        );

        Ok(LayoutReport {
            strategy,
            positions,
            bounds,
            collisions,
        })
    }

    /// Run each strategy in turn. Stops at the first failure.
    pub fn run_all(&self, strategies: &[Strategy]) -> Result<Vec<LayoutReport>, LayoutError> {
        strategies.iter().map(|&strategy| self.run(strategy)).collect()
    }
}
