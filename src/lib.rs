//! Arboretum - tree layout strategies
//!
//! Turns a rooted tree, given as a parent → children edge map, into a
//! table of 2-D node positions. Several classic strategies are provided,
//! from naive level-order packing to contour-based tidy drawings and
//! radial wedge layouts. The crate compiles to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `tree`: Edge map validation and the breadth-first node arena
//! - `layout`: The layout strategies and the runner that measures them
//! - `spatial`: R-tree spatial indexing for hit testing and overlap checks
//! - `error`: Builder and layout errors

use std::collections::BTreeMap;

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod layout;
pub mod spatial;
pub mod tree;

pub use error::{LayoutError, MalformedTreeError};
pub use layout::{
    BoundingBox, LayoutConfig, LayoutReport, LayoutRunner, Position, PositionTable, Strategy,
    layout,
};
pub use spatial::SpatialIndex;
pub use tree::{EdgeMap, NodeId, Tree, TreeBuilder};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A validated tree plus the configuration its layouts use.
///
/// The tree is fixed at construction; every layout call recomputes
/// positions from scratch.
#[wasm_bindgen]
pub struct TreeLayoutWasm {
    tree: Tree,
    config: LayoutConfig,
}

#[wasm_bindgen]
impl TreeLayoutWasm {
    /// Build a tree from a Uint32Array of `[parent, child]` pairs.
    ///
    /// Throws if the edges do not form a single tree rooted at node 0.
    #[wasm_bindgen(js_name = fromEdgePairs)]
    pub fn from_edge_pairs(node_count: usize, pairs: &[u32]) -> Result<TreeLayoutWasm, JsError> {
        let tree = Tree::from_pairs(pairs, node_count).map_err(to_js_error)?;
        Ok(Self::with_tree(tree))
    }

    /// Build a tree from an object mapping parent ids to child id arrays,
    /// e.g. `{ "0": [1, 2], "1": [3] }`.
    #[wasm_bindgen(js_name = fromEdgeMap)]
    pub fn from_edge_map(node_count: usize, edges: JsValue) -> Result<TreeLayoutWasm, JsError> {
        let keyed: BTreeMap<String, Vec<u32>> =
            serde_wasm_bindgen::from_value(edges).map_err(to_js_error)?;
        let edges = EdgeMap::from_string_keys(keyed).map_err(to_js_error)?;
        let tree = Tree::from_edge_map(&edges, node_count).map_err(to_js_error)?;
        Ok(Self::with_tree(tree))
    }

    /// Replace the layout configuration.
    ///
    /// Accepts a partial object with camelCase fields (`scale`,
    /// `nodeSeparation`, `nodeRadius`, `strictBinary`); missing fields take
    /// their defaults.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        self.config = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        Ok(())
    }

    /// Number of position slots (the node count passed at construction).
    #[wasm_bindgen(getter, js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Names accepted by the layout methods.
    pub fn strategies() -> Vec<String> {
        Strategy::ALL.iter().map(|s| s.name().to_string()).collect()
    }

    /// Lay out the tree.
    ///
    /// Returns a Float64Array `[x0, y0, x1, y1, ...]` with one pair per
    /// node id. Ids not reachable from the root sit at (0, 0).
    pub fn layout(&self, strategy: &str) -> Result<Float64Array, JsError> {
        let interleaved = self.interleaved(strategy).map_err(to_js_error)?;
        Ok(Float64Array::from(&interleaved[..]))
    }

    /// Bounding box of a layout as `[min_x, min_y, max_x, max_y]`.
    pub fn bounds(&self, strategy: &str) -> Result<Vec<f64>, JsError> {
        let report = self.report(strategy).map_err(to_js_error)?;
        Ok(report.bounds.to_array().to_vec())
    }

    /// Number of overlapping node circles in a layout.
    pub fn collisions(&self, strategy: &str) -> Result<usize, JsError> {
        Ok(self.report(strategy).map_err(to_js_error)?.collisions)
    }

    /// Edges as `[parent0, child0, parent1, child1, ...]` in breadth-first
    /// order, for drawing line segments.
    #[wasm_bindgen(js_name = edgePairs)]
    pub fn edge_pairs(&self) -> Vec<u32> {
        self.tree
            .edges()
            .flat_map(|(parent, child)| [parent.raw(), child.raw()])
            .collect()
    }

    /// The node whose circle contains `(x, y)` in a layout, if any.
    #[wasm_bindgen(js_name = nodeAt)]
    pub fn node_at(&self, strategy: &str, x: f64, y: f64) -> Result<Option<u32>, JsError> {
        self.hit_test(strategy, x, y).map_err(to_js_error)
    }
}

impl TreeLayoutWasm {
    /// Wrap an already built tree with the default configuration.
    pub fn with_tree(tree: Tree) -> Self {
        Self {
            tree,
            config: LayoutConfig::default(),
        }
    }

    fn report(&self, strategy: &str) -> Result<LayoutReport, LayoutError> {
        LayoutRunner::new(&self.tree, self.config.clone()).run(strategy.parse()?)
    }

    fn interleaved(&self, strategy: &str) -> Result<Vec<f64>, LayoutError> {
        let positions = layout(&self.tree, strategy.parse()?, &self.config)?;
        Ok(positions.iter().flat_map(|p| [p.x, p.y]).collect())
    }

    fn hit_test(&self, strategy: &str, x: f64, y: f64) -> Result<Option<u32>, LayoutError> {
        let positions = layout(&self.tree, strategy.parse()?, &self.config)?;
        let index = SpatialIndex::from_positions(&self.tree, &positions);
        Ok(index
            .nearest_within(x, y, self.config.node_radius)
            .map(NodeId::raw))
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}
