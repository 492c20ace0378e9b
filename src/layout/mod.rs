//! Tree layout strategies.
//!
//! Every strategy is a pure function of a [`Tree`] and a [`LayoutConfig`]
//! that returns a dense [`PositionTable`] indexed by node id. Strategies
//! keep their per-node working state in a [`Scratch`] buffer allocated for
//! the call, never on the tree.
//!
//! | Strategy | Cost | Centered | Overlap-free |
//! |----------|------|----------|--------------|
//! | [`Thin`](Strategy::Thin) | O(n) | no | no |
//! | [`Knuth`](Strategy::Knuth) | O(n) | no | binary trees only |
//! | [`ParentCentered`](Strategy::ParentCentered) | O(n) | over extreme children | no |
//! | [`Wide`](Strategy::Wide) | O(n²) | yes | yes |
//! | [`Buchheim`](Strategy::Buchheim) | O(n·h) | yes | yes |
//! | [`RadialDepth`](Strategy::RadialDepth) | O(n) | angular | angular |
//! | [`RadialHeight`](Strategy::RadialHeight) | O(n) | angular | angular |

pub mod buchheim;
pub mod centered;
pub mod knuth;
pub mod radial;
pub mod runner;
pub mod thin;
pub mod wide;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::error::LayoutError;
use crate::tree::Tree;

pub use runner::{BoundingBox, LayoutReport, LayoutRunner};

/// A Cartesian coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The default for slots a strategy never writes.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert polar coordinates to Cartesian.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}

/// One position per node id, `tree.node_count()` entries long.
pub type PositionTable = Vec<Position>;

/// Configuration shared by all strategies.
///
/// Deserializes from partial objects: missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Size of one layout unit in output coordinates (level spacing and
    /// slot width).
    pub scale: f64,
    /// Minimum gap, in layout units, between adjacent sibling subtrees.
    pub node_separation: f64,
    /// Radius of the circle a renderer draws per node. Used to count
    /// collisions in layout reports and for hit testing.
    pub node_radius: f64,
    /// Fail the in-order strategy on nodes with more than two children
    /// instead of leaving their extra children at the origin.
    pub strict_binary: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 30.0,
            node_separation: 1.0,
            node_radius: 10.0,
            strict_binary: false,
        }
    }
}

/// The closed set of layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Level-order slots, no centering.
    Thin,
    /// In-order walk of binary trees.
    Knuth,
    /// Thin with double spacing, parents centered over their extreme children.
    ParentCentered,
    /// Subtree extents, O(n²) contour separation.
    Wide,
    /// Per-depth contour arrays.
    Buchheim,
    /// Radial, radius by depth from the root (Eades R1).
    RadialDepth,
    /// Radial, radius by height above the leaves (Eades R2).
    RadialHeight,
}

impl Strategy {
    /// Every strategy, in registry order.
    pub const ALL: [Strategy; 7] = [
        Strategy::Thin,
        Strategy::Knuth,
        Strategy::ParentCentered,
        Strategy::Wide,
        Strategy::Buchheim,
        Strategy::RadialDepth,
        Strategy::RadialHeight,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Thin => "thin",
            Strategy::Knuth => "knuth",
            Strategy::ParentCentered => "parent-centered",
            Strategy::Wide => "wide",
            Strategy::Buchheim => "buchheim",
            Strategy::RadialDepth => "radial-depth",
            Strategy::RadialHeight => "radial-height",
        }
    }

    /// True for the top-down strategies, where y depends on depth alone.
    pub fn is_cartesian(self) -> bool {
        !matches!(self, Strategy::RadialDepth | Strategy::RadialHeight)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "r1" => return Ok(Strategy::RadialDepth),
            "r2" => return Ok(Strategy::RadialHeight),
            _ => {}
        }
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| LayoutError::UnknownStrategy(s.to_string()))
    }
}

/// Lay out `tree` with `strategy`.
///
/// Fails only for shapes a strategy is configured to reject (see
/// [`LayoutConfig::strict_binary`]).
pub fn layout(
    tree: &Tree,
    strategy: Strategy,
    config: &LayoutConfig,
) -> Result<PositionTable, LayoutError> {
    debug!(strategy = strategy.name(), nodes = tree.len(); "Computing tree layout");

    let positions = match strategy {
        Strategy::Thin => thin::thin_layout(tree, config),
        Strategy::Knuth => knuth::knuth_layout(tree, config)?,
        Strategy::ParentCentered => centered::parent_centered_layout(tree, config),
        Strategy::Wide => wide::wide_layout(tree, config),
        Strategy::Buchheim => buchheim::buchheim_layout(tree, config),
        Strategy::RadialDepth => radial::radial_depth_layout(tree, config),
        Strategy::RadialHeight => radial::radial_height_layout(tree, config),
    };
    Ok(positions)
}

/// Per-node working state for one layout call, indexed by arena index.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Scratch {
    /// Horizontal shift relative to the parent, in layout units.
    pub modifier: f64,
    /// Leftmost extent of the subtree relative to the node.
    pub leftmost: f64,
    /// Rightmost extent of the subtree relative to the node.
    pub rightmost: f64,
    /// Number of leaves under the node (1 for a leaf).
    pub width: u32,
    /// Longest path down to a leaf (0 for a leaf).
    pub height: u32,
}

impl Scratch {
    /// Zeroed scratch for every node of `tree`.
    pub fn for_tree(tree: &Tree) -> Vec<Scratch> {
        vec![Scratch::default(); tree.len()]
    }
}

/// Second pass of the modifier-based strategies.
///
/// Sums modifiers from the root down. The root starts at `root_offset`;
/// x is `scale * running_sum` and y is `scale * (depth + 1)`.
pub(crate) fn apply_modifiers(
    tree: &Tree,
    scratch: &[Scratch],
    scale: f64,
    root_offset: f64,
) -> PositionTable {
    let mut positions = vec![Position::ORIGIN; tree.node_count()];
    let mut running = vec![0.0_f64; tree.len()];

    // Arena order visits parents first.
    for (idx, node) in tree.nodes().iter().enumerate() {
        running[idx] = match node.parent {
            Some(parent) => running[parent] + scratch[idx].modifier,
            None => root_offset,
        };
        positions[node.id.slot()] = Position::new(
            scale * running[idx],
            scale * (node.depth as f64 + 1.0),
        );
    }
    positions
}

/// Smallest x and y over the nodes that belong to `tree`.
pub(crate) fn min_corner(tree: &Tree, positions: &[Position]) -> Position {
    tree.nodes().iter().fold(
        Position::new(f64::INFINITY, f64::INFINITY),
        |acc, node| {
            let p = positions[node.id.slot()];
            Position::new(acc.x.min(p.x), acc.y.min(p.y))
        },
    )
}

/// Shift every node of `tree` by `(dx, dy)`. Slots of ids outside the tree
/// keep their default.
pub(crate) fn translate(tree: &Tree, positions: &mut [Position], dx: f64, dy: f64) {
    for node in tree.nodes() {
        let p = &mut positions[node.id.slot()];
        p.x += dx;
        p.y += dy;
    }
}
