//! Spatial indexing over laid-out trees.
//!
//! This module provides an R-tree based index for hit testing a layout and
//! for finding node circles that overlap.

mod rtree;

pub use rtree::SpatialIndex;
