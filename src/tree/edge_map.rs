//! Edge map input.
//!
//! An [`EdgeMap`] maps a parent id to its ordered child ids. Id 0 is
//! always the root and ids absent as keys are leaves. The map is read-only
//! input, consumed once by the [`TreeBuilder`](super::TreeBuilder).

use std::collections::BTreeMap;

use crate::error::MalformedTreeError;

/// Parent id → ordered child ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMap(BTreeMap<u32, Vec<u32>>);

impl EdgeMap {
    /// Create an empty edge map (a root-only tree).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat array of directed pairs `[p0, c0, p1, c1, ...]`.
    ///
    /// Children keep the order in which their pairs appear.
    pub fn from_pairs(pairs: &[u32]) -> Result<Self, MalformedTreeError> {
        if pairs.len() % 2 != 0 {
            return Err(MalformedTreeError::OddEdgeList(pairs.len()));
        }

        let mut map = Self::new();
        for pair in pairs.chunks_exact(2) {
            map.push_child(pair[0], pair[1]);
        }
        Ok(map)
    }

    /// Build from a map whose keys are decimal strings, as produced by
    /// deserializing a plain JS object.
    pub fn from_string_keys(
        entries: BTreeMap<String, Vec<u32>>,
    ) -> Result<Self, MalformedTreeError> {
        let mut map = Self::new();
        for (key, children) in entries {
            let parent = key
                .trim()
                .parse::<u32>()
                .map_err(|_| MalformedTreeError::InvalidKey(key.clone()))?;
            map.0.entry(parent).or_default().extend(children);
        }
        Ok(map)
    }

    /// Append `child` to the children of `parent`.
    pub fn push_child(&mut self, parent: u32, child: u32) {
        self.0.entry(parent).or_default().push(child);
    }

    /// Children of `parent` in drawing order (empty for a leaf).
    pub fn children(&self, parent: u32) -> &[u32] {
        self.0.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(parent, children)` entries in ascending parent order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.0.iter().map(|(&parent, children)| (parent, children.as_slice()))
    }

    /// Flatten into `[p0, c0, p1, c1, ...]` pairs.
    pub fn to_pairs(&self) -> Vec<u32> {
        self.iter()
            .flat_map(|(parent, children)| children.iter().flat_map(move |&c| [parent, c]))
            .collect()
    }

    /// Total number of parent → child edges.
    pub fn edge_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<(u32, Vec<u32>)> for EdgeMap {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<u32>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(u32, Vec<u32>); N]> for EdgeMap {
    fn from(entries: [(u32, Vec<u32>); N]) -> Self {
        entries.into_iter().collect()
    }
}
