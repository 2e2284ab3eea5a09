//! Names hidden from the tree and refused as a first path segment.

use std::collections::BTreeSet;

/// Segment names that are hidden from listings and direct access.
///
/// Matching is exact and case-sensitive. The set is built once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|n: &String| !n.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
