use super::PackageName;
use std::collections::HashMap;

/// DependencyGraph aggregate: package name → ordered direct dependencies.
///
/// A name absent from the map is unknown (never fetched or declared). A
/// name present with an empty list is a confirmed leaf. Dependency lists may
/// reference names that are not keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` with its dependencies, replacing any earlier entry
    pub fn insert(&mut self, name: PackageName, dependencies: Vec<PackageName>) {
        self.edges.insert(name, dependencies);
    }

    /// Records `name` as a leaf unless it already has an entry
    pub fn insert_leaf_if_absent(&mut self, name: PackageName) {
        self.edges.entry(name).or_default();
    }

    /// Direct dependencies of `name`, or `None` when the name is unknown
    pub fn dependencies_of(&self, name: &str) -> Option<&[PackageName]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn package_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
