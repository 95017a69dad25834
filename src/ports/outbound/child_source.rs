use crate::dependency_graph::domain::{DependencyGraph, PackageName};
use async_trait::async_trait;

/// Outcome of asking a [`ChildSource`] for a node's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildLookup {
    /// Dependencies in declaration order (empty for a confirmed leaf)
    Found(Vec<PackageName>),
    /// The source has never heard of this name
    Unknown,
    /// The lookup itself failed
    Unresolved,
}

/// ChildSource port - where the tree traversal gets a node's children from
///
/// Implemented by the materialized [`DependencyGraph`] (pure lookup) and by
/// the registry-backed lazy source in the network adapters. The traversal
/// awaits one lookup at a time.
#[async_trait]
pub trait ChildSource: Send + Sync {
    async fn children_of(&self, name: &PackageName) -> ChildLookup;
}

#[async_trait]
impl ChildSource for DependencyGraph {
    async fn children_of(&self, name: &PackageName) -> ChildLookup {
        match self.dependencies_of(name.as_str()) {
            Some(children) => ChildLookup::Found(children.to_vec()),
            None => ChildLookup::Unknown,
        }
    }
}
