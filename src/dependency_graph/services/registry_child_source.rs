use crate::dependency_graph::domain::PackageName;
use crate::ports::outbound::{ChildLookup, ChildSource, MetadataProvider};
use async_trait::async_trait;

/// RegistryChildSource expands nodes on demand from a MetadataProvider
///
/// Backs the lazy tree traversal: nothing is materialized up front, each
/// node's children are fetched the first time the traversal asks for them.
/// The root may carry a pinned version; every other name resolves to latest.
pub struct RegistryChildSource<'a, P: MetadataProvider + ?Sized> {
    provider: &'a P,
    pinned_root: Option<(PackageName, String)>,
}

impl<'a, P: MetadataProvider + ?Sized> RegistryChildSource<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            pinned_root: None,
        }
    }

    /// Resolves `name` at `version` instead of latest
    pub fn with_pinned_root(mut self, name: PackageName, version: Option<String>) -> Self {
        self.pinned_root = version.map(|v| (name, v));
        self
    }

    fn version_for(&self, name: &PackageName) -> Option<&str> {
        match &self.pinned_root {
            Some((root, version)) if root == name => Some(version.as_str()),
            _ => None,
        }
    }
}

#[async_trait]
impl<'a, P: MetadataProvider + ?Sized> ChildSource for RegistryChildSource<'a, P> {
    async fn children_of(&self, name: &PackageName) -> ChildLookup {
        match self.provider.resolve(name, self.version_for(name)).await {
            Ok(metadata) => ChildLookup::Found(metadata.dependencies),
            Err(e) => {
                tracing::warn!(package = %name, error = %e, "could not expand package");
                ChildLookup::Unresolved
            }
        }
    }
}
