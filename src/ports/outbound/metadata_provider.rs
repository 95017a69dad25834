use crate::dependency_graph::domain::{PackageMetadata, PackageName};
use crate::shared::Result;
use async_trait::async_trait;

/// MetadataProvider port for resolving a package's direct dependencies
///
/// This port abstracts the package registry used by the graph builder and
/// the lazy tree traversal. An `Err` means the package is unavailable; callers
/// recover from it locally instead of aborting.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolves a package to its direct dependency names
    ///
    /// # Arguments
    /// * `name` - Name of the package
    /// * `version` - Pinned version, or `None` for the registry's latest
    ///
    /// # Returns
    /// The dependency names in declaration order and the version selected
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The registry returns an error status code
    /// - The document cannot be parsed or the version does not exist
    async fn resolve(&self, name: &PackageName, version: Option<&str>) -> Result<PackageMetadata>;
}
