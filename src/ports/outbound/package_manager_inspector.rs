use crate::dependency_graph::domain::PackageName;
use crate::shared::Result;
use async_trait::async_trait;

/// PackageManagerInspector port for asking a real package manager what it installs
///
/// Used only for the npm comparison report.
#[async_trait]
pub trait PackageManagerInspector: Send + Sync {
    /// Installs `name@version` into a scratch project and returns the
    /// package manager's dependency tree as JSON (`npm ls --all --json` shape)
    ///
    /// # Errors
    /// Returns an error if the tree cannot be obtained or parsed. A failed
    /// install alone is not an error.
    async fn installed_tree(&self, name: &PackageName, version: &str) -> Result<serde_json::Value>;
}
