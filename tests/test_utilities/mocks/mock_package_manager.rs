use async_trait::async_trait;
use dep_visualizer::prelude::*;
use serde_json::Value;

/// Mock PackageManagerInspector returning a canned `npm ls --json` tree
pub struct MockPackageManager {
    pub tree: Option<Value>,
}

impl MockPackageManager {
    pub fn new(tree: Value) -> Self {
        Self { tree: Some(tree) }
    }

    pub fn with_failure() -> Self {
        Self { tree: None }
    }
}

#[async_trait]
impl PackageManagerInspector for MockPackageManager {
    async fn installed_tree(&self, name: &PackageName, _version: &str) -> Result<Value> {
        match &self.tree {
            Some(tree) => Ok(tree.clone()),
            None => Err(DepVizError::PackageManagerError {
                details: format!("npm ls produced no output for {}", name),
            }
            .into()),
        }
    }
}
