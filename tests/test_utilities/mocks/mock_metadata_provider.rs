use async_trait::async_trait;
use dep_visualizer::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock MetadataProvider backed by an in-memory package table
///
/// Unknown names resolve as an HTTP 404 would, and names marked with
/// `with_failure` fail like a registry timeout.
#[derive(Default, Clone)]
pub struct MockMetadataProvider {
    pub packages: HashMap<String, Vec<String>>,
    pub failing: HashSet<String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.packages.insert(
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn resolve(&self, name: &PackageName, version: Option<&str>) -> Result<PackageMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(name.as_str()) {
            return Err(ResolutionError::Transport {
                url: format!("mock://{}", name),
                details: "timed out".to_string(),
            }
            .into());
        }

        match self.packages.get(name.as_str()) {
            Some(deps) => Ok(PackageMetadata::new(
                deps.iter().map(PackageName::new).collect(),
                version.unwrap_or("1.0.0"),
            )),
            None => Err(ResolutionError::HttpStatus {
                status: 404,
                url: format!("mock://{}", name),
            }
            .into()),
        }
    }
}
