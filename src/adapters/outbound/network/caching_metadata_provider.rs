use crate::dependency_graph::domain::{PackageMetadata, PackageName};
use crate::ports::outbound::MetadataProvider;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for a registry lookup
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    package_name: PackageName,
    /// Pinned version, or "latest"
    version: String,
}

impl CacheKey {
    fn new(package_name: &PackageName, version: Option<&str>) -> Self {
        Self {
            package_name: package_name.clone(),
            version: version.unwrap_or("latest").to_string(),
        }
    }
}

/// CachingMetadataProvider wraps a MetadataProvider and memoizes its answers.
///
/// This adapter implements the decorator pattern over any MetadataProvider.
/// Failures are cached too (as their message), so an unavailable package is
/// requested once per run no matter how often the graph refers to it.
pub struct CachingMetadataProvider<P: MetadataProvider> {
    inner: P,
    cache: Arc<DashMap<CacheKey, std::result::Result<PackageMetadata, String>>>,
}

impl<P: MetadataProvider> CachingMetadataProvider<P> {
    /// Creates a new caching provider wrapping the given inner provider
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<P: MetadataProvider> MetadataProvider for CachingMetadataProvider<P> {
    async fn resolve(&self, name: &PackageName, version: Option<&str>) -> Result<PackageMetadata> {
        let key = CacheKey::new(name, version);

        if let Some(cached) = self.cache.get(&key) {
            return cached.clone().map_err(anyhow::Error::msg);
        }

        let result = self.inner.resolve(name, version).await;
        let stored = match &result {
            Ok(metadata) => Ok(metadata.clone()),
            Err(e) => Err(format!("{:#}", e)),
        };
        self.cache.insert(key, stored);

        result
    }
}
