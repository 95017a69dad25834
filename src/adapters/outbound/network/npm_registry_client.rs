use crate::dependency_graph::domain::{PackageMetadata, PackageName};
use crate::ports::outbound::MetadataProvider;
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

/// Default public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default number of attempts per package document
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Packument subset needed for version selection
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
    #[serde(default)]
    versions: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct VersionManifest {
    /// Key order is the declaration order in package.json
    #[serde(default)]
    dependencies: Map<String, Value>,
}

/// Connection settings for [`NpmRegistryClient`]
#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Base URL, always ending with `/`
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// NpmRegistryClient adapter for fetching package documents from an npm registry
///
/// This adapter implements the MetadataProvider port over the registry's
/// JSON API. It performs no caching itself; wrap it in
/// `CachingMetadataProvider` to memoize lookups for the run.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    settings: RegistrySettings,
}

impl NpmRegistryClient {
    /// Creates a new registry client
    pub fn new(settings: RegistrySettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dep-visualizer/{}", version);
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, settings })
    }

    /// Document URL for a package; a scoped name keeps its leading `@`
    fn document_url(&self, name: &str) -> String {
        let encoded = match name.strip_prefix('@') {
            Some(rest) => format!("@{}", urlencoding::encode(rest)),
            None => urlencoding::encode(name).into_owned(),
        };
        format!("{}{}", self.settings.base_url, encoded)
    }

    /// Fetches the package document, retrying transient failures (async)
    async fn fetch_with_retry(&self, url: &str) -> std::result::Result<Value, ResolutionError> {
        let attempts = self.settings.max_retries.max(1);
        let mut attempt = 1;

        loop {
            match self.fetch_document(url).await {
                Ok(document) => return Ok(document),
                Err(ResolutionError::HttpStatus { status: 404, url }) => {
                    return Err(ResolutionError::HttpStatus { status: 404, url })
                }
                Err(e) if attempt < attempts => {
                    tracing::debug!(url, attempt, error = %e, "retrying registry request");
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_document(&self, url: &str) -> std::result::Result<Value, ResolutionError> {
        let transport = |e: reqwest::Error| ResolutionError::Transport {
            url: url.to_string(),
            details: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        if !response.status().is_success() {
            return Err(ResolutionError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<Value>().await.map_err(transport)
    }
}

/// Picks the version to use from a package document and returns its
/// dependency names in declaration order.
///
/// Order of preference: the pinned version, `dist-tags.latest`, then the
/// highest version key.
fn select_version(
    package: &str,
    document: Value,
    pinned: Option<&str>,
) -> std::result::Result<PackageMetadata, ResolutionError> {
    let document: RegistryDocument =
        serde_json::from_value(document).map_err(|e| ResolutionError::MalformedDocument {
            package: package.to_string(),
            details: e.to_string(),
        })?;

    let version = match pinned {
        Some(version) => version.to_string(),
        None => match document.dist_tags.get("latest") {
            Some(latest) => latest.clone(),
            None => document
                .versions
                .keys()
                .max_by(|a, b| compare_versions(a, b))
                .cloned()
                .ok_or_else(|| ResolutionError::NoVersions {
                    package: package.to_string(),
                })?,
        },
    };

    let manifest = document
        .versions
        .get(&version)
        .cloned()
        .ok_or_else(|| ResolutionError::VersionNotFound {
            package: package.to_string(),
            version: version.clone(),
        })?;

    let manifest: VersionManifest =
        serde_json::from_value(manifest).map_err(|e| ResolutionError::MalformedDocument {
            package: package.to_string(),
            details: e.to_string(),
        })?;

    let dependencies = manifest
        .dependencies
        .keys()
        .map(|name| PackageName::new(name.as_str()))
        .collect();

    Ok(PackageMetadata::new(dependencies, version))
}

/// Compares dot-separated versions segment by segment, numerically.
///
/// A segment's leading digits are its value (`3-beta` counts as 3) and a
/// missing segment counts as 0. Ranges and prerelease ordering are not
/// interpreted.
fn compare_versions(a: &str, b: &str) -> Ordering {
    fn segment_value(segment: &str) -> u64 {
        let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(0)
    }

    let left: Vec<u64> = a.split('.').map(segment_value).collect();
    let right: Vec<u64> = b.split('.').map(segment_value).collect();

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[async_trait]
impl MetadataProvider for NpmRegistryClient {
    async fn resolve(&self, name: &PackageName, version: Option<&str>) -> Result<PackageMetadata> {
        let url = self.document_url(name.as_str());
        tracing::debug!(package = %name, version = version.unwrap_or("latest"), "fetching registry document");

        let document = self.fetch_with_retry(&url).await?;
        Ok(select_version(name.as_str(), document, version)?)
    }
}
