use super::{OutputStyle, SourceMode};
use crate::dependency_graph::domain::{
    validate_version, AnalysisOptions, PackageName, DEFAULT_MAX_DEPTH,
};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::path::PathBuf;

/// Largest accepted `--max-depth`
pub const MAX_DEPTH_LIMIT: usize = 1000;

/// AnalysisRequest - validated input of the analysis use cases
///
/// Built through [`AnalysisRequest::builder`]; `build()` performs every
/// configuration check, so a request that exists is safe to analyse.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub mode: SourceMode,
    pub package: PackageName,
    /// Pinned version of the start package (live mode only)
    pub version: Option<String>,
    /// Graph file (file mode only)
    pub repo_path: Option<PathBuf>,
    pub style: OutputStyle,
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}

/// Builder for [`AnalysisRequest`]
#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    mode: SourceMode,
    package: Option<String>,
    version: Option<String>,
    repo_path: Option<PathBuf>,
    style: OutputStyle,
    max_depth: Option<usize>,
    ignore: Option<String>,
}

impl AnalysisRequestBuilder {
    pub fn mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn repo_path(mut self, repo_path: Option<PathBuf>) -> Self {
        self.repo_path = repo_path;
        self
    }

    pub fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn ignore(mut self, ignore: Option<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Validates the collected values
    ///
    /// # Errors
    /// Returns `DepVizError::InvalidArgument` if:
    /// - the package is missing or not a valid name
    /// - the version contains invalid characters
    /// - the max depth is outside 1..=1000
    /// - file mode has no `--repo-path`
    pub fn build(self) -> Result<AnalysisRequest> {
        let package = match self.package.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => PackageName::parse(name)?,
            _ => {
                return Err(DepVizError::InvalidArgument {
                    name: "--package".to_string(),
                    reason: "a start package is required".to_string(),
                }
                .into())
            }
        };

        let version = self
            .version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(version) = &version {
            validate_version(version)?;
        }

        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
            return Err(DepVizError::InvalidArgument {
                name: "--max-depth".to_string(),
                reason: format!(
                    "{} is out of range. Use a value between 1 and {}",
                    max_depth, MAX_DEPTH_LIMIT
                ),
            }
            .into());
        }

        if self.mode == SourceMode::File && self.repo_path.is_none() {
            return Err(DepVizError::InvalidArgument {
                name: "--repo-path".to_string(),
                reason: "file mode needs the path of a graph file".to_string(),
            }
            .into());
        }

        if self.mode == SourceMode::File && version.is_some() {
            tracing::warn!("--package-version has no effect in file mode");
        }

        Ok(AnalysisRequest {
            mode: self.mode,
            package,
            version,
            repo_path: self.repo_path,
            style: self.style,
            options: AnalysisOptions::new(max_depth, self.ignore),
        })
    }
}
