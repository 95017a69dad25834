use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Cycles are a reported result, not a failure, so a run that finds
/// cycles still exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed (with or without cycles)
    Success = 0,
    /// Invalid command-line arguments or configuration (clap uses 2 as well)
    InvalidArguments = 2,
    /// Application error (file I/O, npm comparison failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DepVizError>() {
            Some(e) if e.is_configuration_error() => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors surfaced to the user.
#[derive(Debug, Error)]
pub enum DepVizError {
    #[error("Invalid value for {name}: {reason}\n\n💡 Hint: Run with --help to see the accepted values")]
    InvalidArgument { name: String, reason: String },

    #[error("Graph file not found: {path}\n\n💡 Hint: Please verify the path passed to --repo-path")]
    GraphFileNotFound { path: PathBuf },

    #[error("Failed to read graph file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    GraphFileReadError { path: PathBuf, details: String },

    #[error("Package '{package}' is not declared in graph file: {path}\n\n💡 Hint: The start package needs its own `{package}: ...` line")]
    StartPackageNotFound { package: String, path: PathBuf },

    #[error("Invalid registry URL: {url}\nReason: {reason}\n\n💡 Hint: Use an http or https URL such as https://registry.npmjs.org/")]
    InvalidRegistryUrl { url: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("npm comparison failed: {details}\n\n💡 Hint: Make sure `npm` is installed and on your PATH")]
    PackageManagerError { details: String },
}

impl DepVizError {
    /// Configuration errors abort before any graph work begins and map to
    /// exit code 2.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DepVizError::InvalidArgument { .. }
                | DepVizError::GraphFileNotFound { .. }
                | DepVizError::StartPackageNotFound { .. }
                | DepVizError::InvalidRegistryUrl { .. }
                | DepVizError::SecurityError { .. }
        )
    }
}

/// Failure to resolve a single package's metadata.
///
/// These are recovered locally: the builder records the package as a leaf
/// and the lazy traversal renders it as unresolved.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("registry returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("request to {url} failed: {details}")]
    Transport { url: String, details: String },

    #[error("malformed registry document for {package}: {details}")]
    MalformedDocument { package: String, details: String },

    #[error("version {version} of {package} not found in registry")]
    VersionNotFound { package: String, version: String },

    #[error("{package} has no published versions")]
    NoVersions { package: String },
}
