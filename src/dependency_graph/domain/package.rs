use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::borrow::Borrow;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a package name.
///
/// Identity is exact string equality. Names coming from a registry or a
/// graph file are taken as-is with [`PackageName::new`]; names typed by the
/// user go through [`PackageName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parses a user-supplied package name (e.g. `--package`).
    ///
    /// Accepts scoped names such as `@types/node`.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid("--package", "package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                "--package",
                &format!(
                    "package name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '_' | '/' | '.'))
        {
            return Err(invalid(
                "--package",
                &format!(
                    "'{}' contains invalid characters. Only letters, digits, '@', '-', '_', '/' and '.' are allowed",
                    name
                ),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match used by the ignore filter
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PackageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Validates a user-supplied version (e.g. `--package-version`).
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(invalid("--package-version", "version cannot be empty"));
    }

    if version.len() > MAX_VERSION_LENGTH {
        return Err(invalid(
            "--package-version",
            &format!(
                "version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            ),
        ));
    }

    if !version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(invalid(
            "--package-version",
            &format!(
                "'{}' contains invalid characters. Only letters, digits, '.', '-' and '_' are allowed",
                version
            ),
        ));
    }

    Ok(())
}

fn invalid(name: &str, reason: &str) -> anyhow::Error {
    DepVizError::InvalidArgument {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Metadata a registry reports for one resolved package version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Direct dependency names in declaration order
    pub dependencies: Vec<PackageName>,
    /// The concrete version that was selected
    pub resolved_version: String,
}

impl PackageMetadata {
    pub fn new(dependencies: Vec<PackageName>, resolved_version: impl Into<String>) -> Self {
        Self {
            dependencies,
            resolved_version: resolved_version.into(),
        }
    }
}
