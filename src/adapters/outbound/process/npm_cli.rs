use crate::dependency_graph::domain::PackageName;
use crate::ports::outbound::PackageManagerInspector;
use crate::shared::error::DepVizError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;

/// Upper bound for `npm install`
const INSTALL_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Upper bound for `npm ls`
const LIST_TIMEOUT: Duration = Duration::from_secs(60);

/// NpmCli adapter asking the real npm what it installs
///
/// This adapter implements the PackageManagerInspector port. Each call
/// installs into a fresh temporary project that is removed afterwards.
pub struct NpmCli {
    program: String,
}

impl NpmCli {
    pub fn new() -> Self {
        Self {
            program: "npm".to_string(),
        }
    }

    /// Uses a different executable instead of `npm` from PATH
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn write_manifest(dir: &Path, name: &PackageName, version: &str) -> Result<()> {
        let manifest = serde_json::json!({
            "name": "dep-visualizer-compare",
            "version": "1.0.0",
            "description": "temporary project for dependency order comparison",
            "private": true,
            "dependencies": { name.as_str(): version }
        });
        let content = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(dir.join("package.json"), content).map_err(|e| {
            DepVizError::PackageManagerError {
                details: format!("cannot write package.json: {}", e),
            }
        })?;
        Ok(())
    }

    /// Runs `npm install`; a failure is reported and the comparison goes on
    async fn install(&self, dir: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(["install", "--no-audit", "--no-fund"])
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        match tokio::time::timeout(INSTALL_TIMEOUT, command.status()).await {
            Ok(Ok(status)) if status.success() => {}
            Ok(Ok(status)) => {
                tracing::warn!(%status, "npm install finished with an error; continuing")
            }
            Ok(Err(e)) => {
                return Err(DepVizError::PackageManagerError {
                    details: format!("cannot run {}: {}", self.program, e),
                }
                .into())
            }
            Err(_) => tracing::warn!("npm install timed out; continuing"),
        }
        Ok(())
    }

    /// Runs `npm ls --all --json`; stdout is used even on a non-zero exit
    async fn list(&self, dir: &Path) -> Result<serde_json::Value> {
        let mut command = Command::new(&self.program);
        command
            .args(["ls", "--all", "--json"])
            .current_dir(dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(LIST_TIMEOUT, command.output())
            .await
            .map_err(|_| DepVizError::PackageManagerError {
                details: "npm ls timed out".to_string(),
            })?
            .map_err(|e| DepVizError::PackageManagerError {
                details: format!("cannot run {}: {}", self.program, e),
            })?;

        parse_tree(&output.stdout)
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `npm ls --json` output
fn parse_tree(stdout: &[u8]) -> Result<serde_json::Value> {
    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Err(DepVizError::PackageManagerError {
            details: "npm ls produced no output".to_string(),
        }
        .into());
    }

    serde_json::from_str(&text).map_err(|e| {
        DepVizError::PackageManagerError {
            details: format!("npm ls did not return valid JSON: {}", e),
        }
        .into()
    })
}

#[async_trait]
impl PackageManagerInspector for NpmCli {
    async fn installed_tree(&self, name: &PackageName, version: &str) -> Result<serde_json::Value> {
        let temp_dir = tempfile::Builder::new()
            .prefix("npm-compare-")
            .tempdir()
            .map_err(|e| DepVizError::PackageManagerError {
                details: format!("cannot create a temporary directory: {}", e),
            })?;

        Self::write_manifest(temp_dir.path(), name, version)?;
        tracing::info!(package = %name, version, dir = %temp_dir.path().display(), "running npm install");

        self.install(temp_dir.path()).await?;
        let tree = self.list(temp_dir.path()).await;

        close(temp_dir);
        tree
    }
}

fn close(temp_dir: TempDir) {
    if let Err(e) = temp_dir.close() {
        tracing::debug!(error = %e, "could not remove temporary npm project");
    }
}
