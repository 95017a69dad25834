//! Configuration file support for dep-visualizer.
//!
//! Provides YAML-based configuration through `dep-visualizer.config.yml`
//! files and merges it with command-line flags. Precedence is CLI, then the
//! config file, then built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::cli::Args;
use dep_visualizer::adapters::outbound::network::{
    RegistrySettings, DEFAULT_MAX_RETRIES, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS,
};
use dep_visualizer::application::dto::OutputStyle;
use dep_visualizer::dependency_graph::domain::DEFAULT_MAX_DEPTH;
use dep_visualizer::shared::error::DepVizError;
use dep_visualizer::shared::Result;

const CONFIG_FILENAME: &str = "dep-visualizer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub max_depth: Option<usize>,
    pub ignore: Option<String>,
    pub style: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub style: OutputStyle,
    pub max_depth: usize,
    pub ignore: Option<String>,
    pub registry: RegistrySettings,
}

impl Settings {
    /// Merges `args` over `config` over the defaults and validates the
    /// values that do not belong to the analysis request itself.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let style = match (args.style, config.style.as_deref()) {
            (Some(style), _) => style,
            (None, Some(raw)) => raw.parse().map_err(|reason| DepVizError::InvalidArgument {
                name: "style (config file)".to_string(),
                reason,
            })?,
            (None, None) => OutputStyle::default(),
        };

        let registry_url = args
            .registry_url
            .clone()
            .or(config.registry_url)
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let timeout_secs = args
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(DepVizError::InvalidArgument {
                name: "--timeout-secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        let max_retries = config.retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries == 0 {
            return Err(DepVizError::InvalidArgument {
                name: "retries (config file)".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            style,
            max_depth: args
                .max_depth
                .or(config.max_depth)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            ignore: args.ignore.clone().or(config.ignore),
            registry: RegistrySettings {
                base_url: normalize_registry_url(&registry_url)?,
                timeout: Duration::from_secs(timeout_secs),
                max_retries,
            },
        })
    }
}

/// Validates a registry URL and makes it end with exactly one `/`.
pub fn normalize_registry_url(raw: &str) -> Result<String> {
    let invalid = |reason: String| DepVizError::InvalidRegistryUrl {
        url: raw.to_string(),
        reason,
    };

    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())).into());
    }

    Ok(format!("{}/", url.as_str().trim_end_matches('/')))
}

/// Loads the explicit `--config` file, or discovers one in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Ok(Some(config))
        }
        None => {
            let config = discover_config(dir)?;
            if config.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dep-visualizer").chain(extra.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
registry_url: http://localhost:4873
max_depth: 12
ignore: eslint
style: order
timeout_secs: 30
retries: 5
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.registry_url.as_deref(), Some("http://localhost:4873"));
        assert_eq!(config.max_depth, Some(12));
        assert_eq!(config.ignore.as_deref(), Some("eslint"));
        assert_eq!(config.style.as_deref(), Some("order"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.retries, Some(5));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "style: flat\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.style.as_deref(), Some("flat"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
        assert!(load_config(None, dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "style: tree\ncolour: true\nformat: json\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("colour"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&[]), None).unwrap();
        assert_eq!(settings.style, OutputStyle::Tree);
        assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
        assert!(settings.ignore.is_none());
        assert_eq!(settings.registry.base_url, DEFAULT_REGISTRY_URL);
        assert_eq!(settings.registry.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(settings.registry.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_settings_cli_wins_over_config() {
        let config = ConfigFile {
            max_depth: Some(7),
            style: Some("flat".to_string()),
            ignore: Some("from-config".to_string()),
            retries: Some(2),
            ..Default::default()
        };
        let settings =
            Settings::resolve(&args(&["--max-depth", "3", "--style", "order"]), Some(config))
                .unwrap();

        assert_eq!(settings.max_depth, 3);
        assert_eq!(settings.style, OutputStyle::Order);
        assert_eq!(settings.ignore.as_deref(), Some("from-config"));
        assert_eq!(settings.registry.max_retries, 2);
    }

    #[test]
    fn test_settings_invalid_config_style() {
        let config = ConfigFile {
            style: Some("graphviz".to_string()),
            ..Default::default()
        };
        let err = Settings::resolve(&args(&[]), Some(config)).unwrap_err();
        assert!(err.to_string().contains("Invalid style"));
    }

    #[test]
    fn test_settings_zero_timeout_rejected() {
        assert!(Settings::resolve(&args(&["--timeout-secs", "0"]), None).is_err());
    }

    #[test]
    fn test_normalize_registry_url() {
        assert_eq!(
            normalize_registry_url("https://registry.npmjs.org").unwrap(),
            "https://registry.npmjs.org/"
        );
        assert_eq!(
            normalize_registry_url("http://localhost:4873/npm///").unwrap(),
            "http://localhost:4873/npm/"
        );
    }

    #[test]
    fn test_normalize_registry_url_rejects_bad_input() {
        for raw in ["ftp://mirror.example.com", "not a url", ""] {
            let err = normalize_registry_url(raw).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<DepVizError>(),
                Some(DepVizError::InvalidRegistryUrl { .. })
            ));
        }
    }
}
