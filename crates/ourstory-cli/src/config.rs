//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ourstory_catalog::CatalogConfig;
use ourstory_engine::EngineConfig;
use ourstory_tracker::TrackerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG: &str = "ourstory.toml";

/// CLI configuration (`ourstory.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Packages and agent registry
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Overlap scan settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Contradiction tracker thresholds
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
            crate::cli::CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl Config {
    /// Get the user configuration file path (`~/.ourstory/config.toml`).
    pub fn user_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ourstory").join("config.toml"))
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative catalog paths are resolved against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&contents)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.catalog = config.catalog.resolve_relative(base);

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `./ourstory.toml` is tried,
    /// then `~/.ourstory/config.toml`, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Ok(user) = Self::user_path() {
            if user.exists() {
                return Self::from_file(user);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.packages.is_empty());
        assert_eq!(config.engine.similarity_threshold, 0.7);
        assert_eq!(config.tracker.same_event_min_shared_tags, 2);
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tracker]
            major_conflict_years = 1000.0

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.tracker.major_conflict_years, 1000.0);
        assert_eq!(config.tracker.date_conflict_min_years, 10.0);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_from_file_resolves_catalog_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ourstory.toml");
        fs::write(
            &path,
            r#"
            [catalog]
            packages = ["data/a.json"]
            agents = "data/agents.json"
            "#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.catalog.packages, vec![dir.path().join("data/a.json")]);
        assert_eq!(config.catalog.agents, Some(dir.path().join("data/agents.json")));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[output]\nformat = \"yaml\"");
        assert!(result.is_err());
    }
}
