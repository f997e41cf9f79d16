//! Catalog configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which package files and agent registry to load
///
/// Appears as the `[catalog]` table of `ourstory.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Package files, loaded in order
    pub packages: Vec<PathBuf>,

    /// Optional agent registry file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<PathBuf>,
}

impl CatalogConfig {
    /// Resolve relative paths against `base` (usually the config file's directory)
    pub fn resolve_relative(mut self, base: &Path) -> Self {
        for package in &mut self.packages {
            if package.is_relative() {
                *package = base.join(&*package);
            }
        }
        if let Some(agents) = self.agents.as_mut() {
            if agents.is_relative() {
                *agents = base.join(&*agents);
            }
        }
        self
    }
}
