//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for the overlap scan
///
/// # Examples
///
/// ```
/// use ourstory_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.similarity_threshold, 0.7);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Title similarity above which two overlapping events are compared
    /// (strictly greater than)
    /// Default: 0.7
    pub similarity_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
        }
    }
}
