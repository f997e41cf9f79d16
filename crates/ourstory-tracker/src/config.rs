//! Tracker configuration

use serde::{Deserialize, Serialize};

/// Thresholds for the pairwise checks
///
/// All thresholds are strict: a difference must exceed the value.
///
/// # Examples
///
/// ```
/// use ourstory_tracker::TrackerConfig;
///
/// let config = TrackerConfig::default();
/// assert_eq!(config.same_event_min_shared_tags, 2);
/// assert_eq!(config.date_conflict_min_years, 10.0);
/// assert_eq!(config.major_conflict_years, 100.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Shared tags needed before two events count as describing the same thing
    /// Default: 2
    pub same_event_min_shared_tags: usize,

    /// Start dates further apart than this (in years) are a date conflict
    /// Default: 10 years
    pub date_conflict_min_years: f64,

    /// Date conflicts wider than this (in years) are major rather than moderate
    /// Default: 100 years
    pub major_conflict_years: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            same_event_min_shared_tags: 2,
            date_conflict_min_years: 10.0,
            major_conflict_years: 100.0,
        }
    }
}
