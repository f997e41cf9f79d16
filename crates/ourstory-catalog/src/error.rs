//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while reading packages and agent registries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a file
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported package format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Two sources in one package share an id
    #[error("Package '{package}' declares source '{id}' twice")]
    DuplicateSource {
        /// Package id
        package: String,
        /// Repeated source id
        id: String,
    },

    /// Two events in one package share an id
    #[error("Package '{package}' declares event '{id}' twice")]
    DuplicateEvent {
        /// Package id
        package: String,
        /// Repeated event id
        id: String,
    },

    /// An event cites no sources
    #[error("Event '{event}' cites no sources")]
    NoSources {
        /// Event id
        event: String,
    },

    /// An event or contradiction cites a source the package does not declare
    #[error("Event '{event}' cites unknown source '{source_id}'")]
    UnknownSource {
        /// Event id
        event: String,
        /// Unresolved source id
        source_id: String,
    },

    /// Date confidence outside the 0..=100 percentage range
    #[error("Event '{event}' has confidence {confidence}, expected 0-100")]
    InvalidConfidence {
        /// Event id
        event: String,
        /// Offending value
        confidence: u8,
    },

    /// Two agents in one registry share an id
    #[error("Agent registry declares agent '{0}' twice")]
    DuplicateAgent(String),
}
