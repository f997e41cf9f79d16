//! Source module - citation records backing historical events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Peer-reviewed or scholarly work
    Academic,

    /// Scripture and religious commentary
    Religious,

    /// Alternative or fringe research
    Alternative,

    /// Released government documents
    Declassified,

    /// Physical excavation evidence
    Archaeological,

    /// Spoken traditions recorded later
    OralTradition,
}

impl SourceType {
    /// Get the source type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Academic => "academic",
            SourceType::Religious => "religious",
            SourceType::Alternative => "alternative",
            SourceType::Declassified => "declassified",
            SourceType::Archaeological => "archaeological",
            SourceType::OralTradition => "oral_tradition",
        }
    }

    /// Parse a source type from a string
    ///
    /// Accepts both `oral_tradition` and `oral-tradition`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "academic" => Some(SourceType::Academic),
            "religious" => Some(SourceType::Religious),
            "alternative" => Some(SourceType::Alternative),
            "declassified" => Some(SourceType::Declassified),
            "archaeological" => Some(SourceType::Archaeological),
            "oral_tradition" => Some(SourceType::OralTradition),
            _ => None,
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid source type: {}", s))
    }
}

/// Reliability tier of a source
///
/// Ordered from most to least direct:
/// - Primary: the original text or artifact
/// - Secondary: analysis or interpretation
/// - Tertiary: summary or compilation
/// - Contested: disputed or controversial
/// - Unverified: lacking corroboration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceReliability {
    /// Direct source (e.g., original text)
    Primary,

    /// Analysis or interpretation
    Secondary,

    /// Summary or compilation
    Tertiary,

    /// Disputed or controversial
    Contested,

    /// Lacking corroboration
    Unverified,
}

impl SourceReliability {
    /// Get the reliability name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceReliability::Primary => "primary",
            SourceReliability::Secondary => "secondary",
            SourceReliability::Tertiary => "tertiary",
            SourceReliability::Contested => "contested",
            SourceReliability::Unverified => "unverified",
        }
    }

    /// Parse a reliability tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(SourceReliability::Primary),
            "secondary" => Some(SourceReliability::Secondary),
            "tertiary" => Some(SourceReliability::Tertiary),
            "contested" => Some(SourceReliability::Contested),
            "unverified" => Some(SourceReliability::Unverified),
            _ => None,
        }
    }
}

impl std::str::FromStr for SourceReliability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid source reliability: {}", s))
    }
}

/// A citation record
///
/// Sources are immutable once constructed. Events share them through
/// `Arc<Source>` rather than owning copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Unique identifier (e.g., "plato-timaeus")
    pub id: String,

    /// Display name
    pub name: String,

    /// Category of the source
    #[serde(rename = "type")]
    pub source_type: SourceType,

    /// Reliability tier
    pub reliability: SourceReliability,

    /// Optional author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Optional publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,

    /// Optional URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Source {
    /// Create a new source with only the required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source_type: SourceType,
        reliability: SourceReliability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source_type,
            reliability,
            author: None,
            publication_date: None,
            url: None,
            notes: None,
        }
    }

    /// Attach an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Attach free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
