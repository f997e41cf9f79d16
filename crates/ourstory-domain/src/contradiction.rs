//! Contradiction module - detected inconsistencies between events

use crate::source::Source;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kind of inconsistency
///
/// A closed set: data packages and detectors share this enumeration, and
/// unknown values are rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionType {
    /// Events describing the same thing disagree on when it happened
    DateConflict,

    /// Events disagree on a stated fact (e.g., location)
    FactConflict,

    /// Similar events are described differently
    InterpretationConflict,

    /// Sources disagree on whether the event happened at all
    ExistenceConflict,
}

impl ContradictionType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContradictionType::DateConflict => "date_conflict",
            ContradictionType::FactConflict => "fact_conflict",
            ContradictionType::InterpretationConflict => "interpretation_conflict",
            ContradictionType::ExistenceConflict => "existence_conflict",
        }
    }

    /// Parse a contradiction type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date_conflict" => Some(ContradictionType::DateConflict),
            "fact_conflict" => Some(ContradictionType::FactConflict),
            "interpretation_conflict" => Some(ContradictionType::InterpretationConflict),
            "existence_conflict" => Some(ContradictionType::ExistenceConflict),
            _ => None,
        }
    }

    /// Human-readable label ("date conflict")
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::str::FromStr for ContradictionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid contradiction type: {}", s))
    }
}

/// How serious a contradiction is (ordered minor < moderate < major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Cosmetic disagreement
    Minor,

    /// Worth flagging
    Moderate,

    /// Fundamental disagreement
    Major,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
        }
    }

    /// Parse a severity from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minor" => Some(Severity::Minor),
            "moderate" => Some(Severity::Moderate),
            "major" => Some(Severity::Major),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}

/// A detected inconsistency between an event and (optionally) another event
///
/// Contradictions are created by detectors (or authored in data packages)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contradiction {
    /// Deterministic identifier
    pub id: String,

    /// Event this contradiction concerns
    pub event_id: String,

    /// The conflicting event, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_event_id: Option<String>,

    /// Free-text description
    pub description: String,

    /// Sources cited (duplicates allowed)
    pub sources: Vec<Arc<Source>>,

    /// Kind of inconsistency
    #[serde(rename = "type")]
    pub contradiction_type: ContradictionType,

    /// Severity
    pub severity: Severity,
}
