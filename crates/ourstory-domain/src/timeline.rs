//! Timeline module - the unit of merge input and output

use crate::event::HistoricalEvent;
use crate::source::Source;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named collection of historical events and their sources
///
/// Within one timeline, event ids are unique and source ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Events, in order
    pub events: Vec<HistoricalEvent>,

    /// Sources
    pub sources: Vec<Arc<Source>>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Timeline {
    /// Create an empty timeline stamped with the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            events: Vec::new(),
            sources: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set `updated_at` to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Look up an event by id
    pub fn event(&self, id: &str) -> Option<&HistoricalEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up a source by id
    pub fn source(&self, id: &str) -> Option<&Arc<Source>> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Whether the timeline has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
