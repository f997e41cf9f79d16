//! Historical event module

use crate::chronology::{DateRange, NormalizedDate};
use crate::contradiction::Contradiction;
use crate::source::Source;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Where an event took place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location name (compared by exact string equality)
    pub name: String,

    /// Optional coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Create a location with a name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates: None,
        }
    }

    /// Attach coordinates
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates { latitude, longitude });
        self
    }
}

/// A dated, sourced, tagged historical event
///
/// Events are created by data packages and never mutated afterwards, except
/// when a timeline merge appends the sources of a duplicate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    /// Identifier, unique within a timeline
    pub id: String,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// When the event happened
    pub date_range: DateRange,

    /// Cited sources, in order (shared, not owned)
    pub sources: Vec<Arc<Source>>,

    /// Optional location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ids of related events; targets may be absent from the timeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_events: Option<Vec<String>>,

    /// Contradictions embedded by the data author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contradictions: Option<Vec<Contradiction>>,
}

impl HistoricalEvent {
    /// Create a new event without location, tags or links
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date_range: DateRange,
        sources: Vec<Arc<Source>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date_range,
            sources,
            location: None,
            tags: Vec::new(),
            related_events: None,
            contradictions: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the related event ids
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_events = Some(related.into_iter().map(Into::into).collect());
        self
    }

    /// Normalized start instant
    pub fn start(&self) -> NormalizedDate {
        self.date_range.normalized_start()
    }

    /// Whether the event carries the tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of this event's tags that also appear on `other`
    ///
    /// Counts repeated tags on `self` once per occurrence.
    pub fn shared_tag_count(&self, other: &HistoricalEvent) -> usize {
        self.tags.iter().filter(|tag| other.has_tag(tag)).count()
    }

    /// Whether `related_events` names `id`
    pub fn is_related_to(&self, id: &str) -> bool {
        self.related_events
            .as_ref()
            .is_some_and(|related| related.iter().any(|r| r == id))
    }
}
