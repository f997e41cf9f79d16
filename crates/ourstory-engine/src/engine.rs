//! Timeline engine: owns one timeline and answers questions about it

use crate::{merge, overlap, EngineConfig};
use ourstory_domain::{normalize, Contradiction, DateMarker, HistoricalEvent, SourceType, Timeline};
use tracing::debug;

/// Engine for managing and scanning a single timeline
///
/// The engine holds mutable timeline state (`add_event` re-sorts in place),
/// so an instance belongs to one caller at a time.
///
/// # Examples
///
/// ```
/// use ourstory_domain::{DateRange, HistoricalEvent, Timeline};
/// use ourstory_engine::TimelineEngine;
///
/// let mut engine = TimelineEngine::new(Timeline::new("ancient", "Ancient", ""));
/// engine.add_event(HistoricalEvent::new("pyramid", "Great Pyramid", "", DateRange::new("2580 BCE"), vec![]));
/// engine.add_event(HistoricalEvent::new("atlantis", "Atlantis", "", DateRange::new("9600 BCE"), vec![]));
///
/// assert_eq!(engine.timeline().events[0].id, "atlantis");
/// ```
pub struct TimelineEngine {
    timeline: Timeline,
    config: EngineConfig,
}

impl TimelineEngine {
    /// Create an engine over a timeline with default configuration
    pub fn new(timeline: Timeline) -> Self {
        Self::with_config(timeline, EngineConfig::default())
    }

    /// Create an engine with the given configuration
    pub fn with_config(timeline: Timeline, config: EngineConfig) -> Self {
        Self { timeline, config }
    }

    /// Merge timelines into a new one (see [`merge::merge_timelines`])
    pub fn merge_timelines(timelines: &[Timeline]) -> Timeline {
        merge::merge_timelines(timelines)
    }

    /// Get the timeline
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consume the engine, returning the timeline
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add an event, bump `updated_at` and re-sort chronologically
    pub fn add_event(&mut self, event: HistoricalEvent) {
        debug!("Adding event '{}' to timeline '{}'", event.id, self.timeline.id);
        self.timeline.events.push(event);
        self.timeline.touch();
        self.sort_events();
    }

    /// Stable sort by normalized start; unparseable dates sort as the epoch
    fn sort_events(&mut self) {
        self.timeline
            .events
            .sort_by_cached_key(|event| event.start().sort_key());
    }

    /// Events in display order, without reordering the timeline
    ///
    /// Ascending by normalized start; ties keep timeline order.
    pub fn sorted_events(&self) -> Vec<&HistoricalEvent> {
        let mut events: Vec<&HistoricalEvent> = self.timeline.events.iter().collect();
        events.sort_by_cached_key(|event| event.start().sort_key());
        events
    }

    /// Scan all event pairs for interpretation conflicts
    pub fn find_contradictions(&self) -> Vec<Contradiction> {
        overlap::find_overlap_contradictions(&self.timeline.events, &self.config)
    }

    /// Events whose normalized start lies within `[start, end]`
    ///
    /// Events or bounds with unparseable dates never match.
    pub fn filter_by_date_range(
        &self,
        start: impl Into<DateMarker>,
        end: impl Into<DateMarker>,
    ) -> Vec<&HistoricalEvent> {
        let start = normalize(&start.into());
        let end = normalize(&end.into());

        self.timeline
            .events
            .iter()
            .filter(|event| {
                let event_start = event.start();
                event_start >= start && event_start <= end
            })
            .collect()
    }

    /// Events citing at least one source of the given type
    pub fn filter_by_source_type(&self, source_type: SourceType) -> Vec<&HistoricalEvent> {
        self.timeline
            .events
            .iter()
            .filter(|event| event.sources.iter().any(|s| s.source_type == source_type))
            .collect()
    }

    /// Events carrying any of the given tags
    pub fn events_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&HistoricalEvent> {
        self.timeline
            .events
            .iter()
            .filter(|event| tags.iter().any(|tag| event.has_tag(tag.as_ref())))
            .collect()
    }
}
