//! Contradiction tracker: grouping followed by pairwise checks

use crate::{detector, grouping, ContradictionSummary, TrackerConfig};
use ourstory_domain::{Contradiction, Timeline};
use tracing::{debug, info};

/// Analyzes timelines for contradictions between related events
///
/// # Examples
///
/// ```
/// use ourstory_domain::{DateRange, HistoricalEvent, Timeline};
/// use ourstory_tracker::ContradictionTracker;
///
/// let mut timeline = Timeline::new("ancient", "Ancient", "");
/// timeline.events = vec![
///     HistoricalEvent::new("sphinx-mainstream", "Sphinx", "", DateRange::new("2500 BCE"), vec![])
///         .with_tags(["egypt", "sphinx"]),
///     HistoricalEvent::new("sphinx-erosion", "Sphinx", "", DateRange::new("10500 BCE"), vec![])
///         .with_tags(["egypt", "sphinx"]),
/// ];
///
/// let tracker = ContradictionTracker::default_config();
/// let contradictions = tracker.analyze_timeline(&timeline);
/// assert_eq!(contradictions.len(), 1);
/// ```
pub struct ContradictionTracker {
    config: TrackerConfig,
}

impl ContradictionTracker {
    /// Create a tracker with the given configuration
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Create a tracker with default configuration
    pub fn default_config() -> Self {
        Self::new(TrackerConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Find contradictions within groups of related events
    ///
    /// Events are grouped (see [`crate::group_events`]) and every pair
    /// inside a group of two or more is checked. Results follow group
    /// order, then pair order.
    pub fn analyze_timeline(&self, timeline: &Timeline) -> Vec<Contradiction> {
        let groups = grouping::group_events(&timeline.events);
        let mut contradictions = Vec::new();

        for group in groups.iter().filter(|group| group.len() > 1) {
            let found = detector::find_group_contradictions(group, &self.config);
            debug!(
                "Group seeded by '{}' ({} events): {} contradiction(s)",
                group[0].id,
                group.len(),
                found.len()
            );
            contradictions.extend(found);
        }

        info!(
            timeline = %timeline.id,
            events = timeline.events.len(),
            groups = groups.len(),
            contradictions = contradictions.len(),
            "Timeline analyzed"
        );

        contradictions
    }

    /// Tally contradictions by type and severity
    pub fn summarize(&self, contradictions: &[Contradiction]) -> ContradictionSummary {
        ContradictionSummary::from_contradictions(contradictions)
    }
}

impl Default for ContradictionTracker {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ourstory_domain::{ContradictionType, DateRange, HistoricalEvent, Location, Severity};

    fn event(id: &str, start: &str, tags: &[&str]) -> HistoricalEvent {
        HistoricalEvent::new(id, id, "", DateRange::new(start), vec![]).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_empty_timeline() {
        let tracker = ContradictionTracker::default_config();
        assert!(tracker.analyze_timeline(&Timeline::new("t", "T", "")).is_empty());
    }

    #[test]
    fn test_only_grouped_pairs_compared() {
        // Different locations, but no shared tags and no links: never compared
        let mut timeline = Timeline::new("t", "T", "");
        timeline.events = vec![
            event("a", "1947", &["ufo"]).with_location(Location::named("Roswell")),
            event("b", "1963", &["jfk"]).with_location(Location::named("Dallas")),
        ];

        let tracker = ContradictionTracker::default_config();
        assert!(tracker.analyze_timeline(&timeline).is_empty());
    }

    #[test]
    fn test_related_link_groups_events() {
        let mut timeline = Timeline::new("t", "T", "");
        timeline.events = vec![
            event("a", "1947", &[]).with_related(["b"]).with_location(Location::named("Roswell")),
            event("b", "1947", &[]).with_location(Location::named("Corona")),
        ];

        let tracker = ContradictionTracker::default_config();
        let found = tracker.analyze_timeline(&timeline);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].contradiction_type, ContradictionType::FactConflict);
    }

    #[test]
    fn test_analyze_and_summarize() {
        let mut timeline = Timeline::new("t", "T", "");
        timeline.events = vec![
            event("pyramid", "2580 BCE", &["egypt", "pyramid"]).with_location(Location::named("Giza, Egypt")),
            event("pyramid-alt", "10500 BCE", &["egypt", "pyramid", "alt"])
                .with_location(Location::named("Giza Plateau, Egypt")),
            event("roswell", "1947", &["ufo"]),
        ];

        let tracker = ContradictionTracker::default_config();
        let found = tracker.analyze_timeline(&timeline);
        let summary = tracker.summarize(&found);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.count_of_type(ContradictionType::DateConflict), 1);
        assert_eq!(summary.count_of_type(ContradictionType::FactConflict), 1);
        assert_eq!(summary.count_of_severity(Severity::Major), 1);
        assert_eq!(summary.count_of_severity(Severity::Moderate), 1);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut timeline = Timeline::new("t", "T", "");
        timeline.events = vec![
            event("a", "1000 CE", &["egypt", "pyramid"]),
            event("b", "1150 CE", &["egypt", "pyramid"]),
        ];

        let lenient = ContradictionTracker::new(TrackerConfig {
            major_conflict_years: 500.0,
            ..TrackerConfig::default()
        });
        let found = lenient.analyze_timeline(&timeline);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Moderate);
    }
}
