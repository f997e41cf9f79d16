//! All-pairs overlap scan
//!
//! Every unordered pair of events is first tested for temporal overlap; only
//! overlapping pairs go on to the title-similarity check, which flags
//! similarly titled events with differing descriptions as interpretation
//! conflicts.

use crate::EngineConfig;
use ourstory_domain::{Contradiction, ContradictionType, HistoricalEvent, NormalizedDate, Severity};
use tracing::{debug, info};

/// Normalized [start, end] of an event; a missing end equals the start
fn span(event: &HistoricalEvent) -> (NormalizedDate, NormalizedDate) {
    (event.date_range.normalized_start(), event.date_range.normalized_end())
}

fn spans_overlap(a: &(NormalizedDate, NormalizedDate), b: &(NormalizedDate, NormalizedDate)) -> bool {
    // Any invalid bound makes both comparisons false
    a.0 <= b.1 && b.0 <= a.1
}

/// Whether two events overlap in time
///
/// Unparseable dates never overlap anything.
pub fn events_overlap(a: &HistoricalEvent, b: &HistoricalEvent) -> bool {
    spans_overlap(&span(a), &span(b))
}

/// Word-overlap similarity of two titles
///
/// Titles are lower-cased and split on single spaces. The score is the
/// number of words of `a` that also occur in `b`, divided by the larger
/// word count.
///
/// # Examples
///
/// ```
/// use ourstory_engine::title_similarity;
///
/// assert_eq!(title_similarity("Great Flood", "great flood"), 1.0);
/// assert_eq!(title_similarity("Great Flood", "Great Pyramid"), 0.5);
/// ```
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_a: Vec<&str> = a.split(' ').collect();
    let words_b: Vec<&str> = b.split(' ').collect();

    let common = words_a.iter().filter(|word| words_b.contains(*word)).count();
    common as f64 / words_a.len().max(words_b.len()) as f64
}

/// Interpretation check for one pair of events
///
/// Emits a moderate `interpretation_conflict` when the titles are more than
/// `threshold` similar and the descriptions differ.
pub fn detect_interpretation_conflict(
    a: &HistoricalEvent,
    b: &HistoricalEvent,
    threshold: f64,
) -> Option<Contradiction> {
    if title_similarity(&a.title, &b.title) <= threshold || a.description == b.description {
        return None;
    }

    Some(Contradiction {
        id: format!("contradiction-{}-{}", a.id, b.id),
        event_id: a.id.clone(),
        conflicting_event_id: Some(b.id.clone()),
        description: format!(
            "Events \"{}\" and \"{}\" have conflicting descriptions",
            a.title, b.title
        ),
        sources: a.sources.iter().chain(b.sources.iter()).cloned().collect(),
        contradiction_type: ContradictionType::InterpretationConflict,
        severity: Severity::Moderate,
    })
}

/// Scan every pair of events for interpretation conflicts
///
/// O(n²) in the number of events. Pairs are visited as (i, j) with i < j in
/// input order.
pub fn find_overlap_contradictions(events: &[HistoricalEvent], config: &EngineConfig) -> Vec<Contradiction> {
    let spans: Vec<_> = events.iter().map(span).collect();
    let unparseable = spans.iter().filter(|(start, _)| !start.is_valid()).count();
    if unparseable > 0 {
        debug!("{} event(s) have unparseable start dates and cannot overlap", unparseable);
    }

    let mut contradictions = Vec::new();
    let mut overlapping_pairs = 0usize;

    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if !spans_overlap(&spans[i], &spans[j]) {
                continue;
            }
            overlapping_pairs += 1;

            if let Some(contradiction) =
                detect_interpretation_conflict(&events[i], &events[j], config.similarity_threshold)
            {
                contradictions.push(contradiction);
            }
        }
    }

    info!(
        events = events.len(),
        overlapping_pairs,
        contradictions = contradictions.len(),
        "Overlap scan complete"
    );

    contradictions
}
