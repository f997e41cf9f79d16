//! Pairwise contradiction checks
//!
//! Two independent checks run for every pair inside a cluster:
//! - Date conflict: events describing the same thing with start dates far apart
//! - Location conflict: events naming different locations
//!
//! A pair can yield zero, one or two contradictions.

use crate::TrackerConfig;
use ourstory_domain::{years_between, Contradiction, ContradictionType, HistoricalEvent, Severity};

/// Whether two events likely describe the same thing
///
/// True when `a` has at least `same_event_min_shared_tags` tags that also
/// appear on `b`.
pub fn describe_same_thing(a: &HistoricalEvent, b: &HistoricalEvent, config: &TrackerConfig) -> bool {
    a.shared_tag_count(b) >= config.same_event_min_shared_tags
}

/// Date-conflict check
///
/// Start dates are normalized and compared in 365-day years. Pairs with an
/// unparseable start date are skipped. Severity is major above
/// `major_conflict_years`, moderate otherwise.
pub fn check_date_conflict(
    a: &HistoricalEvent,
    b: &HistoricalEvent,
    config: &TrackerConfig,
) -> Option<Contradiction> {
    let years = years_between(&a.start(), &b.start())?;

    if years <= config.date_conflict_min_years || !describe_same_thing(a, b, config) {
        return None;
    }

    let severity = if years > config.major_conflict_years {
        Severity::Major
    } else {
        Severity::Moderate
    };

    Some(Contradiction {
        id: format!("date-conflict-{}-{}", a.id, b.id),
        event_id: a.id.clone(),
        conflicting_event_id: Some(b.id.clone()),
        description: format!("Date conflict: Events differ by {} years", years.round()),
        sources: a.sources.iter().chain(b.sources.iter()).cloned().collect(),
        contradiction_type: ContradictionType::DateConflict,
        severity,
    })
}

/// Location-conflict check
///
/// Both events must have a location; names are compared by exact string
/// equality.
pub fn check_location_conflict(a: &HistoricalEvent, b: &HistoricalEvent) -> Option<Contradiction> {
    let (location_a, location_b) = (a.location.as_ref()?, b.location.as_ref()?);
    if location_a.name == location_b.name {
        return None;
    }

    Some(Contradiction {
        id: format!("location-conflict-{}-{}", a.id, b.id),
        event_id: a.id.clone(),
        conflicting_event_id: Some(b.id.clone()),
        description: format!(
            "Location conflict: \"{}\" vs \"{}\"",
            location_a.name, location_b.name
        ),
        sources: a.sources.iter().chain(b.sources.iter()).cloned().collect(),
        contradiction_type: ContradictionType::FactConflict,
        severity: Severity::Moderate,
    })
}

/// Run both checks on a pair, date first
pub fn compare_events(a: &HistoricalEvent, b: &HistoricalEvent, config: &TrackerConfig) -> Vec<Contradiction> {
    check_date_conflict(a, b, config)
        .into_iter()
        .chain(check_location_conflict(a, b))
        .collect()
}

/// Compare every unordered pair (i < j) of a cluster
pub fn find_group_contradictions(group: &[&HistoricalEvent], config: &TrackerConfig) -> Vec<Contradiction> {
    let mut contradictions = Vec::new();

    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            contradictions.extend(compare_events(group[i], group[j], config));
        }
    }

    contradictions
}
