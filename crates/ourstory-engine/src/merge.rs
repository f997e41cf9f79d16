//! Timeline merging

use ourstory_domain::Timeline;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Name given to every merged timeline
pub const MERGED_NAME: &str = "Merged Timeline";

/// Description given to every merged timeline
pub const MERGED_DESCRIPTION: &str = "Combined timeline from multiple sources";

/// Merge timelines into a new one
///
/// Inputs are visited in order:
/// - Sources: the first occurrence of each id is kept, later duplicates are dropped
/// - Events: the first occurrence of each id is kept; a later event with the
///   same id contributes only its sources, appended to the kept event's list
///   (duplicates preserved)
///
/// Output ordering is the order of first occurrence. Related-event ids are
/// not resolved, so dangling references survive unchanged. Inputs are not
/// modified.
///
/// # Examples
///
/// ```
/// use ourstory_domain::Timeline;
/// use ourstory_engine::merge_timelines;
///
/// let merged = merge_timelines(&[Timeline::new("a", "A", ""), Timeline::new("b", "B", "")]);
/// assert!(merged.id.starts_with("merged-"));
/// assert_eq!(merged.name, "Merged Timeline");
/// ```
pub fn merge_timelines(timelines: &[Timeline]) -> Timeline {
    let mut merged = Timeline::new(
        format!("merged-{}", Uuid::now_v7()),
        MERGED_NAME,
        MERGED_DESCRIPTION,
    );

    let mut seen_sources: HashSet<&str> = HashSet::new();
    let mut event_positions: HashMap<&str, usize> = HashMap::new();
    let mut duplicate_events = 0usize;

    for timeline in timelines {
        for source in &timeline.sources {
            if seen_sources.insert(source.id.as_str()) {
                merged.sources.push(Arc::clone(source));
            }
        }

        for event in &timeline.events {
            match event_positions.get(event.id.as_str()) {
                Some(&position) => {
                    debug!(
                        "Event '{}' from '{}' already merged, appending {} source(s)",
                        event.id,
                        timeline.id,
                        event.sources.len()
                    );
                    merged.events[position]
                        .sources
                        .extend(event.sources.iter().cloned());
                    duplicate_events += 1;
                }
                None => {
                    event_positions.insert(event.id.as_str(), merged.events.len());
                    merged.events.push(event.clone());
                }
            }
        }
    }

    info!(
        timelines = timelines.len(),
        events = merged.events.len(),
        sources = merged.sources.len(),
        duplicate_events,
        "Merged timelines"
    );

    merged
}
