//! OurStory Contradiction Tracker
//!
//! Finds contradictions between related events of a timeline.
//!
//! The tracker provides:
//! - Event grouping by shared tags or explicit related-event links
//! - Pairwise date-conflict and location-conflict checks within each group
//! - Contradiction summaries by type and severity
//!
//! # Examples
//!
//! ```
//! use ourstory_domain::Timeline;
//! use ourstory_tracker::{ContradictionTracker, TrackerConfig};
//!
//! let tracker = ContradictionTracker::new(TrackerConfig::default());
//! let contradictions = tracker.analyze_timeline(&Timeline::new("empty", "Empty", ""));
//! let summary = tracker.summarize(&contradictions);
//! assert_eq!(summary.total, 0);
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod grouping;
mod summary;
mod tracker;

pub use config::TrackerConfig;
pub use detector::{
    check_date_conflict, check_location_conflict, compare_events, describe_same_thing,
    find_group_contradictions,
};
pub use grouping::group_events;
pub use summary::ContradictionSummary;
pub use tracker::ContradictionTracker;
