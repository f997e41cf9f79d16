//! OurStory Timeline Engine
//!
//! Combines timelines and scans them for overlapping, similarly titled
//! events.
//!
//! The engine provides:
//! - Timeline merging (first-wins sources, source concatenation on duplicate events)
//! - Event insertion with stable chronological re-sorting
//! - Date-range, source-type and tag filters
//! - All-pairs overlap scan for interpretation conflicts
//!
//! # Examples
//!
//! ```
//! use ourstory_domain::Timeline;
//! use ourstory_engine::TimelineEngine;
//!
//! let religious = Timeline::new("religious", "Religious Texts", "");
//! let ancient = Timeline::new("ancient", "Ancient Civilizations", "");
//!
//! let merged = TimelineEngine::merge_timelines(&[religious, ancient]);
//! let engine = TimelineEngine::new(merged);
//! assert!(engine.find_contradictions().is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod merge;
mod overlap;

pub use config::EngineConfig;
pub use engine::TimelineEngine;
pub use merge::{merge_timelines, MERGED_DESCRIPTION, MERGED_NAME};
pub use overlap::{detect_interpretation_conflict, events_overlap, find_overlap_contradictions, title_similarity};
