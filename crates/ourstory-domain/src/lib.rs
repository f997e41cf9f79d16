//! OurStory Domain Layer
//!
//! This crate contains the data model shared by every other OurStory crate:
//! sources, events, contradictions and timelines, plus the date normalizer
//! that turns free-text era markers into comparable instants.
//!
//! ## Key Concepts
//!
//! - **Timeline**: A named collection of historical events and their sources
//! - **Source**: A citation describing provenance and reliability
//! - **Historical Event**: A dated, sourced, tagged occurrence
//! - **Contradiction**: A detected inconsistency between two events
//! - **Date Marker**: A calendar instant or an era string such as `"9600 BCE"`
//!
//! ## Architecture
//!
//! - Only `chrono` and `serde` as external dependencies
//! - Pure data and pure functions, no I/O
//! - Trait definitions for the data-package boundary live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chronology;
pub mod contradiction;
pub mod event;
pub mod source;
pub mod timeline;
pub mod traits;

// Re-exports for convenience
pub use chronology::{
    normalize, normalize_str, years_between, DateMarker, DateRange, NormalizedDate, MAX_CONFIDENCE,
};
pub use contradiction::{Contradiction, ContradictionType, Severity};
pub use event::{Coordinates, HistoricalEvent, Location};
pub use source::{Source, SourceReliability, SourceType};
pub use timeline::Timeline;
