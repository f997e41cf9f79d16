//! Trait definitions for external interactions
//!
//! Data packages (hand-authored datasets per topic) sit outside the core.
//! They hand timelines to the engine through this boundary.

use crate::Timeline;

/// A named dataset of sources and events for one topic
///
/// Implemented by the catalog layer (ourstory-catalog)
pub trait DataPackage {
    /// Error type for load operations
    type Error;

    /// Stable package identifier
    fn id(&self) -> &str;

    /// Load the package as a timeline
    fn load(&self) -> Result<Timeline, Self::Error>;
}
