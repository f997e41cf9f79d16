//! Command implementations.
//!
//! Each command renders its output to a `String` (`run_*`) and the
//! `execute_*` wrapper prints it.

pub mod agents;
pub mod analyze;
pub mod overlaps;
pub mod timeline;

pub use self::agents::execute_agents;
pub use self::analyze::execute_analyze;
pub use self::overlaps::execute_overlaps;
pub use self::timeline::execute_timeline;

use crate::cli::PackageArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use ourstory_catalog::{load_packages, FilePackage};
use ourstory_domain::Timeline;
use ourstory_engine::merge_timelines;
use tracing::debug;

/// Load the packages named on the command line, or the configured ones,
/// and merge them in order.
pub(crate) fn load_merged(args: &PackageArgs, config: &Config) -> Result<Timeline> {
    let paths = if args.packages.is_empty() {
        &config.catalog.packages
    } else {
        &args.packages
    };

    if paths.is_empty() {
        return Err(CliError::InvalidInput(
            "No packages given. Pass package files or set [catalog] packages in ourstory.toml".to_string(),
        ));
    }

    let packages: Vec<FilePackage> = paths.iter().map(FilePackage::new).collect();
    let timelines = load_packages(&packages)?;
    debug!("Merging {} timeline(s)", timelines.len());

    Ok(merge_timelines(&timelines))
}
