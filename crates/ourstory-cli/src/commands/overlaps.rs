//! Overlaps command implementation.

use crate::cli::OverlapsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ourstory_engine::{EngineConfig, TimelineEngine};

/// Render the overlaps command output.
pub fn run_overlaps(args: &OverlapsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let engine_config = match args.threshold {
        Some(threshold) if !(0.0..=1.0).contains(&threshold) => {
            return Err(CliError::InvalidInput(
                "Threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        Some(threshold) => EngineConfig {
            similarity_threshold: threshold,
        },
        None => config.engine.clone(),
    };

    let timeline = super::load_merged(&args.packages, config)?;
    let engine = TimelineEngine::with_config(timeline, engine_config);

    formatter.format_contradictions(&engine.find_contradictions())
}

/// Execute the overlaps command.
pub fn execute_overlaps(args: OverlapsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_overlaps(&args, config, formatter)?);
    Ok(())
}
