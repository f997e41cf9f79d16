//! Timeline command implementation.

use crate::cli::TimelineArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ourstory_domain::{normalize_str, HistoricalEvent};
use ourstory_engine::TimelineEngine;
use std::collections::HashSet;

fn ids<'a>(events: Vec<&'a HistoricalEvent>) -> HashSet<&'a str> {
    events.into_iter().map(|event| event.id.as_str()).collect()
}

/// Render the timeline command output.
///
/// Filters combine: an event is listed only if it passes every filter given.
pub fn run_timeline(args: &TimelineArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    // Unparseable bounds would silently match nothing
    for bound in [&args.from, &args.to].into_iter().flatten() {
        if !normalize_str(bound).is_valid() {
            return Err(CliError::InvalidInput(format!("Unrecognized date: {}", bound)));
        }
    }

    let timeline = super::load_merged(&args.packages, config)?;
    let engine = TimelineEngine::with_config(timeline, config.engine.clone());
    let mut events = engine.sorted_events();

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let in_range = ids(engine.filter_by_date_range(from.as_str(), to.as_str()));
        events.retain(|event| in_range.contains(event.id.as_str()));
    }

    if !args.tags.is_empty() {
        let tagged = ids(engine.events_by_tags(&args.tags));
        events.retain(|event| tagged.contains(event.id.as_str()));
    }

    if let Some(source_type) = args.source_type {
        let cited = ids(engine.filter_by_source_type(source_type));
        events.retain(|event| cited.contains(event.id.as_str()));
    }

    formatter.format_events(&events)
}

/// Execute the timeline command.
pub fn execute_timeline(args: TimelineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_timeline(&args, config, formatter)?);
    Ok(())
}
