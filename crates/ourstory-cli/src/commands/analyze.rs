//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ourstory_tracker::ContradictionTracker;

/// Render the analyze command output.
pub fn run_analyze(args: &AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let timeline = super::load_merged(&args.packages, config)?;
    let tracker = ContradictionTracker::new(config.tracker.clone());

    let mut contradictions = tracker.analyze_timeline(&timeline);
    if args.include_authored {
        contradictions.extend(
            timeline
                .events
                .iter()
                .filter_map(|event| event.contradictions.as_ref())
                .flatten()
                .cloned(),
        );
    }

    let summary = tracker.summarize(&contradictions);
    formatter.format_analysis(&timeline, &contradictions, &summary)
}

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_analyze(&args, config, formatter)?);
    Ok(())
}
