//! OurStory CLI - merge historical timelines and report contradictions.

use clap::Parser;
use ourstory_cli::commands;
use ourstory_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ourstory_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter)?,
        Command::Timeline(args) => commands::execute_timeline(args, &config, &formatter)?,
        Command::Overlaps(args) => commands::execute_overlaps(args, &config, &formatter)?,
        Command::Agents(args) => commands::execute_agents(args, &config, &formatter)?,
    }

    Ok(())
}
