//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use ourstory_catalog::AgentSpecialization;
use ourstory_domain::SourceType;
use std::path::PathBuf;

/// OurStory - merge historical timelines and surface their contradictions.
#[derive(Debug, Parser)]
#[command(name = "ourstory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "OURSTORY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge packages and report contradictions between related events
    Analyze(AnalyzeArgs),

    /// List merged events in chronological order
    Timeline(TimelineArgs),

    /// Report similarly titled events that overlap in time
    Overlaps(OverlapsArgs),

    /// Browse the research agent registry
    Agents(AgentsArgs),
}

/// Package files to load; the configured packages are used when empty.
#[derive(Debug, Clone, Default, Args)]
pub struct PackageArgs {
    /// Package files (.json or .toml)
    pub packages: Vec<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub packages: PackageArgs,

    /// Also list contradictions written into the packages
    #[arg(long)]
    pub include_authored: bool,
}

/// Arguments for the timeline command.
#[derive(Debug, Args)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub packages: PackageArgs,

    /// Earliest start date (e.g., "3000 BCE", "1947-07-08")
    #[arg(long, requires = "to", allow_hyphen_values = true)]
    pub from: Option<String>,

    /// Latest start date
    #[arg(long, requires = "from", allow_hyphen_values = true)]
    pub to: Option<String>,

    /// Keep events carrying any of these tags
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Keep events citing a source of this type
    #[arg(short, long)]
    pub source_type: Option<SourceType>,
}

/// Arguments for the overlaps command.
#[derive(Debug, Args)]
pub struct OverlapsArgs {
    #[command(flatten)]
    pub packages: PackageArgs,

    /// Title similarity threshold, overriding the configured value
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the agents command.
#[derive(Debug, Args)]
pub struct AgentsArgs {
    /// Agent registry file, overriding the configured one
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Show the agent with this id
    #[arg(long, conflicts_with_all = ["codename", "specialization"])]
    pub id: Option<String>,

    /// Show the agent with this codename (case-insensitive)
    #[arg(long, conflicts_with = "specialization")]
    pub codename: Option<String>,

    /// Show agents with this specialization (e.g., ancient_mysteries)
    #[arg(long)]
    pub specialization: Option<AgentSpecialization>,

    /// List research topics instead of agents
    #[arg(long)]
    pub topics: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["ourstory", "analyze", "a.json", "b.toml", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(CliFormat::Json));
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.packages.packages, vec![PathBuf::from("a.json"), PathBuf::from("b.toml")]);
                assert!(!args.include_authored);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_timeline_filters() {
        let cli = Cli::try_parse_from([
            "ourstory",
            "timeline",
            "--from",
            "3000 BCE",
            "--to",
            "1000 BCE",
            "--tag",
            "egypt",
            "--tag",
            "flood",
            "--source-type",
            "oral_tradition",
        ])
        .unwrap();

        match cli.command {
            Command::Timeline(args) => {
                assert_eq!(args.from.as_deref(), Some("3000 BCE"));
                assert_eq!(args.to.as_deref(), Some("1000 BCE"));
                assert_eq!(args.tags, vec!["egypt", "flood"]);
                assert_eq!(args.source_type, Some(SourceType::OralTradition));
                assert!(args.packages.packages.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_from_requires_to() {
        assert!(Cli::try_parse_from(["ourstory", "timeline", "--from", "1947"]).is_err());
    }

    #[test]
    fn test_bad_source_type_rejected() {
        assert!(Cli::try_parse_from(["ourstory", "timeline", "--source-type", "rumor"]).is_err());
    }

    #[test]
    fn test_agent_lookups_conflict() {
        assert!(Cli::try_parse_from(["ourstory", "agents", "--id", "a", "--codename", "b"]).is_err());

        let cli = Cli::try_parse_from(["ourstory", "agents", "--specialization", "ufo_disclosure"]).unwrap();
        match cli.command {
            Command::Agents(args) => {
                assert_eq!(args.specialization, Some(AgentSpecialization::UfoDisclosure));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ourstory", "overlaps", "--no-color", "--config", "x.toml"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
