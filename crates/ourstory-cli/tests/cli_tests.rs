//! Integration tests for ourstory-cli
//!
//! These tests drive the command implementations against packages written
//! to temporary directories and against the bundled sample data.

use ourstory_cli::cli::{AgentsArgs, AnalyzeArgs, OverlapsArgs, PackageArgs, TimelineArgs};
use ourstory_cli::commands::{agents, analyze, overlaps, timeline};
use ourstory_cli::config::OutputFormat;
use ourstory_cli::{CliError, Config, Formatter};
use ourstory_domain::SourceType;
use std::fs;
use std::path::{Path, PathBuf};

const MAINSTREAM: &str = r#"{
    "id": "mainstream",
    "name": "Mainstream",
    "sources": [
        { "id": "kjv", "name": "King James Bible", "type": "religious", "reliability": "primary" },
        { "id": "tablets", "name": "Gilgamesh Tablets", "type": "archaeological", "reliability": "primary" }
    ],
    "events": [
        {
            "id": "flood-noah",
            "title": "Great Flood",
            "description": "Noah and the ark",
            "dateRange": { "start": "2348 BCE", "end": "2347 BCE" },
            "sources": ["kjv"],
            "tags": ["flood", "catastrophe"],
            "location": { "name": "Mount Ararat" }
        },
        {
            "id": "flood-gilgamesh",
            "title": "Great Flood",
            "description": "Utnapishtim survives",
            "dateRange": { "start": "2900 BCE", "end": "2300 BCE" },
            "sources": ["tablets"],
            "tags": ["flood", "catastrophe"],
            "location": { "name": "Shuruppak" },
            "contradictions": [
                {
                    "id": "authored-flood",
                    "description": "Two flood heroes",
                    "sources": ["tablets"],
                    "type": "existence_conflict",
                    "severity": "minor"
                }
            ]
        }
    ]
}"#;

const ALTERNATIVE: &str = r#"
id = "alternative"
name = "Alternative"

[[sources]]
id = "hancock"
name = "Fingerprints of the Gods"
type = "alternative"
reliability = "contested"

[[events]]
id = "younger-dryas"
title = "Younger Dryas Impact"
dateRange = { start = "10900 BCE" }
sources = ["hancock"]
tags = ["impact"]

[[events]]
id = "flood-noah"
title = "Great Flood"
dateRange = { start = "10900 BCE" }
sources = ["hancock"]
"#;

fn write_packages(dir: &Path) -> Vec<PathBuf> {
    let mainstream = dir.join("mainstream.json");
    let alternative = dir.join("alternative.toml");
    fs::write(&mainstream, MAINSTREAM).unwrap();
    fs::write(&alternative, ALTERNATIVE).unwrap();
    vec![mainstream, alternative]
}

fn quiet() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

#[test]
fn test_analyze_reports_group_contradictions() {
    let dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        packages: PackageArgs {
            packages: write_packages(dir.path()),
        },
        include_authored: false,
    };

    let output = analyze::run_analyze(&args, &Config::default(), &quiet()).unwrap();
    assert_eq!(
        lines(&output),
        vec!["date-conflict-flood-noah-flood-gilgamesh", "location-conflict-flood-noah-flood-gilgamesh"]
    );
}

#[test]
fn test_analyze_includes_authored_contradictions() {
    let dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        packages: PackageArgs {
            packages: write_packages(dir.path()),
        },
        include_authored: true,
    };

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = analyze::run_analyze(&args, &Config::default(), &formatter).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    // flood-noah appears in both packages and is merged once
    assert_eq!(json["events"], 3);
    assert_eq!(json["sources"], 3);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["byType"]["existence_conflict"], 1);
    assert_eq!(json["summary"]["bySeverity"]["major"], 1);
    assert_eq!(json["contradictions"][2]["id"], "authored-flood");
}

#[test]
fn test_merge_keeps_first_definition() {
    let dir = tempfile::tempdir().unwrap();
    let args = TimelineArgs {
        packages: PackageArgs {
            packages: write_packages(dir.path()),
        },
        from: None,
        to: None,
        tags: vec![],
        source_type: None,
    };

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = timeline::run_timeline(&args, &Config::default(), &formatter).unwrap();
    let events: serde_json::Value = serde_json::from_str(&output).unwrap();

    // Display order: 10900 BCE, 2900 BCE, 2348 BCE
    let ids: Vec<&str> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["younger-dryas", "flood-gilgamesh", "flood-noah"]);

    let noah = &events[2];
    assert_eq!(noah["dateRange"]["start"], "2348 BCE");
    assert_eq!(noah["sources"][0]["id"], "kjv");
    assert_eq!(noah["sources"][1]["id"], "hancock");
}

#[test]
fn test_timeline_filters_combine() {
    let dir = tempfile::tempdir().unwrap();
    let packages = PackageArgs {
        packages: write_packages(dir.path()),
    };

    let args = TimelineArgs {
        packages: packages.clone(),
        from: Some("3000 BCE".to_string()),
        to: Some("2000 BCE".to_string()),
        tags: vec!["flood".to_string()],
        source_type: Some(SourceType::Archaeological),
    };
    let output = timeline::run_timeline(&args, &Config::default(), &quiet()).unwrap();
    assert_eq!(lines(&output), vec!["flood-gilgamesh"]);

    let args = TimelineArgs {
        packages,
        from: None,
        to: None,
        tags: vec![],
        source_type: Some(SourceType::Alternative),
    };
    let output = timeline::run_timeline(&args, &Config::default(), &quiet()).unwrap();
    assert_eq!(lines(&output), vec!["younger-dryas", "flood-noah"]);
}

#[test]
fn test_timeline_rejects_unparseable_bound() {
    let dir = tempfile::tempdir().unwrap();
    let args = TimelineArgs {
        packages: PackageArgs {
            packages: write_packages(dir.path()),
        },
        from: Some("the dawn of time".to_string()),
        to: Some("1947".to_string()),
        tags: vec![],
        source_type: None,
    };

    let result = timeline::run_timeline(&args, &Config::default(), &quiet());
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_overlaps_uses_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let packages = PackageArgs {
        packages: write_packages(dir.path()),
    };

    // Identical titles, overlapping spans, different descriptions
    let args = OverlapsArgs {
        packages: packages.clone(),
        threshold: None,
    };
    let output = overlaps::run_overlaps(&args, &Config::default(), &quiet()).unwrap();
    assert_eq!(lines(&output), vec!["contradiction-flood-noah-flood-gilgamesh"]);

    let args = OverlapsArgs {
        packages,
        threshold: Some(1.5),
    };
    let result = overlaps::run_overlaps(&args, &Config::default(), &quiet());
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_no_packages_is_error() {
    let args = AnalyzeArgs {
        packages: PackageArgs::default(),
        include_authored: false,
    };
    let result = analyze::run_analyze(&args, &Config::default(), &quiet());
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_config_file_drives_commands() {
    let dir = tempfile::tempdir().unwrap();
    write_packages(dir.path());
    let config_path = dir.path().join("ourstory.toml");
    fs::write(
        &config_path,
        r#"
        [catalog]
        packages = ["mainstream.json", "alternative.toml"]

        [tracker]
        date_conflict_min_years = 1000.0
        "#,
    )
    .unwrap();

    let config = Config::load(Some(config_path.as_path())).unwrap();
    let args = AnalyzeArgs {
        packages: PackageArgs::default(),
        include_authored: false,
    };
    let output = analyze::run_analyze(&args, &config, &quiet()).unwrap();

    // 552 years is now within tolerance
    assert_eq!(lines(&output), vec!["location-conflict-flood-noah-flood-gilgamesh"]);
}

#[test]
fn test_agents_lookups() {
    let registry = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/agents.json");
    let config = Config::default();

    let args = AgentsArgs {
        registry: Some(registry.clone()),
        id: None,
        codename: Some("atlantis".to_string()),
        specialization: None,
        topics: true,
    };
    let output = agents::run_agents(&args, &config, &quiet()).unwrap();
    assert_eq!(lines(&output), vec!["topic-younger-dryas-001", "topic-gobekli-001"]);

    let args = AgentsArgs {
        registry: Some(registry.clone()),
        id: None,
        codename: None,
        specialization: None,
        topics: false,
    };
    let output = agents::run_agents(&args, &config, &quiet()).unwrap();
    assert_eq!(lines(&output), vec!["agent-atlantis-004", "agent-majestic-007"]);

    let args = AgentsArgs {
        registry: Some(registry),
        id: Some("agent-nobody".to_string()),
        codename: None,
        specialization: None,
        topics: false,
    };
    let result = agents::run_agents(&args, &config, &quiet());
    assert!(matches!(result, Err(CliError::NotFound(_))));
}

#[test]
fn test_agents_without_registry_is_error() {
    let args = AgentsArgs {
        registry: None,
        id: None,
        codename: None,
        specialization: None,
        topics: false,
    };
    let result = agents::run_agents(&args, &Config::default(), &quiet());
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_bundled_sample_analyzes() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    let config = Config::from_file(root.join("ourstory.toml")).unwrap();
    let args = AnalyzeArgs {
        packages: PackageArgs::default(),
        include_authored: true,
    };

    let formatter = Formatter::new(OutputFormat::Table, false);
    let output = analyze::run_analyze(&args, &config, &formatter).unwrap();
    assert!(output.contains("Events: "));
    assert!(output.contains("Total:"));
    assert!(output.contains("sphinx-erosion-vs-khafre"));
}
