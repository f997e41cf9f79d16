//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ourstory_catalog::{AgentTopic, StoryAgent};
use ourstory_domain::{Contradiction, HistoricalEvent, Severity, Timeline};
use ourstory_tracker::ContradictionSummary;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

#[derive(Serialize)]
struct Analysis<'a> {
    events: usize,
    sources: usize,
    contradictions: &'a [Contradiction],
    summary: &'a ContradictionSummary,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format contradictions followed by their summary and the size of
    /// the analyzed timeline.
    pub fn format_analysis(
        &self,
        timeline: &Timeline,
        contradictions: &[Contradiction],
        summary: &ContradictionSummary,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Analysis {
                events: timeline.events.len(),
                sources: timeline.sources.len(),
                contradictions,
                summary,
            })?),
            OutputFormat::Table => {
                let table = self.format_contradictions(contradictions)?;
                Ok(format!(
                    "{}\n\nEvents: {} / Sources: {}\n{}",
                    table,
                    timeline.events.len(),
                    timeline.sources.len(),
                    self.summary_text(summary)
                ))
            }
            OutputFormat::Quiet => self.format_contradictions(contradictions),
        }
    }

    /// Format contradictions output.
    pub fn format_contradictions(&self, contradictions: &[Contradiction]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(contradictions)?),
            OutputFormat::Table => Ok(self.contradictions_table(contradictions)),
            OutputFormat::Quiet => Ok(join_ids(contradictions.iter().map(|c| c.id.as_str()))),
        }
    }

    fn contradictions_table(&self, contradictions: &[Contradiction]) -> String {
        if contradictions.is_empty() {
            return self.colorize("No contradictions found.", "green");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Type", "Severity", "Event", "Conflicts With", "Description"]);

        for contradiction in contradictions {
            let kind = contradiction.contradiction_type.label();
            builder.push_record([
                contradiction.id.as_str(),
                kind.as_str(),
                contradiction.severity.as_str(),
                contradiction.event_id.as_str(),
                contradiction.conflicting_event_id.as_deref().unwrap_or("-"),
                contradiction.description.as_str(),
            ]);
        }

        styled(builder)
    }

    /// Plain-text summary with severity colors.
    fn summary_text(&self, summary: &ContradictionSummary) -> String {
        let mut lines = vec![format!("Total: {}", summary.total)];

        for (kind, count) in &summary.by_type {
            lines.push(format!("  {}: {}", kind.label(), count));
        }
        for (severity, count) in summary.by_severity.iter().rev() {
            lines.push(format!("  {}: {}", self.severity(*severity), count));
        }

        lines.join("\n")
    }

    /// Format events (already in display order).
    pub fn format_events(&self, events: &[&HistoricalEvent]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            OutputFormat::Table => Ok(self.events_table(events)),
            OutputFormat::Quiet => Ok(join_ids(events.iter().map(|e| e.id.as_str()))),
        }
    }

    fn events_table(&self, events: &[&HistoricalEvent]) -> String {
        if events.is_empty() {
            return self.colorize("No events found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Start", "End", "ID", "Title", "Location", "Tags", "Sources"]);

        for event in events {
            let start = event.date_range.start.to_string();
            let end = event
                .date_range
                .end
                .as_ref()
                .map(|end| end.to_string())
                .unwrap_or_else(|| "-".to_string());
            let location = event.location.as_ref().map(|l| l.name.as_str()).unwrap_or("-");
            let sources: Vec<&str> = event.sources.iter().map(|s| s.id.as_str()).collect();

            builder.push_record([
                start.as_str(),
                end.as_str(),
                event.id.as_str(),
                event.title.as_str(),
                location,
                event.tags.join(", ").as_str(),
                sources.join(", ").as_str(),
            ]);
        }

        styled(builder)
    }

    /// Format agents.
    pub fn format_agents(&self, agents: &[&StoryAgent]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(agents)?),
            OutputFormat::Table => Ok(self.agents_table(agents)),
            OutputFormat::Quiet => Ok(join_ids(agents.iter().map(|a| a.id.as_str()))),
        }
    }

    fn agents_table(&self, agents: &[&StoryAgent]) -> String {
        if agents.is_empty() {
            return self.colorize("No agents found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Codename", "Name", "Specialization", "Topics"]);

        for agent in agents {
            let topics = agent.research_topics.len().to_string();
            builder.push_record([
                agent.id.as_str(),
                agent.codename.as_str(),
                agent.name.as_str(),
                agent.specialization.as_str(),
                topics.as_str(),
            ]);
        }

        styled(builder)
    }

    /// Format research topics with their agents.
    pub fn format_topics(&self, topics: &[AgentTopic<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(topics)?),
            OutputFormat::Table => Ok(self.topics_table(topics)),
            OutputFormat::Quiet => Ok(join_ids(topics.iter().map(|t| t.topic.id.as_str()))),
        }
    }

    fn topics_table(&self, topics: &[AgentTopic<'_>]) -> String {
        if topics.is_empty() {
            return self.colorize("No research topics found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Agent", "Topic", "Name", "Status", "Period"]);

        for entry in topics {
            let period = match &entry.topic.date_range {
                Some(range) => match &range.end {
                    Some(end) => format!("{} - {}", range.start, end),
                    None => range.start.to_string(),
                },
                None => "-".to_string(),
            };
            builder.push_record([
                entry.agent_codename,
                entry.topic.id.as_str(),
                entry.topic.name.as_str(),
                entry.topic.status.as_str(),
                period.as_str(),
            ]);
        }

        styled(builder)
    }

    /// Severity name colored by level: major red, moderate yellow, minor blue.
    pub fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Major => "red",
            Severity::Moderate => "yellow",
            Severity::Minor => "blue",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ourstory_domain::{ContradictionType, DateRange, Source, SourceReliability, SourceType};
    use std::sync::Arc;

    fn contradiction(id: &str, severity: Severity) -> Contradiction {
        Contradiction {
            id: id.to_string(),
            event_id: "flood-noah".to_string(),
            conflicting_event_id: Some("flood-gilgamesh".to_string()),
            description: "Date conflict: Events differ by 552 years".to_string(),
            sources: vec![],
            contradiction_type: ContradictionType::DateConflict,
            severity,
        }
    }

    #[test]
    fn test_contradictions_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_contradictions(&[contradiction("c1", Severity::Major)])
            .unwrap();
        assert!(output.contains("Conflicts With"));
        assert!(output.contains("flood-gilgamesh"));
        assert!(output.contains("date conflict"));
    }

    #[test]
    fn test_empty_contradictions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_contradictions(&[]).unwrap(), "No contradictions found.");
    }

    #[test]
    fn test_quiet_lists_ids() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_contradictions(&[contradiction("c1", Severity::Major), contradiction("c2", Severity::Minor)])
            .unwrap();
        assert_eq!(output, "c1\nc2");
    }

    fn flood_timeline() -> Timeline {
        let source = Arc::new(Source::new(
            "tablets",
            "Gilgamesh Tablets",
            SourceType::Archaeological,
            SourceReliability::Primary,
        ));
        let mut timeline = Timeline::new("merged", "Merged Timeline", "");
        timeline.sources = vec![Arc::clone(&source)];
        timeline.events = vec![
            HistoricalEvent::new("flood-noah", "Great Flood", "", DateRange::new("2348 BCE"), vec![Arc::clone(&source)]),
            HistoricalEvent::new("flood-gilgamesh", "Great Flood", "", DateRange::new("2900 BCE"), vec![source]),
        ];
        timeline
    }

    #[test]
    fn test_analysis_json_shape() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let contradictions = vec![contradiction("c1", Severity::Major)];
        let summary = ContradictionSummary::from_contradictions(&contradictions);

        let output = formatter
            .format_analysis(&flood_timeline(), &contradictions, &summary)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["events"], 2);
        assert_eq!(json["sources"], 1);
        assert_eq!(json["contradictions"][0]["type"], "date_conflict");
        assert_eq!(json["summary"]["total"], 1);
    }

    #[test]
    fn test_analysis_table_has_summary() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let contradictions = vec![contradiction("c1", Severity::Major), contradiction("c2", Severity::Moderate)];
        let summary = ContradictionSummary::from_contradictions(&contradictions);

        let output = formatter
            .format_analysis(&flood_timeline(), &contradictions, &summary)
            .unwrap();
        assert!(output.contains("Events: 2 / Sources: 1"));
        assert!(output.contains("Total: 2"));
        assert!(output.contains("major: 1"));
        assert!(output.contains("moderate: 1"));
    }

    #[test]
    fn test_events_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let event = HistoricalEvent::new(
            "exodus",
            "Exodus from Egypt",
            "",
            DateRange::new("1446 BCE").with_end("1406 BCE"),
            vec![],
        )
        .with_tags(["exodus", "egypt"]);

        let output = formatter.format_events(&[&event]).unwrap();
        assert!(output.contains("1446 BCE"));
        assert!(output.contains("1406 BCE"));
        assert!(output.contains("exodus, egypt"));
    }

    #[test]
    fn test_severity_plain_without_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.severity(Severity::Major), "major");
        assert_eq!(formatter.severity(Severity::Minor), "minor");
    }

    #[test]
    fn test_severity_colored() {
        colored::control::set_override(true);
        let formatter = Formatter::new(OutputFormat::Table, true);
        assert_eq!(formatter.severity(Severity::Major), "major".red().to_string());
        assert_ne!(formatter.severity(Severity::Major), "major");
        colored::control::unset_override();
    }
}
