//! Contradiction summaries

use ourstory_domain::{Contradiction, ContradictionType, Severity};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tallies of contradictions by type and by severity
///
/// The two histograms are independent: each contradiction increments one
/// type bucket and one severity bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionSummary {
    /// Number of contradictions
    pub total: usize,

    /// Count per contradiction type
    pub by_type: BTreeMap<ContradictionType, usize>,

    /// Count per severity
    pub by_severity: BTreeMap<Severity, usize>,
}

impl ContradictionSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a list of contradictions
    pub fn from_contradictions(contradictions: &[Contradiction]) -> Self {
        let mut summary = Self::new();
        for contradiction in contradictions {
            summary.record(contradiction);
        }
        summary
    }

    /// Record a single contradiction
    pub fn record(&mut self, contradiction: &Contradiction) {
        self.total += 1;
        *self.by_type.entry(contradiction.contradiction_type).or_insert(0) += 1;
        *self.by_severity.entry(contradiction.severity).or_insert(0) += 1;
    }

    /// Count for one type (zero when absent)
    pub fn count_of_type(&self, contradiction_type: ContradictionType) -> usize {
        self.by_type.get(&contradiction_type).copied().unwrap_or(0)
    }

    /// Count for one severity (zero when absent)
    pub fn count_of_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Generate a plain-text report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "Contradiction Summary".to_string(),
            "=====================".to_string(),
            format!("Total: {}", self.total),
        ];

        if !self.by_type.is_empty() {
            lines.push(String::new());
            lines.push("By type:".to_string());
            for (kind, count) in &self.by_type {
                lines.push(format!("  {}: {}", kind.as_str(), count));
            }
        }

        if !self.by_severity.is_empty() {
            lines.push(String::new());
            lines.push("By severity:".to_string());
            // Most severe first
            for (severity, count) in self.by_severity.iter().rev() {
                lines.push(format!("  {}: {}", severity.as_str(), count));
            }
        }

        lines.join("\n")
    }
}
