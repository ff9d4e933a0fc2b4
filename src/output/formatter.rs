//! Output formatters for seed results
//!
//! Renders the run summary as a text table or JSON.

use crate::models::{RecordOutcome, RecordStatus, SeedSummary};
use crate::seeder::FixturePlan;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }

    /// Whether the summary is machine-readable JSON
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }
}

/// Summary formatter
pub struct SummaryFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl SummaryFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a seed run summary
    pub fn format_summary(&self, summary: &SeedSummary) -> String {
        match self.format {
            OutputFormat::Text => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
        }
    }

    fn status_label(&self, status: RecordStatus) -> &'static str {
        match (status, self.colorize) {
            (RecordStatus::Created, true) => "\x1b[32m✓ CREATED\x1b[0m",
            (RecordStatus::Failed, true) => "\x1b[31m✗ FAILED\x1b[0m",
            (RecordStatus::Skipped, true) => "\x1b[33m○ SKIPPED\x1b[0m",
            (RecordStatus::Created, false) => "✓ CREATED",
            (RecordStatus::Failed, false) => "✗ FAILED",
            (RecordStatus::Skipped, false) => "○ SKIPPED",
        }
    }

    fn format_outcome(&self, outcome: &RecordOutcome) -> String {
        let detail = match (&outcome.id, &outcome.message) {
            (Some(id), _) => format!("id {id}"),
            (None, Some(msg)) => msg.clone(),
            (None, None) => String::new(),
        };

        format!(
            "  {:11} {:20} {} {}",
            outcome.collection.endpoint(),
            outcome.label,
            self.status_label(outcome.status),
            detail
        )
        .trim_end()
        .to_string()
    }

    fn format_summary_table(&self, summary: &SeedSummary) -> String {
        let mut lines = vec![
            format!(
                "\nSeed Summary ({})",
                summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string(),
        ];
        lines.extend(summary.outcomes.iter().map(|o| self.format_outcome(o)));
        lines.push("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string());
        lines.push(summary.to_string());
        lines.join("\n")
    }
}

/// Render the fixture plan for `list`
pub fn format_plan(plan: &FixturePlan, detailed: bool) -> String {
    let mut lines = vec![format!("\nFixture Plan ({} records)\n", plan.record_count())];

    let mut step = 1;
    for batch in &plan.taxonomies {
        lines.push(format!(
            "  {}. {:10} POST {} ({} records)",
            step,
            batch.title,
            batch.collection.path(),
            batch.len()
        ));
        if detailed {
            lines.extend(batch.records.iter().map(|r| format!("       - {}", r.label)));
        }
        step += 1;
    }

    lines.push(format!(
        "  {}. {:10} POST /api/developers ({})",
        step, "developer", plan.developer.label
    ));
    lines.push(format!(
        "  {}. {:10} POST /api/games ({}, only if the developer was created)",
        step + 1,
        "game",
        plan.game_label
    ));

    lines.join("\n")
}
