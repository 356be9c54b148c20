//! CLI presentation: summaries after a walk or fixture run.

use crate::error::RmcharsError;
use crate::fixture::FixtureSummary;
use crate::report::{Outcome, ReportEntry, ReportSummary, RunReport};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    summary: ReportSummary,
    entries: &'a [ReportEntry],
}

/// Summary table followed by any nodes that were skipped or would fail.
///
/// ANSI styling is only applied when `color` is set.
pub fn format_report_text(report: &RunReport, color: bool) -> String {
    let summary = report.summary();
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Scanned", "Invalid", "Renamed", "Would rename", "Declined", "Skipped", "Would fail"]);
    table.add_row(vec![
        summary.scanned.to_string(),
        summary.invalid.to_string(),
        summary.renamed.to_string(),
        summary.would_rename.to_string(),
        summary.declined.to_string(),
        summary.skipped.to_string(),
        summary.would_fail.to_string(),
    ]);

    let root = report.root.display().to_string();
    let mut out = if color {
        format!("{}\n{}", root.bold(), table)
    } else {
        format!("{}\n{}", root, table)
    };
    for entry in &report.entries {
        let (label, reason) = match entry.outcome {
            Outcome::Skipped(reason) => ("skipped", reason),
            Outcome::WouldFail(reason) => ("would fail", reason),
            _ => continue,
        };
        let label = if color {
            label.yellow().to_string()
        } else {
            label.to_string()
        };
        out.push_str(&format!(
            "\n{} {} ({})",
            label,
            entry.from.display(),
            reason.describe()
        ));
    }
    out
}

pub fn format_report_json(report: &RunReport) -> Result<String, RmcharsError> {
    let json = JsonReport {
        root: &report.root,
        summary: report.summary(),
        entries: &report.entries,
    };
    serde_json::to_string_pretty(&json)
        .map_err(|e| RmcharsError::Config(format!("Failed to serialize report: {}", e)))
}

pub fn format_fixture_summary(root: &Path, summary: &FixtureSummary) -> String {
    format!(
        "Created {} directories and {} files under {}",
        summary.directories,
        summary.files,
        root.display()
    )
}
