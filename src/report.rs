//! Run report: what happened to every invalid node visited during one pass.

use crate::sanitize::PathPair;
use serde::Serialize;
use std::path::PathBuf;

/// Why a rename was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The sanitized target already exists.
    TargetExists,
    /// Nothing was left of the name after sanitization.
    EmptyName,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::TargetExists => "target exists",
            SkipReason::EmptyName => "empty name",
        }
    }
}

/// Result of dispatching one invalid node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Renamed,
    WouldRename,
    Declined,
    Skipped(SkipReason),
    /// Dry run only: the `fail` policy would abort here.
    WouldFail(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub from: PathBuf,
    pub to: PathBuf,
    pub outcome: Outcome,
}

/// Counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub scanned: usize,
    pub invalid: usize,
    pub renamed: usize,
    pub would_rename: usize,
    pub declined: usize,
    pub skipped: usize,
    pub would_fail: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub scanned: usize,
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            scanned: 0,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, pair: &PathPair, outcome: Outcome) {
        self.entries.push(ReportEntry {
            from: pair.old.clone(),
            to: pair.new.clone(),
            outcome,
        });
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            scanned: self.scanned,
            invalid: self.entries.len(),
            ..ReportSummary::default()
        };
        for entry in &self.entries {
            match entry.outcome {
                Outcome::Renamed => summary.renamed += 1,
                Outcome::WouldRename => summary.would_rename += 1,
                Outcome::Declined => summary.declined += 1,
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::WouldFail(_) => summary.would_fail += 1,
            }
        }
        summary
    }
}
