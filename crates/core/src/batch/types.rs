//! Batch outcome accounting.

use serde::Serialize;
use std::path::PathBuf;

/// What happened to one file in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// A new entry was written.
    Updated,
    /// The entry already existed; file untouched.
    AlreadyPresent,
    /// The property holds an inline value the engine does not rewrite;
    /// file untouched.
    InlineSkipped,
    /// Read, merge, or write failed; the message is kept for the report.
    Failed(String),
}

/// One file's record in the batch report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Accumulated result of a batch run, in plan order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.reports.push(FileReport { path, outcome });
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated))
    }

    pub fn already_present(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::AlreadyPresent))
    }

    pub fn inline_skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::InlineSkipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// True when the batch attempted files and none succeeded in any form.
    pub fn all_failed(&self) -> bool {
        !self.reports.is_empty() && self.failed() == self.total()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_outcome() {
        let mut summary = BatchSummary::default();
        summary.record("a.md".into(), FileOutcome::Updated);
        summary.record("b.md".into(), FileOutcome::AlreadyPresent);
        summary.record("c.md".into(), FileOutcome::Failed("boom".into()));
        summary.record("d.md".into(), FileOutcome::Updated);

        assert_eq!(summary.updated(), 2);
        assert_eq!(summary.already_present(), 1);
        assert_eq!(summary.inline_skipped(), 0);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total(), 4);
        assert!(!summary.all_failed());
    }

    #[test]
    fn all_failed_requires_at_least_one_report() {
        let summary = BatchSummary::default();
        assert!(!summary.all_failed());

        let mut summary = BatchSummary::default();
        summary.record("a.md".into(), FileOutcome::Failed("boom".into()));
        assert!(summary.all_failed());
    }
}
