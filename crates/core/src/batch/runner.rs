//! Sequential batch execution.

use tracing::{debug, info, warn};

use crate::batch::planner::PlannedFile;
use crate::batch::types::{BatchSummary, FileOutcome};
use crate::frontmatter::{self, MergeOutcome};
use crate::link::resolve_value;
use crate::storage::Storage;

/// A batch request: the property to fill and the value to insert.
#[derive(Debug, Clone)]
pub struct PropertyEdit {
    pub property: String,
    /// Explicit link token. `None` derives `[[<folder>]]` per file.
    pub value: Option<String>,
}

/// Run the plan in order: read, merge, write, one file at a time.
///
/// Each file's merge is attempted independently; a failure is recorded in
/// the summary and the batch moves on. Files already written stay written.
pub fn run<S: Storage>(
    storage: &S,
    plan: &[PlannedFile],
    edit: &PropertyEdit,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for file in plan {
        let outcome = run_one(storage, file, edit);
        match &outcome {
            FileOutcome::Updated => {
                info!(path = %file.path.display(), property = %edit.property, "property added");
            }
            FileOutcome::Failed(msg) => {
                warn!(path = %file.path.display(), %msg, "file skipped");
            }
            _ => debug!(path = %file.path.display(), "no write needed"),
        }
        summary.record(file.path.clone(), outcome);
    }

    summary
}

fn run_one<S: Storage>(storage: &S, file: &PlannedFile, edit: &PropertyEdit) -> FileOutcome {
    // Value resolution comes first so a file with no derivable link is
    // rejected before anything is read or written.
    let value = match resolve_value(
        edit.value.as_deref(),
        file.derive_folder.as_deref(),
        &file.path,
    ) {
        Ok(v) => v,
        Err(e) => return FileOutcome::Failed(e.to_string()),
    };

    let text = match storage.read(&file.path) {
        Ok(t) => t,
        Err(e) => return FileOutcome::Failed(format!("read failed: {e}")),
    };

    let span = frontmatter::locate(&text);
    match frontmatter::merge(&text, span.as_ref(), &edit.property, &value) {
        Ok(MergeOutcome::Updated(new_text)) => match storage.write(&file.path, &new_text) {
            Ok(()) => FileOutcome::Updated,
            Err(e) => FileOutcome::Failed(format!("write failed: {e}")),
        },
        Ok(MergeOutcome::AlreadyPresent) => FileOutcome::AlreadyPresent,
        Ok(MergeOutcome::InlineFormat) => FileOutcome::InlineSkipped,
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::planner::PlannedFile;
    use std::fs;
    use tempfile::TempDir;

    use crate::storage::FsStorage;

    fn planned(path: std::path::PathBuf) -> PlannedFile {
        PlannedFile { derive_folder: path.parent().map(Into::into), path }
    }

    #[test]
    fn missing_context_fails_before_any_read() {
        let edit = PropertyEdit { property: "related_notes".into(), value: None };
        let file = PlannedFile { path: "orphan.md".into(), derive_folder: None };

        let summary = run(&FsStorage, &[file], &edit);
        assert_eq!(summary.failed(), 1);
        assert!(matches!(&summary.reports[0].outcome, FileOutcome::Failed(m) if m.contains("parent folder")));
    }

    #[test]
    fn one_bad_file_does_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.md");
        let gone = dir.path().join("gone.md");
        fs::write(&good, "# Good").unwrap();

        let edit =
            PropertyEdit { property: "related_notes".into(), value: Some("[[X]]".into()) };
        let plan = [planned(gone), planned(good.clone())];

        let summary = run(&FsStorage, &plan, &edit);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.updated(), 1);

        let text = fs::read_to_string(&good).unwrap();
        assert!(text.starts_with("---\nrelated_notes:\n  - \"[[X]]\"\n---\n"));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let note = dir.path().join("note.md");
        fs::write(&note, "---\ntitle: T\n---\nbody").unwrap();

        let edit =
            PropertyEdit { property: "related_notes".into(), value: Some("[[X]]".into()) };
        let plan = [planned(note.clone())];

        let first = run(&FsStorage, &plan, &edit);
        assert_eq!(first.updated(), 1);
        let after_first = fs::read_to_string(&note).unwrap();

        let second = run(&FsStorage, &plan, &edit);
        assert_eq!(second.already_present(), 1);
        assert_eq!(fs::read_to_string(&note).unwrap(), after_first);
    }

    #[test]
    fn derived_value_uses_each_files_folder() {
        let dir = TempDir::new().unwrap();
        let note = dir.path().join("note.md");
        fs::write(&note, "body").unwrap();

        let edit = PropertyEdit { property: "related_notes".into(), value: None };
        let summary = run(&FsStorage, &[planned(note.clone())], &edit);
        assert_eq!(summary.updated(), 1);

        let text = fs::read_to_string(&note).unwrap();
        let expected = format!("  - \"[[{}]]\"", dir.path().display());
        assert!(text.contains(&expected), "derived link missing in {text}");
    }
}
