//! Scope expansion into an explicit work-list.
//!
//! The original folder recursion is flattened here: a target plus a
//! recursive flag maps to an ordered list of files, and the runner never
//! needs to know how the scope was shaped.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::vault::refs::TargetRef;
use crate::vault::walker::{FolderWalker, WalkerError};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("target is not a markdown file: {0}")]
    NotMarkdown(String),

    #[error(transparent)]
    Walk(#[from] WalkerError),
}

/// A file queued for merging, with the folder its link value derives from
/// when no explicit value was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub derive_folder: Option<PathBuf>,
}

/// Expand a target into the ordered list of files to merge.
///
/// A file target yields itself (markdown only); a folder target yields its
/// markdown children in the walker's sorted order, descending into
/// subfolders when `recursive` is set. The returned order is the batch
/// order, end to end.
pub fn plan(
    target: &TargetRef,
    recursive: bool,
    excluded: &[PathBuf],
) -> Result<Vec<PlannedFile>, PlanError> {
    match target {
        TargetRef::File(path) => {
            if !target.is_markdown_file() {
                return Err(PlanError::NotMarkdown(path.display().to_string()));
            }
            Ok(vec![PlannedFile {
                derive_folder: parent_of(path),
                path: path.clone(),
            }])
        }
        TargetRef::Folder(root) => {
            let walker = FolderWalker::with_exclusions(root, excluded.to_vec())?
                .recursive(recursive);
            let files = walker.walk()?;
            Ok(files
                .into_iter()
                .map(|f| PlannedFile {
                    derive_folder: parent_of(&f.absolute_path),
                    path: f.absolute_path,
                })
                .collect())
        }
    }
}

fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
