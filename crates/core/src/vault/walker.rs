//! Folder-scope markdown discovery.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("folder does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk folder {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A discovered markdown file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the walked root.
    pub relative_path: PathBuf,
}

/// Walker for the markdown files under one folder scope.
///
/// Non-recursive by default: only the folder's immediate children are
/// enumerated, matching the narrow folder command. [`FolderWalker::recursive`]
/// widens the scope to every subfolder.
#[derive(Debug)]
pub struct FolderWalker {
    root: PathBuf,
    /// Folders to skip (relative paths from the root).
    excluded_folders: Vec<PathBuf>,
    recursive: bool,
}

impl FolderWalker {
    /// Create a new walker for the given folder.
    pub fn new(root: &Path) -> Result<Self, WalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Exclusions can be given relative to the root or absolute; absolute
    /// paths are rebased onto the root.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, WalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkerError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders, recursive: false })
    }

    /// Descend into subfolders instead of stopping at immediate children.
    #[must_use]
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Walk the scope and return its markdown files, sorted by relative
    /// path so batch order is deterministic.
    ///
    /// Hidden directories and common non-vault directories are skipped,
    /// along with the configured exclusions.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, WalkerError> {
        let mut files = Vec::new();

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                WalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Skip hidden files and directories
        if name.starts_with('.') {
            return true;
        }

        // Skip common non-vault directories
        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            for excluded in &self.excluded_folders {
                if relative.starts_with(excluded) {
                    return true;
                }
            }
        }

        false
    }

    /// Get the walked root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
