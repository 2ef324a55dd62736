//! Tagged file/folder references.

use std::io;
use std::path::{Path, PathBuf};

/// A batch target: a single file or a folder scope.
///
/// The variant is fixed at construction from filesystem metadata, so
/// downstream code branches on the tag instead of re-inspecting the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    File(PathBuf),
    Folder(PathBuf),
}

impl TargetRef {
    /// Classify a path by its filesystem metadata.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let meta = path.metadata()?;
        if meta.is_dir() {
            Ok(Self::Folder(path.to_path_buf()))
        } else {
            Ok(Self::File(path.to_path_buf()))
        }
    }

    /// Whether this reference points at a markdown file. Folders never
    /// qualify, whatever their name.
    pub fn is_markdown_file(&self) -> bool {
        match self {
            Self::File(p) => {
                p.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
            }
            Self::Folder(_) => false,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Folder(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classifies_file_and_folder() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("note.md"), "# Note").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let file = TargetRef::from_path(&dir.path().join("note.md")).unwrap();
        let folder = TargetRef::from_path(&dir.path().join("sub")).unwrap();

        assert!(matches!(file, TargetRef::File(_)));
        assert!(matches!(folder, TargetRef::Folder(_)));
    }

    #[test]
    fn markdown_capability_query() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("note.md"), "").unwrap();
        fs::write(dir.path().join("data.txt"), "").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        assert!(TargetRef::from_path(&dir.path().join("note.md")).unwrap().is_markdown_file());
        assert!(!TargetRef::from_path(&dir.path().join("data.txt")).unwrap().is_markdown_file());
        assert!(!TargetRef::from_path(&dir.path().join("folder.md")).unwrap().is_markdown_file());
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(TargetRef::from_path(Path::new("/nonexistent/nowhere.md")).is_err());
    }
}
