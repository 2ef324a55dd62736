//! Link token formatting and value resolution.

use std::path::Path;
use thiserror::Error;

/// Property filled when the caller does not name one.
pub const DEFAULT_PROPERTY: &str = "related_notes";

#[derive(Debug, Error)]
pub enum LinkError {
    /// No explicit value and no containing folder to derive one from.
    #[error("no link value given and '{0}' has no parent folder to derive one from")]
    MissingContext(String),
}

/// Wrap a path in wiki-link syntax.
pub fn link_token(path: &Path) -> String {
    format!("[[{}]]", path.display())
}

/// Resolve the value to insert for one file.
///
/// A non-empty explicit link wins; otherwise the containing folder's path
/// is wrapped as a link. With neither available the file is rejected
/// before any read or write happens.
pub fn resolve_value(
    explicit: Option<&str>,
    folder: Option<&Path>,
    file: &Path,
) -> Result<String, LinkError> {
    match explicit {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => folder
            .map(link_token)
            .ok_or_else(|| LinkError::MissingContext(file.display().to_string())),
    }
}
