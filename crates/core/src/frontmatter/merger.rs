//! Property merge engine over located front matter.
//!
//! Every branch re-concatenates untouched slices of the input buffer, so
//! content before the opening delimiter and after the closing delimiter
//! survives byte-for-byte. Only the edited property block is rewritten.

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::types::FrontmatterSpan;

/// Errors rejected before any mutation is computed.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("property name must not be empty")]
    EmptyProperty,
}

/// Outcome of a merge computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Full replacement text for the file.
    Updated(String),
    /// The rendered entry already exists under the property; nothing to
    /// write.
    AlreadyPresent,
    /// The property holds an inline/comma value, which the engine does not
    /// rewrite. Detected, left untouched.
    InlineFormat,
}

/// Merge a quoted sequence entry for `property` into `text`.
///
/// `value` is an opaque, pre-formatted link token; it is emitted verbatim
/// inside double quotes. `span` comes from [`super::locate`]; `None` means
/// the file has no front matter and a fresh block is synthesized.
pub fn merge(
    text: &str,
    span: Option<&FrontmatterSpan>,
    property: &str,
    value: &str,
) -> Result<MergeOutcome, MergeError> {
    if property.is_empty() {
        return Err(MergeError::EmptyProperty);
    }

    let Some(span) = span else {
        debug!(property, "no front matter, synthesizing a new block");
        return Ok(MergeOutcome::Updated(prepend_block(text, property, value)));
    };

    let key = format!("{property}:");
    match span.inner.find(&key) {
        None => {
            debug!(property, "property absent, inserting at top of block");
            Ok(MergeOutcome::Updated(insert_property(text, span, property, value)))
        }
        Some(key_at) => Ok(append_entry(text, span, &key, key_at, value)),
    }
}

/// No front matter: a fresh block goes above the original content, which
/// follows unchanged.
fn prepend_block(text: &str, property: &str, value: &str) -> String {
    format!("---\n{property}:\n  - \"{value}\"\n---\n{text}")
}

/// Front matter without the property: the new declaration becomes the
/// first entry of the block, existing inner content shifts down verbatim.
fn insert_property(
    text: &str,
    span: &FrontmatterSpan,
    property: &str,
    value: &str,
) -> String {
    let head = &text[..span.open + 3];
    let tail = &text[span.close..];
    format!("{head}\n{property}:\n  - \"{value}\"\n{}\n{tail}", span.inner)
}

/// Property already declared: grow its block sequence, or leave an inline
/// value alone.
fn append_entry(
    text: &str,
    span: &FrontmatterSpan,
    key: &str,
    key_at: usize,
    value: &str,
) -> MergeOutcome {
    let inner = span.inner.as_str();

    // A dash at or after the key means the value is a block sequence.
    let Some(dash_at) = inner[key_at..].find('-').map(|i| key_at + i) else {
        debug!("property holds an inline value, leaving file untouched");
        return MergeOutcome::InlineFormat;
    };

    // Indent the new entry like the existing ones: count the characters
    // after the last newline between the key and the first dash.
    let between = &inner[key_at..dash_at];
    let indent_len = match between.rfind('\n') {
        Some(nl) => between.len() - nl - 1,
        None => between.len(),
    };
    let indent = " ".repeat(indent_len);
    let entry = format!("{indent}- \"{value}\"");

    // The sequence runs until the next top-level key, or the end of the
    // block when the property is the last one.
    let next_key = Regex::new(r"\n\w+:").unwrap();
    let seq_end = next_key
        .find(&inner[dash_at..])
        .map_or(inner.len(), |m| dash_at + m.start());

    if inner[dash_at..seq_end].contains(entry.trim()) {
        debug!("entry already present, skipping write");
        return MergeOutcome::AlreadyPresent;
    }

    // New entry goes directly under the key line, ahead of the existing
    // items, which are re-emitted unchanged.
    let head = &text[..span.open + 3];
    let tail = &text[span.close..];
    let prefix = &inner[..key_at + key.len()];
    let rest = &inner[dash_at..];
    MergeOutcome::Updated(format!("{head}\n{prefix}\n{entry}\n{indent}{rest}\n{tail}"))
}
