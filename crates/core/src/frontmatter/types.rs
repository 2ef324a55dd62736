//! Front matter span types.

/// Location of a front matter block within one file's text.
///
/// Offsets index into the original text; `inner` is the text strictly
/// between the two delimiter occurrences, whitespace trimmed. Absence of
/// front matter is modeled as `Option<FrontmatterSpan>` at the call sites,
/// so there is no "present" flag whose sibling fields could be read by
/// mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSpan {
    /// Offset of the opening `---`.
    pub open: usize,
    /// Offset of the closing `---`.
    pub close: usize,
    /// Trimmed text between the delimiters. Empty for an adjacent empty
    /// block, which is valid.
    pub inner: String,
}
