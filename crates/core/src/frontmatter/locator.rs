//! Front matter location in raw file text.

use super::types::FrontmatterSpan;

/// Locate the YAML front matter block at the top of a file.
///
/// Only the first line is inspected for the opening `---`; a `---`
/// appearing further down does not open a block. The closing delimiter is
/// the next literal `---` anywhere after the opener (plain substring scan,
/// no per-line validation). A missing closer is treated the same as no
/// front matter at all.
pub fn locate(text: &str) -> Option<FrontmatterSpan> {
    let first_line = text.split('\n').next().unwrap_or(text);
    let open = first_line.find("---")?;
    let close = text[open + 3..].find("---").map(|i| open + 3 + i)?;
    let inner = text[open + 3..close].trim().to_string();
    Some(FrontmatterSpan { open, close, inner })
}
