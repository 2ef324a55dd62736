//! Front matter location and property merging.
//!
//! This module provides functionality to:
//! - Locate the YAML front matter block (or its absence) in raw file text
//! - Merge a link-valued sequence entry into a named property
//! - Preserve every byte outside the touched property block

pub mod locator;
pub mod merger;
pub mod types;

pub use locator::locate;
pub use merger::{MergeError, MergeOutcome, merge};
pub use types::FrontmatterSpan;
