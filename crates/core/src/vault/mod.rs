//! Target classification and folder walking.
//!
//! This module provides utilities for classifying batch targets as files
//! or folders and enumerating the markdown files under a folder scope.

pub mod refs;
pub mod walker;

pub use refs::TargetRef;
pub use walker::{FolderWalker, WalkedFile, WalkerError};
