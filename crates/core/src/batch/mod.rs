//! Batch planning and sequential execution.
//!
//! A folder scope is expanded into an explicit, ordered work-list, then
//! each file is read, merged, and written back one at a time. A failing
//! file is recorded and never stops the files after it.

pub mod planner;
pub mod runner;
pub mod types;

pub use planner::{PlanError, PlannedFile, plan};
pub use runner::{PropertyEdit, run};
pub use types::{BatchSummary, FileOutcome, FileReport};
