//! Batch summary rendering.

use propadd_core::batch::{BatchSummary, FileOutcome};
use std::path::Path;

pub fn print_summary_text(scope: &Path, summary: &BatchSummary) {
    println!("OK   propadd add");
    println!("scope: {}", scope.display());
    println!(
        "files: {} updated, {} already linked, {} inline skipped, {} failed",
        summary.updated(),
        summary.already_present(),
        summary.inline_skipped(),
        summary.failed()
    );

    for report in &summary.reports {
        if let FileOutcome::Failed(msg) = &report.outcome {
            println!("FAIL {}: {msg}", report.path.display());
        }
    }
}

pub fn print_summary_json(summary: &BatchSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing summary: {e}");
            std::process::exit(1);
        }
    }
}
