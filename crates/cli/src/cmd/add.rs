//! Add command implementation.

use std::path::Path;

use propadd_core::batch::{self, PropertyEdit};
use propadd_core::config::loader::ConfigLoader;
use propadd_core::storage::FsStorage;
use propadd_core::vault::TargetRef;
use tracing::debug;

use super::output::{print_summary_json, print_summary_text};
use crate::AddArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: AddArgs) {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    crate::logging::init(&rc);

    let target = match TargetRef::from_path(&args.path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error resolving target {}: {e}", args.path.display());
            std::process::exit(1);
        }
    };

    let plan = match batch::plan(&target, args.recursive, &rc.excluded_folders) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error expanding scope: {e}");
            std::process::exit(1);
        }
    };
    debug!(files = plan.len(), recursive = args.recursive, "scope expanded");

    if plan.is_empty() {
        println!("OK   propadd add");
        println!("no markdown files under {}", args.path.display());
        return;
    }

    let edit = PropertyEdit {
        property: args.property.unwrap_or_else(|| rc.default_property.clone()),
        value: args.value,
    };

    let summary = batch::run(&FsStorage, &plan, &edit);

    if args.json {
        print_summary_json(&summary);
    } else {
        print_summary_text(target.path(), &summary);
    }

    if summary.all_failed() {
        std::process::exit(1);
    }
}
