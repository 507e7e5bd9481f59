//! `gridcast` command-line converter.
//!
//! Walks `<ROOT>/collision_images` and `<ROOT>/objective_images`, writing
//! `numeric_image.txt` into every asset directory that lacks one. Exits
//! non-zero if a category aborts or an error stops the run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridcast_batch::{
    BatchConfig, BatchConverter, BatchReport, CategoryOutcome, FsListing, ImageCrateLoader,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridcast")]
#[command(about = "Convert asset images into collision and objective grid files")]
#[command(version)]
struct Args {
    /// Directory holding collision_images/ and objective_images/
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = BatchConfig::new(args.root);
    let converter = match BatchConverter::new(config, FsListing, ImageCrateLoader) {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = match converter.run() {
        Ok(r) => r,
        Err(e) => {
            error!("conversion failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if log_report(&report) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log warnings and per-category outcomes. Returns `true` if every
/// category completed.
fn log_report(report: &BatchReport) -> bool {
    for warning in report.warnings() {
        warn!("{warning}");
    }
    for category in report.iter() {
        match &category.outcome {
            CategoryOutcome::Completed => info!(
                category = %category.category,
                converted = category.converted.len(),
                skipped = category.skipped.len(),
                "done"
            ),
            CategoryOutcome::Aborted { reason, directory } => error!(
                category = %category.category,
                directory = %directory,
                %reason,
                "category aborted"
            ),
        }
    }
    report.all_completed()
}
