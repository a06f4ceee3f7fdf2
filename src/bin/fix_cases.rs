//! Rewrites every case file in a directory to the canonical six-key schema

use std::path::PathBuf;

use clap::Parser;

use court_practice_analyzer::service::schema::{fix_file, list_case_files};
use court_practice_analyzer::telemetry;

#[derive(Debug, Parser)]
#[command(name = "fix-cases", version, about = "Normalize case file keys in place")]
struct Args {
    /// Directory containing `{category}.json` case files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Report what would be kept without rewriting files
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    telemetry::init_cli();
    let args = Args::parse();

    let files = match list_case_files(&args.dir, false) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Cannot read directory {}: {}", args.dir.display(), e);
            return;
        }
    };

    for path in files {
        match fix_file(&path, args.dry_run) {
            Ok(report) => {
                let verb = if args.dry_run { "checked" } else { "fixed" };
                println!(
                    "File {} {}. Records processed: {} (dropped: {})",
                    path.display(),
                    verb,
                    report.kept_records,
                    report.dropped_records()
                );
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping case file");
                println!("File {} skipped: {}", path.display(), e);
            }
        }
    }

    println!("Case file fixing finished.");
}
