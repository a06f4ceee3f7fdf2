//! Reports schema validity of every JSON file in a directory

use std::path::PathBuf;

use clap::Parser;

use court_practice_analyzer::service::schema::{
    DocumentError, ValidationReport, list_case_files, validate_file,
};
use court_practice_analyzer::telemetry;

#[derive(Debug, Parser)]
#[command(name = "validate-cases", version, about = "Validate case file schema")]
struct Args {
    /// Directory containing JSON files to check
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn print_key_counts(report: &ValidationReport) {
    println!("  Key counts:");
    for (key, count) in &report.key_counts {
        println!("    {key}: {count}");
    }
}

fn print_result(name: &str, result: &Result<ValidationReport, DocumentError>) {
    println!("\n{name}:");
    match result {
        Ok(report) if report.valid => {
            println!("  Valid: yes");
            println!("  Cases: {}", report.case_count);
            print_key_counts(report);
        }
        Ok(report) => {
            println!("  Valid: no");
            println!("  Missing keys: {}", report.missing_keys.join(", "));
            println!("  Extra keys: {}", report.extra_keys.join(", "));
            print_key_counts(report);
        }
        Err(e) => {
            println!("  Valid: no");
            println!("  Error: {e}");
        }
    }
}

fn main() {
    telemetry::init_cli();
    let args = Args::parse();

    // Analysis output is listed too; it reports as "not a list"
    let files = match list_case_files(&args.dir, true) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Cannot read directory {}: {}", args.dir.display(), e);
            return;
        }
    };

    println!("JSON file validation results:");
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        print_result(&name, &validate_file(&path));
    }
}
