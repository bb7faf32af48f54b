//! Command-line front end for the record checks.
//!
//! ```bash
//! axes-check thresholds --metrics run.json --profile profile.json --fail-on-warn
//! axes-check schema --file run.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use axes_checks::report::exit_code;
use axes_checks::{check_threshold_files, validate_file, CheckReport};
use axes_core::errors::{AxesErrorCode, CheckError};
use axes_core::tracing_setup::init_tracing;
use clap::{Parser, Subcommand};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "axes-check")]
#[command(about = "Validate persisted axes metric records")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assert a metrics record against a threshold profile
    Thresholds {
        /// Metrics JSON (flat record or full report)
        #[arg(long)]
        metrics: PathBuf,

        /// Threshold profile JSON with a `metrics` section
        #[arg(long)]
        profile: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        fail_on_warn: bool,
    },

    /// Check that a record carries every axes key with a valid type
    Schema {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let (label, outcome) = match &args.command {
        Command::Thresholds {
            metrics,
            profile,
            fail_on_warn,
        } => (
            "threshold check",
            check_threshold_files(metrics, profile, *fail_on_warn),
        ),
        Command::Schema { file } => ("schema validation", validate_file(file)),
    };

    match &outcome {
        Ok(report) => print_report(label, report),
        Err(e) => report_error(label, e),
    }
    ExitCode::from(exit_code(&outcome))
}

fn print_report(label: &str, report: &CheckReport) {
    for finding in &report.findings {
        println!("{finding}");
    }
    let verdict = if report.passed() { "PASSED" } else { "FAILED" };
    println!(
        "{label} {verdict}: {} failure(s), {} warning(s)",
        report.failures(),
        report.warnings()
    );
}

fn report_error(label: &str, e: &CheckError) {
    error!(error = %e.coded_string(), "{label} could not run");
    eprintln!("{label} ERROR: {e}");
}
