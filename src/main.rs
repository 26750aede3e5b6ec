//! authlint - Static consistency checker for login credential fields.
//!
//! CLI entry point.

use authlint::{Checker, Config, ConsoleOutput};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging. Diagnostics go to stderr; stdout is reserved for
    // the one-line result (or the JSON report).
    let filter = if config.verbose {
        EnvFilter::new("authlint=debug,info")
    } else {
        EnvFilter::new("authlint=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let checker = Checker::new();

    let report = match checker.check_files(&config.backend, &config.frontend) {
        Ok(r) => r,
        Err(e) => {
            error!("Check failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let console = ConsoleOutput::new(config.json);
    if let Err(e) = console.print_report(&report) {
        error!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    // A mismatch is reported on stdout, not through the exit code.
    ExitCode::SUCCESS
}
