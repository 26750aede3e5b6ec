//! Console output for check results.
//!
//! Stdout carries exactly one line per run (or the JSON report in JSON
//! mode); diagnostics go through `tracing` to stderr so the stdout
//! contract stays clean for callers that grep it.

use crate::types::{CheckReport, Result};
use colored::Colorize;

/// Console output handler.
pub struct ConsoleOutput {
    json_mode: bool,
}

impl ConsoleOutput {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    /// Print the result of a check.
    ///
    /// In JSON mode the report is pretty-printed instead of the one-line
    /// message. Color is an accent only; the printed characters match the
    /// documented line formats either way.
    pub fn print_report(&self, report: &CheckReport) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(report)?);
            return Ok(());
        }

        let line = render_line(report);
        if report.consistent {
            println!("{}", line.green());
        } else {
            println!("{}", line.red().bold());
        }

        Ok(())
    }
}

/// Render the one-line result message.
pub fn render_line(report: &CheckReport) -> String {
    if report.consistent {
        "Login fields are consistent.".to_string()
    } else {
        format!(
            "Login field mismatch: backend expects '{}', frontend sends '{}'",
            report.backend_field, report.frontend_field
        )
    }
}
