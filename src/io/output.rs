//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::display::THEME;
use crate::error::DriftError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use crate::report::{DriftReport, IN_SYNC_MESSAGE};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// Reports and data go to stdout, errors and progress to stderr.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Output a drift report.
    ///
    /// Text mode prints the report verbatim; JSON mode wraps it in a response
    /// whose code says whether the parser is in sync.
    pub fn report(&mut self, report: &DriftReport, fail_on_drift: bool) -> io::Result<ExitCode> {
        let code = ExitCode::from_drift(report.is_in_sync(), fail_on_drift);

        match self.format {
            OutputFormat::Json => {
                let (status_code, message) = if report.is_in_sync() {
                    ("IN_SYNC", IN_SYNC_MESSAGE.to_string())
                } else {
                    (
                        "DRIFT_DETECTED",
                        format!(
                            "{} missing declarations, {} missing implementations",
                            report.discrepancies.missing_declarations.len(),
                            report.discrepancies.missing_implementations.len()
                        ),
                    )
                };
                let response = JsonResponse::success(report)
                    .with_outcome(code, status_code, &message)
                    .with_meta(ResponseMeta::now());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                write!(self.stdout, "{report}")?;
            }
        }
        self.stdout.flush()?;
        Ok(code)
    }

    /// Output a successful result.
    ///
    /// In JSON mode, wraps the data in a success response.
    /// In text mode, `text` is printed as is.
    pub fn success<T, D>(&mut self, data: T, text: D) -> io::Result<ExitCode>
    where
        T: Serialize,
        D: Display,
    {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&data).with_meta(ResponseMeta::now());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stdout, "{text}")?;
            }
        }
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &DriftError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(
                    self.stderr,
                    "{}",
                    THEME.error_with_icon(&format!("Error: {error}"))
                )?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output a warning to stderr (text mode only).
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stderr, "{}", THEME.warning_with_icon(message))?;
        }
        Ok(())
    }

    /// Output informational message (text mode only).
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stdout, "{message}")?;
        }
        Ok(())
    }
}
