//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - report produced (in sync, or drift without `--fail-on-drift`)
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific errors
//! - `126-255`: Reserved by shell

use crate::error::DriftError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Grammar file missing (code 3)
    NotFound = 3,

    /// Signature pattern could not be built (code 4)
    PatternError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// Parser is missing declarations or implementations (code 7)
    DriftDetected = 7,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Exit code for a finished analysis.
    ///
    /// Drift only fails the run when the caller asked for it.
    pub fn from_drift(in_sync: bool, fail_on_drift: bool) -> Self {
        if !in_sync && fail_on_drift {
            ExitCode::DriftDetected
        } else {
            ExitCode::Success
        }
    }

    /// Convert a `DriftError` to the appropriate exit code.
    pub fn from_error(error: &DriftError) -> Self {
        match error {
            DriftError::GrammarNotFound { .. } => ExitCode::NotFound,
            DriftError::FileRead { .. } | DriftError::FileWrite { .. } => ExitCode::IoError,
            DriftError::InvalidPattern { .. } => ExitCode::PatternError,
            DriftError::ConfigError { .. } => ExitCode::ConfigError,
            DriftError::General(_) => ExitCode::GeneralError,
        }
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Grammar not found",
            ExitCode::PatternError => "Invalid signature pattern",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
            ExitCode::DriftDetected => "Parser drifted from grammar",
        }
    }
}
