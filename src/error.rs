//! Error types for grammar drift analysis
//!
//! Only conditions that stop a run are errors. A pattern finding nothing, or
//! a signature spread over several lines, just yields smaller sets.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for drift analysis
#[derive(Error, Debug)]
pub enum DriftError {
    /// The grammar file does not resolve to a readable file
    #[error("{} not found.", .path.display())]
    GrammarNotFound { path: PathBuf },

    /// Interface or implementation file could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a generated file (settings template)
    #[error("Failed to write file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A signature pattern built from settings did not compile
    #[error("Invalid {name} pattern: {source}")]
    InvalidPattern {
        name: String,
        source: regex::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("{0}")]
    General(String),
}

impl DriftError {
    /// Get a stable status code for this error type.
    ///
    /// Used as the `code` field of JSON error responses.
    pub fn status_code(&self) -> String {
        match self {
            Self::GrammarNotFound { .. } => "GRAMMAR_NOT_FOUND",
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::InvalidPattern { .. } => "INVALID_PATTERN",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Override the location with --header or --source",
            ],
            Self::InvalidPattern { .. } => vec![
                "Check stubs.owning_pointer and stubs.scope in your settings",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'grammar-drift config' to inspect the effective settings",
                "Run 'grammar-drift init --force' to regenerate the settings file",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for drift operations
pub type DriftResult<T> = Result<T, DriftError>;
