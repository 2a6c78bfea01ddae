//! Error types and exit codes for facpref
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including a missing faculty name for `prefs`)
//! - 2: Usage error (bad flags/args, invalid submitted values)
//! - 3: Data error (malformed survey rows, no source files, corrupt ledger)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or ledger (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during facpref operations
#[derive(Error, Debug)]
pub enum FacprefError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed term label {label:?} (expected \"<Season> <Year>\")")]
    MalformedTermLabel { label: String },

    #[error("invalid term year {year:?} in term label {label:?}")]
    InvalidTermYear { label: String, year: String },

    #[error("{path:?} line {line}: {field} is not an integer: {value:?}")]
    NonIntegerRating {
        path: PathBuf,
        line: u64,
        field: String,
        value: String,
    },

    #[error("no preference files found matching {pattern}")]
    NoSourceFilesFound { pattern: String },

    #[error("{path:?} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid ledger {path:?}: {reason}")]
    InvalidLedger { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("No name provided")]
    MissingFacultyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl FacprefError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FacprefError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FacprefError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a ledger file that cannot be loaded
    pub fn invalid_ledger(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        FacprefError::InvalidLedger {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FacprefError::UnknownFormat(_)
            | FacprefError::UsageError(_)
            | FacprefError::InvalidValue { .. } => ExitCode::Usage,

            FacprefError::MalformedTermLabel { .. }
            | FacprefError::InvalidTermYear { .. }
            | FacprefError::NonIntegerRating { .. }
            | FacprefError::NoSourceFilesFound { .. }
            | FacprefError::MissingColumn { .. }
            | FacprefError::InvalidLedger { .. } => ExitCode::Data,

            FacprefError::MissingFacultyName
            | FacprefError::Io(_)
            | FacprefError::Csv(_)
            | FacprefError::Json(_)
            | FacprefError::Toml(_)
            | FacprefError::Pattern(_)
            | FacprefError::FailedOperationWithTarget { .. }
            | FacprefError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FacprefError::UnknownFormat(_) => "unknown_format",
            FacprefError::UsageError(_) => "usage_error",
            FacprefError::InvalidValue { .. } => "invalid_value",
            FacprefError::MalformedTermLabel { .. } => "malformed_term_label",
            FacprefError::InvalidTermYear { .. } => "invalid_term_year",
            FacprefError::NonIntegerRating { .. } => "non_integer_rating",
            FacprefError::NoSourceFilesFound { .. } => "no_source_files_found",
            FacprefError::MissingColumn { .. } => "missing_column",
            FacprefError::InvalidLedger { .. } => "invalid_ledger",
            FacprefError::MissingFacultyName => "missing_faculty_name",
            FacprefError::Io(_) => "io_error",
            FacprefError::Csv(_) => "csv_error",
            FacprefError::Json(_) => "json_error",
            FacprefError::Toml(_) => "toml_error",
            FacprefError::Pattern(_) => "pattern_error",
            FacprefError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FacprefError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for facpref operations
pub type Result<T> = std::result::Result<T, FacprefError>;
