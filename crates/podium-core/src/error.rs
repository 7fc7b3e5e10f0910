//! Error types and exit codes for podium
//!
//! The scoring pipeline itself is total and never fails; errors only occur
//! at the edges (CLI usage, dataset/rules files). Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unparseable dataset/rules file)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the podium CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid dataset/rules file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur at the edges of podium operations
#[derive(Error, Debug)]
pub enum PodiumError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("score rules not found: {path:?}")]
    RulesNotFound { path: PathBuf },

    #[error("invalid score rules {path:?}: {reason}")]
    InvalidRules { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PodiumError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PodiumError::UnknownFormat(_) | PodiumError::UsageError(_) => ExitCode::Usage,

            PodiumError::DatasetNotFound { .. }
            | PodiumError::InvalidDataset { .. }
            | PodiumError::RulesNotFound { .. }
            | PodiumError::InvalidRules { .. } => ExitCode::Data,

            PodiumError::Io(_) | PodiumError::Json(_) | PodiumError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier used in structured output
    fn error_type(&self) -> &'static str {
        match self {
            PodiumError::UnknownFormat(_) => "unknown_format",
            PodiumError::UsageError(_) => "usage_error",
            PodiumError::DatasetNotFound { .. } => "dataset_not_found",
            PodiumError::InvalidDataset { .. } => "invalid_dataset",
            PodiumError::RulesNotFound { .. } => "rules_not_found",
            PodiumError::InvalidRules { .. } => "invalid_rules",
            PodiumError::Io(_) => "io_error",
            PodiumError::Json(_) => "json_error",
            PodiumError::Other(_) => "other",
        }
    }

    /// Convert the error to the JSON envelope emitted under `--format json`.
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

/// Result type alias for podium operations
pub type Result<T> = std::result::Result<T, PodiumError>;
