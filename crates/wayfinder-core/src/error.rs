//! Error types and exit codes for wayfinder
//!
//! Exit codes:
//! - 0: Success (including searches that find no path)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or malformed topology, bad cell)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfinder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed topology file, invalid cell (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfinder operations
#[derive(Error, Debug)]
pub enum WayfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid topology in {path:?}: {reason}")]
    InvalidTopology { path: PathBuf, reason: String },

    #[error("invalid cell '{0}' (expected: row,col)")]
    InvalidCell(String),

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Create an error for a malformed topology file
    pub fn invalid_topology(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        WayfinderError::InvalidTopology {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfinderError::UnknownFormat(_)
            | WayfinderError::DuplicateFormat
            | WayfinderError::UsageError(_) => ExitCode::Usage,

            WayfinderError::InvalidTopology { .. }
            | WayfinderError::InvalidCell(_)
            | WayfinderError::CellOutOfBounds { .. } => ExitCode::Data,

            WayfinderError::Io(_) | WayfinderError::Json(_) | WayfinderError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfinderError::UnknownFormat(_) => "unknown_format",
            WayfinderError::DuplicateFormat => "duplicate_format",
            WayfinderError::UsageError(_) => "usage_error",
            WayfinderError::InvalidTopology { .. } => "invalid_topology",
            WayfinderError::InvalidCell(_) => "invalid_cell",
            WayfinderError::CellOutOfBounds { .. } => "cell_out_of_bounds",
            WayfinderError::Io(_) => "io_error",
            WayfinderError::Json(_) => "json_error",
            WayfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, WayfinderError>;
