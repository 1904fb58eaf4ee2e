//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing vertex, unknown start vertex)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the graphstep CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - operation refers to vertices the graph does not hold (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphstep operations
#[derive(Error, Debug)]
pub enum GraphstepError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dfs, bfs, or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("cannot add edge {from} -> {to}: vertex {missing} does not exist")]
    MissingVertex {
        from: VertexId,
        to: VertexId,
        missing: VertexId,
    },

    #[error("start vertex {vertex} is not in the graph")]
    UnknownStartVertex { vertex: VertexId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),

    #[error("replay interrupted after {revealed} of {total} steps")]
    Interrupted { revealed: usize, total: usize },
}

impl GraphstepError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphstepError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        GraphstepError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphstepError::UnknownFormat(_)
            | GraphstepError::UnknownAlgorithm(_)
            | GraphstepError::UsageError(_)
            | GraphstepError::InvalidValue { .. } => ExitCode::Usage,

            GraphstepError::MissingVertex { .. } | GraphstepError::UnknownStartVertex { .. } => {
                ExitCode::Data
            }

            GraphstepError::Io(_)
            | GraphstepError::Json(_)
            | GraphstepError::Toml(_)
            | GraphstepError::FailedOperation { .. }
            | GraphstepError::Other(_)
            | GraphstepError::Interrupted { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphstepError::UnknownFormat(_) => "unknown_format",
            GraphstepError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphstepError::UsageError(_) => "usage_error",
            GraphstepError::InvalidValue { .. } => "invalid_value",
            GraphstepError::MissingVertex { .. } => "missing_vertex",
            GraphstepError::UnknownStartVertex { .. } => "unknown_start_vertex",
            GraphstepError::Io(_) => "io_error",
            GraphstepError::Json(_) => "json_error",
            GraphstepError::Toml(_) => "toml_error",
            GraphstepError::FailedOperation { .. } => "failed_operation",
            GraphstepError::Other(_) => "other",
            GraphstepError::Interrupted { .. } => "interrupted",
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

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphstepError>;
