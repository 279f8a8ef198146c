//! Error types and exit codes for depot
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing layout, unknown point, bad weight, missing item)
//!
//! Empty reads (dequeue on an empty belt, lookup of a missing id, a route
//! that does not exist) are not errors. They come back as `None` or an
//! empty path and never reach this module.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the depot CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad layout, unknown point, invalid weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during depot operations
#[derive(Error, Debug)]
pub enum DepotError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    /// An edge referenced a point that was never registered
    #[error("unknown point: {id}")]
    UnknownPoint { id: String },

    /// Edge weights must be finite and non-negative
    #[error("invalid edge weight: {value} (must be finite and non-negative)")]
    InvalidWeight { value: f64 },

    #[error("layout not found: {path:?}")]
    LayoutNotFound { path: PathBuf },

    #[error("invalid layout in {path:?}: {reason}")]
    InvalidLayout { path: PathBuf, reason: String },

    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl DepotError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DepotError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        DepotError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an edge endpoint that is not registered
    pub fn unknown_point(id: &str) -> Self {
        DepotError::UnknownPoint { id: id.to_string() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DepotError::UnknownFormat(_)
            | DepotError::UsageError(_)
            | DepotError::InvalidValue { .. } => ExitCode::Usage,

            DepotError::UnknownPoint { .. }
            | DepotError::InvalidWeight { .. }
            | DepotError::LayoutNotFound { .. }
            | DepotError::InvalidLayout { .. }
            | DepotError::ItemNotFound { .. }
            | DepotError::AlreadyExists { .. } => ExitCode::Data,

            DepotError::Io(_) | DepotError::Json(_) | DepotError::Toml(_) | DepotError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DepotError::UnknownFormat(_) => "unknown_format",
            DepotError::UsageError(_) => "usage_error",
            DepotError::InvalidValue { .. } => "invalid_value",
            DepotError::UnknownPoint { .. } => "unknown_point",
            DepotError::InvalidWeight { .. } => "invalid_weight",
            DepotError::LayoutNotFound { .. } => "layout_not_found",
            DepotError::InvalidLayout { .. } => "invalid_layout",
            DepotError::ItemNotFound { .. } => "item_not_found",
            DepotError::AlreadyExists { .. } => "already_exists",
            DepotError::Io(_) => "io_error",
            DepotError::Json(_) => "json_error",
            DepotError::Toml(_) => "toml_error",
            DepotError::Other(_) => "other",
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

/// Result type alias for depot operations
pub type Result<T> = std::result::Result<T, DepotError>;
