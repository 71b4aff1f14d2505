//! Errors raised outside the analytics engine
//!
//! The metrics functions are total and never fail. Everything that touches
//! disk, settings or user input reports a [`TrackerError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Bad settings file or unusable data directory
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input or a record that fails its own checks
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record matched the id, short id or title given
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A record file could not be read, parsed or replaced
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Transaction", identifier)
    }

    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Goal", identifier)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
