//! Error types for the DTR reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Bad individual inputs (a malformed punch, an unparseable exception date) are
//! never errors: they are dropped where they are read. The variants here cover
//! the failures that make a whole run meaningless.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ExceptionKind;

/// The main error type for the reconciliation engine.
///
/// # Example
///
/// ```
/// use dtr_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot work with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// The requested date range is inverted or longer than the configured cap.
    #[error("Invalid date range {from} to {to}: {message}")]
    InvalidDateRange {
        /// First requested date.
        from: NaiveDate,
        /// Last requested date.
        to: NaiveDate,
        /// Why the range was rejected.
        message: String,
    },

    /// A data collaborator failed to deliver records.
    #[error("Failed to fetch {what}: {message}")]
    Source {
        /// What was being fetched (e.g. "punch events", "Leave records").
        what: String,
        /// The collaborator's error message.
        message: String,
    },

    /// An upstream payload could not be ingested at all.
    #[error("Failed to ingest {kind} payload: {message}")]
    Ingest {
        /// The kind of payload.
        kind: String,
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for a failed exception-record fetch.
    pub fn source_for_kind(kind: ExceptionKind, message: impl Into<String>) -> Self {
        EngineError::Source {
            what: format!("{} records", kind),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
