//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The salability read path distinguishes setup problems (operator
/// correction required, never retried here) from backing-store
/// failures (propagated unchanged; retry policy belongs to the
/// data-access layer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested mapping was not found (e.g. a sales channel with no
    /// assigned stock). Callers must treat this as a configuration
    /// error, not a transient fault.
    #[error("not found")]
    NotFound,

    /// A setup problem requiring operator correction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A query against a backing store failed.
    #[error("data store error: {0}")]
    DataStore(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn data_store(msg: impl Into<String>) -> Self {
        Self::DataStore(msg.into())
    }
}
