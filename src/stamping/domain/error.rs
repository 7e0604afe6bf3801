//! Error types for user stamp domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing user stamp domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StampDomainError {
    /// The column name is empty after trimming.
    #[error("stamp column name must not be empty")]
    EmptyColumnName,

    /// The column name is not a plain SQL identifier.
    #[error(
        "stamp column name '{0}' is invalid (only ASCII alphanumerics and underscores allowed, not starting with a digit)"
    )]
    InvalidColumnName(String),

    /// The column name exceeds the 63-byte identifier limit.
    #[error("stamp column name exceeds 63 byte limit: {0}")]
    ColumnNameTooLong(String),

    /// The configured user model is empty after trimming.
    #[error("user model must not be empty")]
    EmptyUserModel,
}

/// Error returned while parsing a lifecycle event name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lifecycle event: {0}")]
pub struct ParseLifecycleEventError(pub String);
