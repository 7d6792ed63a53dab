//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID has the wrong prefix for its type.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ULID portion of the ID is invalid.
    #[error("invalid ULID: {0}")]
    InvalidUlid(String),

    /// A project ID below zero names no tenant scope.
    #[error("project ID must be non-negative, got {0}")]
    NegativeProjectId(i64),
}

impl IdError {
    /// Returns true if this error came from parsing a prefixed ID string.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, IdError::NegativeProjectId(_))
    }
}
