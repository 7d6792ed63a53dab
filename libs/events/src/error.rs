//! Error types for event handling.

use thiserror::Error;

/// Errors that can occur when decoding or resolving events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event does not carry a valid project scope or occurrence time.
    #[error("malformed event: {field}: {reason}")]
    MalformedEvent { field: &'static str, reason: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl EventError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        EventError::MalformedEvent {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if the event itself was rejected during resolution.
    pub fn is_malformed(&self) -> bool {
        matches!(self, EventError::MalformedEvent { .. })
    }
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}
