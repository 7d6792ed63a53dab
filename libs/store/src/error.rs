//! Store error types.

use auditext_events::EventError;
use thiserror::Error;

/// Errors raised while recording audit logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The event could not be resolved into a record.
    #[error("event rejected: {0}")]
    Resolve(#[from] EventError),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
