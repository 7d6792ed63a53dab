//! # auditext-events
//!
//! Operational events and their resolution into audit-log records.
//!
//! ## Design Principles
//!
//! - Events are immutable observations of one user action against one resource
//! - Resolution is a pure, explicit field-by-field mapping with no hidden state
//! - Only the project scope and occurrence time are validated; every other field,
//!   including the source IP, passes through byte for byte
//! - A failed resolution yields an error and never a partial record
//!
//! ## Flow
//!
//! ```text
//! producer ──▶ CommonEvent ──resolve──▶ AuditLogRecord ──▶ audit store
//! ```

mod error;
mod event;
mod record;
mod resolve;
mod types;

pub use error::EventError;
pub use event::*;
pub use record::*;
pub use resolve::resolve;
pub use types::*;
