//! # auditext-id
//!
//! Identifier types shared by the audit pipeline.
//!
//! ## Design Principles
//!
//! - A project scope is an integer owned by the tenant registry; this crate
//!   only enforces that it is non-negative
//! - Audit records get a system-generated, prefixed ULID when persisted
//! - Parsing is strict and every ID formats back to the same string
//!
//! ## ID Format
//!
//! Audit record IDs use `{prefix}_{ulid}`, e.g. `alog_01HV4Z2WQXKJNM8GPQY6VBKC3D`.
//! ULIDs sort by their millisecond timestamp first, so records persisted in a
//! later millisecond sort later. Order within the same millisecond is random.

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
