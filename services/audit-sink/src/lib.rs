//! # auditext-sink
//!
//! Intake service that drains newline-delimited JSON events from a reader,
//! resolves each into an audit-log record and persists it through an
//! [`AuditStore`](auditext_store::AuditStore). Configuration is read from the
//! environment; see [`Config::from_env`].

pub mod config;
pub mod sink;

pub use config::{Config, StoreKind};
pub use sink::{run, SinkSummary};
