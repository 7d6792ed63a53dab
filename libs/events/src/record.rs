//! The canonical audit-log record produced by resolution.

use auditext_id::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persistence-ready record of one audited action.
///
/// Produced only by [`resolve`](crate::resolve); ownership moves to the caller,
/// which is responsible for storing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogRecord {
    /// Project (tenant) owning the resource.
    pub project_id: ProjectId,

    /// Actor identity, empty for system-initiated actions.
    pub username: String,

    /// Verb describing the action.
    pub operation: String,

    /// Category of the acted-upon resource.
    pub resource_type: String,

    /// Fully-qualified identifier of the resource.
    pub resource: String,

    /// Human-readable description, possibly empty.
    pub operation_description: String,

    /// Whether the action succeeded.
    pub is_successful: bool,

    /// Network origin of the actor exactly as reported, possibly empty.
    pub source_ip: String,

    /// When the action happened.
    pub op_time: DateTime<Utc>,
}

impl AuditLogRecord {
    /// Storage location conventionally dedicated to audit records.
    pub const TABLE_NAME: &'static str = "audit_log_ext";

    /// Returns the storage location for audit records.
    pub fn table_name(&self) -> &'static str {
        Self::TABLE_NAME
    }
}
