//! Resolution of operational events into audit-log records.

use auditext_id::ProjectId;

use crate::{AuditLogRecord, CommonEvent, EventError};

/// Resolves one event into its audit-log record.
///
/// Fails with [`EventError::MalformedEvent`] when the project ID is negative or
/// the occurrence time is missing. Every other field is copied verbatim; the
/// source IP is never parsed, so IPv6 zero padding and letter case survive.
pub fn resolve(event: &CommonEvent) -> Result<AuditLogRecord, EventError> {
    let project_id = ProjectId::new(event.project_id)
        .map_err(|e| EventError::malformed("project_id", e.to_string()))?;

    let op_time = event
        .occurred_at
        .ok_or_else(|| EventError::malformed("occurred_at", "occurrence time is required"))?;

    Ok(AuditLogRecord {
        project_id,
        username: event.operator.clone(),
        operation: event.operation.clone(),
        resource_type: event.resource_type.clone(),
        resource: event.resource_name.clone(),
        operation_description: event.operation_description.clone(),
        is_successful: event.is_successful,
        source_ip: event.source_ip.clone(),
        op_time,
    })
}

impl CommonEvent {
    /// Resolves this event into its audit-log record. See [`resolve`].
    pub fn resolve_to_audit_log(&self) -> Result<AuditLogRecord, EventError> {
        resolve(self)
    }
}
