//! # auditext-store
//!
//! Persistence seam for resolved audit records.
//!
//! Stores only insert and look up by ID. Querying and filtering audit history
//! belongs to whatever reads the underlying `audit_log_ext` location.
//!
//! Implementations:
//! - [`InMemoryAuditStore`] for tests and ephemeral runs
//! - [`JsonLinesAuditStore`] appending one JSON record per line to disk

mod error;
mod jsonl;
mod memory;

use async_trait::async_trait;
use auditext_events::{AuditLogRecord, CommonEvent};
use auditext_id::AuditLogId;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::StoreError;
pub use jsonl::JsonLinesAuditStore;
pub use memory::InMemoryAuditStore;

/// An audit record as persisted, keyed by its logical record ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAuditLog {
    pub id: AuditLogId,
    #[serde(flatten)]
    pub record: AuditLogRecord,
}

/// Destination for resolved audit records.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Persist a record and return the ID it was stored under.
    async fn insert(&self, record: AuditLogRecord) -> Result<AuditLogId, StoreError>;

    /// Look up a previously stored record.
    async fn get(&self, id: AuditLogId) -> Result<Option<StoredAuditLog>, StoreError>;
}

/// Resolve an event and persist the resulting record.
///
/// Nothing is written when resolution fails. Rejections are returned, not
/// logged; callers decide how to report them.
pub async fn record_event<S>(store: &S, event: &CommonEvent) -> Result<AuditLogId, StoreError>
where
    S: AuditStore + ?Sized,
{
    let record = event.resolve_to_audit_log()?;

    let id = store.insert(record).await?;
    debug!(
        audit_log_id = %id,
        project_id = event.project_id,
        operation = %event.operation,
        "Recorded audit log"
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use auditext_events::{operations, resource_types};
    use chrono::{TimeZone, Utc};

    use super::*;

    fn event(project_id: i64, source_ip: &str) -> CommonEvent {
        CommonEvent::builder()
            .operator("testuser")
            .project_id(project_id)
            .occurred_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
            .operation(operations::PULL)
            .source_ip(source_ip)
            .resource(resource_types::ARTIFACT, "library/nginx:latest")
            .successful(true)
            .build()
    }

    #[tokio::test]
    async fn test_record_event_persists_resolved_record() {
        let store = InMemoryAuditStore::new();
        let id = record_event(&store, &event(1, "192.168.1.100"))
            .await
            .unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record.username, "testuser");
        assert_eq!(stored.record.source_ip, "192.168.1.100");
    }

    #[tokio::test]
    async fn test_record_event_rejects_without_writing() {
        let store = InMemoryAuditStore::new();
        let err = record_event(&store, &event(-3, "10.0.0.1"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Resolve(ref e) if e.is_malformed()));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_record_event_through_trait_object() {
        let store: Box<dyn AuditStore> = Box::new(InMemoryAuditStore::new());
        let first = record_event(store.as_ref(), &event(1, "192.168.1.100"))
            .await
            .unwrap();
        let second = record_event(store.as_ref(), &event(2, "")).await.unwrap();

        assert_ne!(first, second);
        let stored = store.get(second).await.unwrap().unwrap();
        assert_eq!(stored.record.source_ip, "");
    }

    #[test]
    fn test_stored_audit_log_json_is_flat() {
        let stored = StoredAuditLog {
            id: AuditLogId::generate(),
            record: event(1, "::1").resolve_to_audit_log().unwrap(),
        };

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["source_ip"], "::1");
        assert_eq!(value["project_id"], 1);
        assert!(value["id"].as_str().unwrap().starts_with("alog_"));

        let parsed: StoredAuditLog = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, stored);
    }
}
