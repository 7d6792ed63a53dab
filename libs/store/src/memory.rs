//! In-memory audit store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use auditext_events::AuditLogRecord;
use auditext_id::AuditLogId;
use tokio::sync::RwLock;

use crate::{AuditStore, StoreError, StoredAuditLog};

/// Audit store backed by an ordered map, for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    records: RwLock<BTreeMap<AuditLogId, AuditLogRecord>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored so far.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn insert(&self, record: AuditLogRecord) -> Result<AuditLogId, StoreError> {
        let id = AuditLogId::generate();
        self.records.write().await.insert(id, record);
        Ok(id)
    }

    async fn get(&self, id: AuditLogId) -> Result<Option<StoredAuditLog>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .get(&id)
            .cloned()
            .map(|record| StoredAuditLog { id, record }))
    }
}
