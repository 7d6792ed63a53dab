//! Append-only JSON-lines audit store.
//!
//! Each record is written as one line of JSON to
//! `{dir}/audit_log_ext.jsonl`. Lines are never rewritten, so a crash can at
//! worst leave a truncated final line, which `get` skips with a warning.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use auditext_events::AuditLogRecord;
use auditext_id::AuditLogId;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{AuditStore, StoreError, StoredAuditLog};

/// Audit store appending JSON lines to a file on disk.
#[derive(Debug)]
pub struct JsonLinesAuditStore {
    /// Path to the audit file.
    path: PathBuf,

    /// Serializes appends so lines never interleave.
    write_lock: Mutex<()>,
}

impl JsonLinesAuditStore {
    /// Create a store writing under `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let path = dir
            .as_ref()
            .join(format!("{}.jsonl", AuditLogRecord::TABLE_NAME));
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AuditStore for JsonLinesAuditStore {
    async fn insert(&self, record: AuditLogRecord) -> Result<AuditLogId, StoreError> {
        let stored = StoredAuditLog {
            id: AuditLogId::generate(),
            record,
        };
        let mut line = serde_json::to_string(&stored)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await? {
                fs::create_dir_all(parent).await?;
                info!(path = %parent.display(), "Created audit log directory");
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), audit_log_id = %stored.id, "Appended audit log");
        Ok(stored.id)
    }

    async fn get(&self, id: AuditLogId) -> Result<Option<StoredAuditLog>, StoreError> {
        let file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0usize;
        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StoredAuditLog>(&line) {
                Ok(stored) if stored.id == id => return Ok(Some(stored)),
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no,
                        error = %e,
                        "Skipping unreadable audit log line"
                    );
                }
            }
        }

        Ok(None)
    }
}
