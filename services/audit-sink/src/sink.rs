//! Event intake loop.
//!
//! Reads newline-delimited JSON events, resolves each into an audit record and
//! hands it to the configured store. A line that fails to decode or resolve is
//! logged and dropped; the loop only stops on end of input or a store failure.

use anyhow::{Context, Result};
use auditext_events::CommonEvent;
use auditext_store::{record_event, AuditStore, StoreError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// Outcome counters for one run of the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkSummary {
    /// Events persisted as audit records.
    pub recorded: u64,
    /// Lines dropped because they did not decode or resolve.
    pub rejected: u64,
}

/// Drain `reader` into `store`.
pub async fn run<R, S>(reader: R, store: &S) -> Result<SinkSummary>
where
    R: AsyncBufRead + Unpin,
    S: AuditStore + ?Sized,
{
    let mut summary = SinkSummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0u64;

    while let Some(line) = lines.next_line().await.context("Failed to read event stream")? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match CommonEvent::from_json(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(line = line_no, error = %e, "Dropping undecodable event");
                summary.rejected += 1;
                continue;
            }
        };

        match record_event(store, &event).await {
            Ok(_) => summary.recorded += 1,
            Err(StoreError::Resolve(e)) => {
                warn!(line = line_no, error = %e, "Dropping malformed event");
                summary.rejected += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to store event from line {line_no}"))
            }
        }
    }

    info!(
        recorded = summary.recorded,
        rejected = summary.rejected,
        "Event stream drained"
    );
    Ok(summary)
}
