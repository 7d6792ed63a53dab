//! auditext sink
//!
//! Reads operational events as newline-delimited JSON on stdin, resolves each
//! into an audit-log record and persists it.

use anyhow::Result;
use auditext_sink::{run, Config, StoreKind};
use auditext_store::{AuditStore, InMemoryAuditStore, JsonLinesAuditStore};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Prefer RUST_LOG, fall back to AUDITEXT_LOG_LEVEL
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();

    info!(
        store = ?config.store,
        data_dir = %config.data_dir.display(),
        "Starting audit sink"
    );

    let store: Box<dyn AuditStore> = match config.store {
        StoreKind::Memory => Box::new(InMemoryAuditStore::new()),
        StoreKind::JsonLines => Box::new(JsonLinesAuditStore::new(&config.data_dir)),
    };

    run(BufReader::new(tokio::io::stdin()), store.as_ref()).await?;
    Ok(())
}
