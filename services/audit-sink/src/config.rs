//! Sink configuration.

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Which audit store backs the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Keep records in memory; they are lost on exit.
    Memory,
    /// Append records to `{data_dir}/audit_log_ext.jsonl`.
    JsonLines,
}

impl StoreKind {
    fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "jsonl" | "json_lines" => Ok(StoreKind::JsonLines),
            other => bail!("AUDITEXT_STORE must be 'memory' or 'jsonl', got '{other}'."),
        }
    }
}

/// Sink configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Store backing the sink.
    pub store: StoreKind,

    /// Directory holding the JSON-lines audit file.
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = lookup("AUDITEXT_STORE")
            .map(|v| StoreKind::parse(&v))
            .transpose()?
            .unwrap_or(StoreKind::JsonLines);

        let data_dir = lookup("AUDITEXT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data"));

        let log_level = lookup("AUDITEXT_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            store,
            data_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.store, StoreKind::JsonLines);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AUDITEXT_STORE", "Memory"),
            ("AUDITEXT_DATA_DIR", "/var/lib/auditext"),
            ("AUDITEXT_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/auditext"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_store_rejected() {
        let err = config_from(&[("AUDITEXT_STORE", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }
}
