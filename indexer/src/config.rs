//! Indexer configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use algo_utils::LogFormat;

use crate::IndexerError;

/// Configuration for indexer access and logging.
///
/// Can be loaded from a TOML file via [`IndexerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Base URL of the indexer, without the `/v2` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Sent as `X-Indexer-API-Token` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    "https://mainnet-idx.algonode.cloud".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl IndexerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, IndexerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| IndexerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, IndexerError> {
        toml::from_str(s).map_err(|e| IndexerError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("IndexerConfig is always serializable to TOML")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), IndexerError> {
        algo_utils::init_logging(self.log_format, &self.log_level)?;
        Ok(())
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            api_key: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_utils::LoggingError;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = IndexerConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = IndexerConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.timeout_secs, config.timeout_secs);
        assert_eq!(parsed.api_key, None);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = IndexerConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.base_url, "https://mainnet-idx.algonode.cloud");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            base_url = "http://localhost:8980"
            api_key = "secret"
            log_format = "json"
        "#;
        let config = IndexerConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.base_url, "http://localhost:8980");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.timeout_secs, 30); // default
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = IndexerConfig::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, IndexerError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 3").unwrap();
        let config = IndexerConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn init_logging_installs_once() {
        let config = IndexerConfig::from_toml_str(r#"log_format = "json""#).unwrap();
        let _ = config.init_logging();
        tracing::info!(base_url = %config.base_url, "logging configured");
        assert!(matches!(
            config.init_logging(),
            Err(IndexerError::Logging(LoggingError::AlreadyInitialized))
        ));
    }

    #[test]
    fn invalid_log_level_is_reported() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = IndexerConfig {
            log_level: "algo_indexer=loud".to_string(),
            ..IndexerConfig::default()
        };
        assert!(matches!(
            config.init_logging(),
            Err(IndexerError::Logging(LoggingError::InvalidFilter { .. }))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = IndexerConfig::from_toml_file("/nonexistent/indexer.toml").unwrap_err();
        assert!(matches!(err, IndexerError::Config(_)));
    }
}
