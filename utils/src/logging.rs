//! Structured logging initialisation via `tracing`.
//!
//! Output is either human-readable lines or newline-delimited JSON, chosen
//! by [`LogFormat`]. `RUST_LOG` takes precedence over the configured level.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level filter `{level}`: {reason}")]
    InvalidFilter { level: String, reason: String },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Build the level filter, preferring `RUST_LOG` when it is set and valid.
pub fn level_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidFilter {
        level: level.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, so a
/// library caller can attempt it unconditionally.
pub fn init_logging(format: LogFormat, level: &str) -> Result<(), LoggingError> {
    let subscriber = tracing_subscriber::registry().with(level_filter(level)?);
    let installed = match format {
        LogFormat::Human => subscriber.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => subscriber
            .with(fmt::layer().json().flatten_event(true).with_target(true))
            .try_init(),
    };
    installed.map_err(|_| LoggingError::AlreadyInitialized)
}
