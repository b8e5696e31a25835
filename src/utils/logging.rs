//! Structured logging setup.
//!
//! The library only emits `tracing` events; binaries and tests that want to see
//! them call [`init_logging`] once. `RUST_LOG` wins over the configured level
//! when set.

use crate::config::LoggingConfig;
use crate::error::{ProtocolError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber according to `config`.
///
/// Fails with `ConfigError` when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ProtocolError::ConfigError(format!("Failed to install logger: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}

/// Like [`init_logging`] but ignores an already-installed subscriber.
pub fn try_init_logging(config: &LoggingConfig) {
    let _ = init_logging(config);
}
