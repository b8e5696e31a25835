//! # Configuration Management
//!
//! Centralized configuration for the protocol layer.
//!
//! The wire contract itself (magic number, header layout) is fixed and lives in
//! constants; what a host may tune is the stream codec limit and how the crate
//! logs.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`

use crate::error::{constants, ProtocolError, Result};
use crate::protocol::messages::LARGEST_PAYLOAD_SIZE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Magic number opening every packet ("RTYP" in ASCII, written big-endian).
pub const MAGIC_NUMBER: u32 = 0x5254_5950;

/// Default ceiling on the payload size the stream codec accepts (64 KiB)
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024;

/// Hard ceiling on any configured payload size (16 MiB)
pub const MAX_PAYLOAD_SIZE_LIMIT: usize = 16 * 1024 * 1024;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProtocolConfig {
    /// Stream codec configuration
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProtocolConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_OPEN))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_READ))
        })?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
        })
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("RTYPE_PROTOCOL_MAX_PAYLOAD_SIZE") {
            config.codec.max_payload_size = size.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!(
                    "Invalid RTYPE_PROTOCOL_MAX_PAYLOAD_SIZE '{size}': {e}"
                ))
            })?;
        }

        if let Ok(level) = std::env::var("RTYPE_PROTOCOL_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid RTYPE_PROTOCOL_LOG_LEVEL '{level}'"))
            })?;
        }

        if let Ok(json) = std::env::var("RTYPE_PROTOCOL_LOG_JSON") {
            config.logging.json_format = matches!(json.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_WRITE))
        })?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Stream codec configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Largest payload (bytes) a framed stream may announce before it is rejected
    pub max_payload_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }
}

impl CodecConfig {
    /// Validate codec configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_size < LARGEST_PAYLOAD_SIZE {
            errors.push(format!(
                "Max payload size too small: {} bytes (largest game payload is {} bytes)",
                self.max_payload_size, LARGEST_PAYLOAD_SIZE
            ));
        } else if self.max_payload_size > MAX_PAYLOAD_SIZE_LIMIT {
            errors.push(format!(
                "Max payload size too large: {} bytes (maximum: {} bytes)",
                self.max_payload_size, MAX_PAYLOAD_SIZE_LIMIT
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name attached to the root span
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,

    /// Whether to print the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("rtype-protocol"),
            log_level: Level::INFO,
            json_format: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
