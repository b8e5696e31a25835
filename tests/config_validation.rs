//! Integration tests for configuration validation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use rtype_protocol::config::{
    CodecConfig, LoggingConfig, ProtocolConfig, DEFAULT_MAX_PAYLOAD_SIZE, MAX_PAYLOAD_SIZE_LIMIT,
};
use rtype_protocol::protocol::messages::LARGEST_PAYLOAD_SIZE;
use rtype_protocol::{PacketCodec, ProtocolError};
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = ProtocolConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert_eq!(config.codec.max_payload_size, DEFAULT_MAX_PAYLOAD_SIZE);
}

#[test]
fn test_payload_limit_below_largest_message() {
    let config = ProtocolConfig::default_with_overrides(|c| {
        c.codec.max_payload_size = LARGEST_PAYLOAD_SIZE - 1;
    });

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Max payload size too small")));
}

#[test]
fn test_payload_limit_at_largest_message() {
    let codec = CodecConfig {
        max_payload_size: LARGEST_PAYLOAD_SIZE,
    };
    assert!(codec.validate().is_empty());
}

#[test]
fn test_payload_limit_too_large() {
    let codec = CodecConfig {
        max_payload_size: MAX_PAYLOAD_SIZE_LIMIT + 1,
    };
    let errors = codec.validate();
    assert!(errors.iter().any(|e| e.contains("Max payload size too large")));
}

#[test]
fn test_empty_app_name() {
    let logging = LoggingConfig {
        app_name: String::new(),
        ..LoggingConfig::default()
    };
    let errors = logging.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let logging = LoggingConfig {
        app_name: "x".repeat(65),
        ..LoggingConfig::default()
    };
    let errors = logging.validate();
    assert!(errors.iter().any(|e| e.contains("Application name too long")));
}

#[test]
fn test_validate_strict_collects_every_error() {
    let config = ProtocolConfig::default_with_overrides(|c| {
        c.codec.max_payload_size = 1;
        c.logging.app_name.clear();
    });

    match config.validate_strict() {
        Err(ProtocolError::ConfigError(msg)) => {
            assert!(msg.contains("Max payload size too small"));
            assert!(msg.contains("cannot be empty"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [codec]
        max_payload_size = 4096

        [logging]
        app_name = "rtype-server"
        log_level = "debug"
        json_format = true
        with_target = false
    "#;

    let config = ProtocolConfig::from_toml(toml).unwrap();
    assert_eq!(config.codec.max_payload_size, 4096);
    assert_eq!(config.logging.app_name, "rtype-server");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
    assert!(config.validate().is_empty());

    let codec = PacketCodec::from_config(&config.codec);
    assert_eq!(codec.max_payload_size(), 4096);
}

#[test]
fn test_toml_bad_level_rejected() {
    let toml = r#"
        [codec]
        max_payload_size = 4096

        [logging]
        app_name = "rtype"
        log_level = "loud"
        json_format = false
        with_target = true
    "#;

    assert!(matches!(
        ProtocolConfig::from_toml(toml),
        Err(ProtocolError::ConfigError(_))
    ));
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("rtype-protocol-{}.toml", std::process::id()));
    let config = ProtocolConfig::default_with_overrides(|c| c.codec.max_payload_size = 2048);

    config.save_to_file(&path).unwrap();
    let loaded = ProtocolConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.codec.max_payload_size, 2048);
    assert_eq!(loaded.logging.app_name, config.logging.app_name);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("rtype-protocol-does-not-exist.toml");
    assert!(matches!(
        ProtocolConfig::from_file(path),
        Err(ProtocolError::ConfigError(_))
    ));
}

// Environment is process-global: every env var case lives in this one test.
#[test]
fn test_env_overrides() {
    std::env::set_var("RTYPE_PROTOCOL_MAX_PAYLOAD_SIZE", "8192");
    std::env::set_var("RTYPE_PROTOCOL_LOG_LEVEL", "warn");
    std::env::set_var("RTYPE_PROTOCOL_LOG_JSON", "true");

    let config = ProtocolConfig::from_env().unwrap();
    assert_eq!(config.codec.max_payload_size, 8192);
    assert_eq!(config.logging.log_level, Level::WARN);
    assert!(config.logging.json_format);

    std::env::set_var("RTYPE_PROTOCOL_MAX_PAYLOAD_SIZE", "lots");
    assert!(matches!(
        ProtocolConfig::from_env(),
        Err(ProtocolError::ConfigError(_))
    ));

    std::env::remove_var("RTYPE_PROTOCOL_MAX_PAYLOAD_SIZE");
    std::env::remove_var("RTYPE_PROTOCOL_LOG_LEVEL");
    std::env::remove_var("RTYPE_PROTOCOL_LOG_JSON");

    let config = ProtocolConfig::from_env().unwrap();
    assert_eq!(config.codec.max_payload_size, DEFAULT_MAX_PAYLOAD_SIZE);
    assert!(!config.logging.json_format);
}
