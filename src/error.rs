//! # Error Types
//!
//! Error handling for the R-Type packet protocol.
//!
//! Every failure the protocol layer can produce is a variant of [`ProtocolError`].
//! None of them are fatal: a long-lived game server treats a malformed packet as
//! a no-op and keeps serving, so callers match on the error, log it, and drop the
//! packet.
//!
//! ## Error Categories
//! - **Framing Errors**: truncated buffers, bad magic, oversized packets
//! - **Dispatch Errors**: unknown packet types, payload size mismatches
//! - **Payload Errors**: fixed-capacity fields overflowing
//! - **Host Errors**: configuration, I/O, closed transports, poisoned locks
//!
//! ## Example Usage
//! ```rust
//! use rtype_protocol::core::serializer::PacketSerializer;
//! use rtype_protocol::error::ProtocolError;
//! use tracing::debug;
//!
//! match PacketSerializer::deserialize(&[0x52, 0x54, 0x59]) {
//!     Ok(header) => debug!(sequence = header.sequence, "header accepted"),
//!     Err(ProtocolError::TruncatedBuffer { actual, required }) => {
//!         debug!(actual, required, "dropping short packet");
//!     }
//!     Err(e) => debug!(error = %e, "dropping packet"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
}

// ProtocolError is the primary error type for all protocol operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Truncated buffer: {actual} bytes, {required} required")]
    TruncatedBuffer { actual: usize, required: usize },

    #[error("Bad magic number: {0:#010x}")]
    BadMagic(u32),

    #[error("Unknown packet type: {0:#04x}")]
    UnknownType(u8),

    #[error("Payload size mismatch for type {packet_type:#04x}: expected {expected} bytes, header declares {actual}")]
    PayloadSizeMismatch {
        packet_type: u8,
        expected: usize,
        actual: usize,
    },

    #[error("Field too long: {actual} bytes, capacity {capacity}")]
    FieldTooLong { capacity: usize, actual: usize },

    #[error("Field contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },

    #[error("Packet too large: {0} bytes")]
    OversizedPacket(usize),

    #[error("Transport closed")]
    TransportClosed,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ProtocolError {
    /// Short, static label used as a log field and metrics key.
    pub fn kind(&self) -> &'static str {
        match self {
            ProtocolError::Io(_) => "io",
            ProtocolError::TruncatedBuffer { .. } => "truncated_buffer",
            ProtocolError::BadMagic(_) => "bad_magic",
            ProtocolError::UnknownType(_) => "unknown_type",
            ProtocolError::PayloadSizeMismatch { .. } => "payload_size_mismatch",
            ProtocolError::FieldTooLong { .. } => "field_too_long",
            ProtocolError::InteriorNul { .. } => "interior_nul",
            ProtocolError::OversizedPacket(_) => "oversized_packet",
            ProtocolError::TransportClosed => "transport_closed",
            ProtocolError::ConfigError(_) => "config",
        }
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
