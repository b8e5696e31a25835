//! Observability and Metrics
//!
//! Packet counters for the protocol layer: what was encoded, what was
//! decoded, and what was dropped and why.
//!
//! Uses atomic counters for thread-safe metrics collection.

use crate::error::ProtocolError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Metrics collector for protocol operations
#[derive(Debug)]
pub struct Metrics {
    /// Packets serialized for sending
    pub packets_encoded: AtomicU64,
    /// Packets decoded into an event
    pub packets_decoded: AtomicU64,
    /// Bytes serialized for sending
    pub bytes_encoded: AtomicU64,
    /// Bytes accepted by the decoder
    pub bytes_decoded: AtomicU64,
    /// Drops: buffer shorter than header or announced payload
    pub dropped_truncated: AtomicU64,
    /// Drops: magic number mismatch
    pub dropped_bad_magic: AtomicU64,
    /// Drops: no handler for the tag
    pub dropped_unknown_type: AtomicU64,
    /// Drops: announced size disagrees with the registered payload
    pub dropped_size_mismatch: AtomicU64,
    /// Drops for any other reason
    pub dropped_other: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            packets_encoded: AtomicU64::new(0),
            packets_decoded: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            dropped_truncated: AtomicU64::new(0),
            dropped_bad_magic: AtomicU64::new(0),
            dropped_unknown_type: AtomicU64::new(0),
            dropped_size_mismatch: AtomicU64::new(0),
            dropped_other: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a packet serialized for sending
    pub fn packet_encoded(&self, byte_count: u64) {
        self.packets_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a packet decoded into an event
    pub fn packet_decoded(&self, byte_count: u64) {
        self.packets_decoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a dropped packet under the counter matching `error`
    pub fn packet_dropped(&self, error: &ProtocolError) {
        let counter = match error {
            ProtocolError::TruncatedBuffer { .. } => &self.dropped_truncated,
            ProtocolError::BadMagic(_) => &self.dropped_bad_magic,
            ProtocolError::UnknownType(_) => &self.dropped_unknown_type,
            ProtocolError::PayloadSizeMismatch { .. } => &self.dropped_size_mismatch,
            _ => &self.dropped_other,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            packets_encoded: self.packets_encoded.load(Ordering::Relaxed),
            packets_decoded: self.packets_decoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            dropped_truncated: self.dropped_truncated.load(Ordering::Relaxed),
            dropped_bad_magic: self.dropped_bad_magic.load(Ordering::Relaxed),
            dropped_unknown_type: self.dropped_unknown_type.load(Ordering::Relaxed),
            dropped_size_mismatch: self.dropped_size_mismatch.load(Ordering::Relaxed),
            dropped_other: self.dropped_other.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            packets_encoded = snapshot.packets_encoded,
            packets_decoded = snapshot.packets_decoded,
            bytes_encoded = snapshot.bytes_encoded,
            bytes_decoded = snapshot.bytes_decoded,
            dropped_truncated = snapshot.dropped_truncated,
            dropped_bad_magic = snapshot.dropped_bad_magic,
            dropped_unknown_type = snapshot.dropped_unknown_type,
            dropped_size_mismatch = snapshot.dropped_size_mismatch,
            dropped_other = snapshot.dropped_other,
            uptime_seconds = snapshot.uptime_seconds,
            "Protocol metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub packets_encoded: u64,
    pub packets_decoded: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,
    pub dropped_truncated: u64,
    pub dropped_bad_magic: u64,
    pub dropped_unknown_type: u64,
    pub dropped_size_mismatch: u64,
    pub dropped_other: u64,
    pub uptime_seconds: u64,
}

impl MetricsSnapshot {
    /// Sum of every drop counter
    pub fn dropped_total(&self) -> u64 {
        self.dropped_truncated
            + self.dropped_bad_magic
            + self.dropped_unknown_type
            + self.dropped_size_mismatch
            + self.dropped_other
    }
}

static METRICS: once_cell::sync::Lazy<Metrics> = once_cell::sync::Lazy::new(Metrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}

/// Initialize metrics collection (call once at startup)
pub fn init_metrics() {
    let _ = global_metrics();
    info!("Metrics collection initialized");
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_land_in_matching_counter() {
        let metrics = Metrics::new();
        metrics.packet_dropped(&ProtocolError::BadMagic(0));
        metrics.packet_dropped(&ProtocolError::UnknownType(0x99));
        metrics.packet_dropped(&ProtocolError::UnknownType(0x98));
        metrics.packet_dropped(&ProtocolError::TransportClosed);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.dropped_bad_magic, 1);
        assert_eq!(snapshot.dropped_unknown_type, 2);
        assert_eq!(snapshot.dropped_other, 1);
        assert_eq!(snapshot.dropped_total(), 4);
    }

    #[test]
    fn test_byte_counters() {
        let metrics = Metrics::new();
        metrics.packet_encoded(16);
        metrics.packet_decoded(16);
        metrics.packet_decoded(30);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.packets_encoded, 1);
        assert_eq!(snapshot.bytes_decoded, 46);
        metrics.log_metrics();
    }

    #[test]
    fn test_global_instance_is_shared() {
        init_metrics();
        let before = global_metrics().snapshot().packets_encoded;
        global_metrics().packet_encoded(1);
        assert!(global_metrics().snapshot().packets_encoded > before);
    }
}
