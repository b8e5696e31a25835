//! # Utility Modules
//!
//! Supporting utilities for logging, metrics and sequence numbering.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup from `LoggingConfig`
//! - **Metrics**: Thread-safe packet and drop counters
//! - **Sequence**: Wrapping sender counter and receiver-side comparison

pub mod logging;
pub mod metrics;
pub mod sequence;

pub use metrics::{global_metrics, Metrics, MetricsSnapshot};
pub use sequence::SequenceCounter;
