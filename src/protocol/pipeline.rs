//! Receive path: transport bytes to application events.
//!
//! Malformed input never reaches the consumer and never stops the loop. Each
//! rejected packet is logged at `debug` and counted, then dropped.

use crate::protocol::decoder::Decoder;
use crate::protocol::event::DecodedPacket;
use crate::transport::Transport;
use crate::utils::metrics::{global_metrics, Metrics, Timer};
use std::sync::Arc;
use tracing::debug;

pub struct Pipeline {
    decoder: Arc<Decoder>,
    metrics: &'static Metrics,
}

impl Pipeline {
    pub fn new(decoder: Arc<Decoder>) -> Self {
        Self {
            decoder,
            metrics: global_metrics(),
        }
    }

    pub fn decoder(&self) -> &Arc<Decoder> {
        &self.decoder
    }

    /// Validate and decode one packet buffer; `None` means it was dropped.
    pub fn process(&self, packet: &[u8]) -> Option<DecodedPacket> {
        match self.decoder.decode_packet(packet) {
            Ok(decoded) => {
                self.metrics.packet_decoded(packet.len() as u64);
                Some(decoded)
            }
            Err(e) => {
                debug!(kind = e.kind(), error = %e, len = packet.len(), "dropping packet");
                self.metrics.packet_dropped(&e);
                None
            }
        }
    }

    /// Feed every buffer pending on `transport` through [`Pipeline::process`].
    ///
    /// Returns the number of packets handed to `consumer`.
    pub fn drain<T, F>(&self, transport: &mut T, mut consumer: F) -> usize
    where
        T: Transport + ?Sized,
        F: FnMut(DecodedPacket),
    {
        let _timer = Timer::start("pipeline_drain");
        let mut delivered = 0;
        while let Some(packet) = transport.receive() {
            if let Some(decoded) = self.process(&packet) {
                consumer(decoded);
                delivered += 1;
            }
        }
        delivered
    }
}
