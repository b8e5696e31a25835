//! Outgoing side of the protocol: payloads and events to packet buffers.

use crate::core::payload::FixedPayload;
use crate::core::serializer::PacketSerializer;
use crate::protocol::event::Event;
use crate::utils::metrics::global_metrics;
use crate::utils::sequence::SequenceCounter;
use tracing::trace;

/// Serializes outgoing packets and stamps each with the next sequence number.
///
/// One encoder per connection and direction keeps sequences dense.
#[derive(Debug, Default)]
pub struct PacketEncoder {
    sequence: SequenceCounter,
}

impl PacketEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            sequence: SequenceCounter::starting_at(first),
        }
    }

    /// Sequence number the next packet will carry.
    pub fn next_sequence(&self) -> u32 {
        self.sequence.peek()
    }

    /// Serialize `payload` under its own packet type.
    pub fn encode<P: FixedPayload>(&self, payload: &P) -> Vec<u8> {
        let sequence = self.sequence.next();
        let packet = PacketSerializer::serialize(P::PACKET_TYPE.tag(), payload, sequence);
        trace!(packet_type = %P::PACKET_TYPE, sequence, "encoded packet");
        global_metrics().packet_encoded(packet.len() as u64);
        packet
    }

    /// Serialize the payload carried by `event`.
    ///
    /// Returns `None` for [`Event::Empty`] without consuming a sequence number.
    pub fn encode_event(&self, event: &Event) -> Option<Vec<u8>> {
        if event.is_empty() {
            return None;
        }
        let packet = event.to_packet(self.sequence.next())?;
        global_metrics().packet_encoded(packet.len() as u64);
        Some(packet)
    }
}
