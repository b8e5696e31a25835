//! # Packet Serializer
//!
//! Builds and validates `header + payload` buffers.
//!
//! ## Responsibilities
//! - Encode a fixed-layout payload behind a fresh header
//! - Validate the header of an incoming buffer (length, magic)
//! - Decode a payload from the bytes following the header
//!
//! The serializer never checks that a tag and a payload type belong together:
//! `deserialize_payload::<P>` trusts the caller to have picked `P` from the
//! header's tag. The decoder's size-checked registrations are what catch a
//! mismatched pairing in the full pipeline.

use crate::core::header::{PacketHeader, HEADER_SIZE};
use crate::core::payload::FixedPayload;
use crate::error::{ProtocolError, Result};

/// Stateless entry point for packet encoding and header validation.
pub struct PacketSerializer;

impl PacketSerializer {
    /// Serialize `payload` under `packet_type` with the given sequence number.
    ///
    /// The result is exactly `HEADER_SIZE + P::SIZE` bytes, flags are zero and
    /// the header's size field is `P::SIZE`.
    pub fn serialize<P: FixedPayload>(packet_type: u8, payload: &P, sequence: u32) -> Vec<u8> {
        let mut packet = Vec::with_capacity(HEADER_SIZE + P::SIZE);
        PacketHeader::new(packet_type, sequence, P::SIZE as u32).write_to(&mut packet);
        payload.encode(&mut packet);

        debug_assert_eq!(packet.len(), HEADER_SIZE + P::SIZE);
        packet
    }

    /// Parse and validate the header at the start of `data`.
    ///
    /// The payload is not inspected.
    pub fn deserialize(data: &[u8]) -> Result<PacketHeader> {
        let header = PacketHeader::read_from(data)?;

        if !header.has_valid_magic() {
            return Err(ProtocolError::BadMagic(header.magic));
        }

        Ok(header)
    }

    /// Decode the payload following the header as a `P`.
    ///
    /// Only the length is checked; the header must already have been
    /// validated by [`PacketSerializer::deserialize`].
    pub fn deserialize_payload<P: FixedPayload>(data: &[u8]) -> Result<P> {
        let required = HEADER_SIZE + P::SIZE;
        if data.len() < required {
            return Err(ProtocolError::TruncatedBuffer {
                actual: data.len(),
                required,
            });
        }

        let mut payload = &data[HEADER_SIZE..required];
        Ok(P::decode(&mut payload))
    }
}
