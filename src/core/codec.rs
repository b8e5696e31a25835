//! # Packet Codec
//!
//! `tokio_util` codec that cuts a byte stream into whole packets.
//!
//! The header's size field is the only framing: once `HEADER_SIZE + size` bytes
//! are buffered the codec hands the complete packet buffer (header included) to
//! the caller. Payloads are not interpreted here.

use crate::config::{CodecConfig, DEFAULT_MAX_PAYLOAD_SIZE};
use crate::core::header::HEADER_SIZE;
use crate::core::serializer::PacketSerializer;
use crate::error::{ProtocolError, Result};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

/// Stream framing codec for R-Type packets.
#[derive(Debug, Clone, Copy)]
pub struct PacketCodec {
    max_payload_size: usize,
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAYLOAD_SIZE)
    }
}

impl PacketCodec {
    pub fn new(max_payload_size: usize) -> Self {
        Self { max_payload_size }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.max_payload_size)
    }

    pub fn max_payload_size(&self) -> usize {
        self.max_payload_size
    }
}

impl Decoder for PacketCodec {
    type Item = Bytes;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < HEADER_SIZE {
            return Ok(None);
        }

        let header = PacketSerializer::deserialize(&src[..HEADER_SIZE])?;
        let payload_len = header.payload_len();
        if payload_len > self.max_payload_size {
            return Err(ProtocolError::OversizedPacket(payload_len));
        }

        let total = header.packet_len();
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        trace!(
            packet_type = header.packet_type,
            sequence = header.sequence,
            size = payload_len,
            "framed packet"
        );
        Ok(Some(src.split_to(total).freeze()))
    }
}

impl Encoder<Bytes> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        <Self as Encoder<&[u8]>>::encode(self, item.as_ref(), dst)
    }
}

impl Encoder<&[u8]> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<()> {
        let header = PacketSerializer::deserialize(item)?;
        if header.payload_len() > self.max_payload_size {
            return Err(ProtocolError::OversizedPacket(header.payload_len()));
        }
        if item.len() != header.packet_len() {
            return Err(ProtocolError::PayloadSizeMismatch {
                packet_type: header.packet_type,
                expected: header.payload_len(),
                actual: item.len() - HEADER_SIZE,
            });
        }

        dst.reserve(item.len());
        dst.extend_from_slice(item);
        Ok(())
    }
}
