//! # Packet Header
//!
//! The fixed 14-byte header that opens every packet.
//!
//! Fields are packed one by one in network byte order; the in-memory layout of
//! [`PacketHeader`] is never copied onto the wire, so the format does not depend
//! on compiler padding or host endianness.
//!
//! ```text
//! [Magic(4)] [Type(1)] [Flags(1)] [Sequence(4)] [Size(4)] [Payload(Size)]
//! ```

use crate::config::MAGIC_NUMBER;
use crate::error::{ProtocolError, Result};
use bytes::{Buf, BufMut};

/// Total size of the fixed-length header
pub const HEADER_SIZE: usize = 4 + 1 + 1 + 4 + 4;

/// Reserved header flags.
///
/// No bit has a meaning yet. Senders write zero; receivers keep whatever bits
/// arrived so a relay can forward them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PacketFlags(u8);

impl PacketFlags {
    /// Flags with no bit set, as written by this crate.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Decoded packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// Must equal [`MAGIC_NUMBER`] for the packet to be accepted.
    pub magic: u32,
    /// Packet type tag used for dispatch.
    pub packet_type: u8,
    pub flags: PacketFlags,
    /// Sender-assigned counter. Ordering and dedup are up to the consumer.
    pub sequence: u32,
    /// Payload length in bytes.
    pub size: u32,
}

impl PacketHeader {
    /// Header for an outgoing packet with cleared flags.
    pub const fn new(packet_type: u8, sequence: u32, size: u32) -> Self {
        Self {
            magic: MAGIC_NUMBER,
            packet_type,
            flags: PacketFlags::empty(),
            sequence,
            size,
        }
    }

    /// Payload length as a `usize`.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.size as usize
    }

    /// Header plus payload length.
    #[inline]
    pub fn packet_len(&self) -> usize {
        HEADER_SIZE.saturating_add(self.payload_len())
    }

    /// Append the header to `out`, field by field.
    pub fn write_to<B: BufMut>(&self, out: &mut B) {
        out.put_u32(self.magic);
        out.put_u8(self.packet_type);
        out.put_u8(self.flags.raw());
        out.put_u32(self.sequence);
        out.put_u32(self.size);
    }

    /// Parse the first [`HEADER_SIZE`] bytes of `buf` without checking the magic.
    pub fn read_from(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(ProtocolError::TruncatedBuffer {
                actual: buf.len(),
                required: HEADER_SIZE,
            });
        }

        let mut cursor = &buf[..HEADER_SIZE];
        Ok(Self {
            magic: cursor.get_u32(),
            packet_type: cursor.get_u8(),
            flags: PacketFlags::from_raw(cursor.get_u8()),
            sequence: cursor.get_u32(),
            size: cursor.get_u32(),
        })
    }

    /// Returns `true` when the magic matches the protocol constant.
    #[inline]
    pub fn has_valid_magic(&self) -> bool {
        self.magic == MAGIC_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout_is_big_endian() {
        let header = PacketHeader::new(0x02, 0x0102_0304, 0x0000_0047);
        let mut out = Vec::new();
        header.write_to(&mut out);

        assert_eq!(out.len(), HEADER_SIZE);
        assert_eq!(&out[0..4], b"RTYP");
        assert_eq!(out[4], 0x02);
        assert_eq!(out[5], 0x00);
        assert_eq!(&out[6..10], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&out[10..14], &[0x00, 0x00, 0x00, 0x47]);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_read_preserves_unknown_flags() {
        let mut header = PacketHeader::new(0x20, 7, 5);
        header.flags = PacketFlags::from_raw(0b1010_0000);
        let mut out = Vec::new();
        header.write_to(&mut out);

        let parsed = PacketHeader::read_from(&out).unwrap();
        assert_eq!(parsed.flags.raw(), 0b1010_0000);
        assert!(!parsed.flags.is_empty());
    }

    #[test]
    fn test_read_short_buffer() {
        let result = PacketHeader::read_from(&[0u8; HEADER_SIZE - 1]);
        assert!(matches!(
            result,
            Err(ProtocolError::TruncatedBuffer {
                actual: 13,
                required: 14
            })
        ));
    }
}
