//! # Fixed-Layout Payloads
//!
//! A payload is a structure with a compile-time byte size and an explicit
//! field-by-field codec. There are no variable-length fields: text goes into a
//! [`FixedString`], lists into a fixed-capacity array plus a count.
//!
//! Multi-byte integers and floats are big-endian, like the header.

use crate::core::packet_type::PacketType;
use crate::error::{ProtocolError, Result};
use bytes::{Buf, BufMut};
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

/// A payload with a fixed wire size.
pub trait FixedPayload: Sized {
    /// Tag this payload is normally sent under.
    const PACKET_TYPE: PacketType;

    /// Exact number of bytes written by [`FixedPayload::encode`].
    const SIZE: usize;

    /// Append exactly `SIZE` bytes to `out`.
    fn encode<B: BufMut>(&self, out: &mut B);

    /// Read exactly `SIZE` bytes from `buf`.
    ///
    /// Callers guarantee `buf.remaining() >= SIZE`; the serializer checks the
    /// length before calling this.
    fn decode<B: Buf>(buf: &mut B) -> Self;
}

/// Zero-padded UTF-8 text stored in exactly `N` bytes.
///
/// The text ends at the first zero byte, so it cannot itself contain `\0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedString<const N: usize>([u8; N]);

impl<const N: usize> FixedString<N> {
    /// Wire size in bytes.
    pub const CAPACITY: usize = N;

    /// Store `text`, failing when it does not fit or contains `\0`.
    pub fn new(text: &str) -> Result<Self> {
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(ProtocolError::InteriorNul { position });
        }
        if text.len() > N {
            return Err(ProtocolError::FieldTooLong {
                capacity: N,
                actual: text.len(),
            });
        }
        Ok(Self::from_fitting(text.as_bytes()))
    }

    /// Store as much of `text` as fits, cutting on a char boundary and
    /// stopping at the first `\0`.
    pub fn truncated(text: &str) -> Self {
        let text = text.split('\0').next().unwrap_or_default();
        let mut end = text.len().min(N);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self::from_fitting(&text.as_bytes()[..end])
    }

    fn from_fitting(bytes: &[u8]) -> Self {
        let mut raw = [0u8; N];
        raw[..bytes.len()].copy_from_slice(bytes);
        Self(raw)
    }

    /// Bytes up to the first zero.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        &self.0[..end]
    }

    /// Text content; fails if a peer sent bytes that are not UTF-8.
    pub fn as_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.0.first().map_or(true, |&b| b == 0)
    }

    pub fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_slice(&self.0);
    }

    pub fn decode<B: Buf>(buf: &mut B) -> Self {
        let mut raw = [0u8; N];
        buf.copy_to_slice(&mut raw);
        Self(raw)
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[inline]
pub(crate) fn put_bool<B: BufMut>(out: &mut B, value: bool) {
    out.put_u8(u8::from(value));
}

/// Any non-zero byte reads as `true`.
#[inline]
pub(crate) fn get_bool<B: Buf>(buf: &mut B) -> bool {
    buf.get_u8() != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_fixed_string_pads_with_zeros() {
        let name = FixedString::<8>::new("nova").unwrap();
        let mut out = Vec::new();
        name.encode(&mut out);
        assert_eq!(out, b"nova\0\0\0\0");
        assert_eq!(name.as_str().unwrap(), "nova");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_fixed_string_full_capacity() {
        let name = FixedString::<4>::new("abcd").unwrap();
        assert_eq!(name.as_bytes(), b"abcd");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_fixed_string_too_long() {
        let result = FixedString::<4>::new("abcde");
        assert!(matches!(
            result,
            Err(ProtocolError::FieldTooLong {
                capacity: 4,
                actual: 5
            })
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_truncated_respects_char_boundary() {
        // "é" is two bytes; a 4-byte cut would split the second one
        let text = FixedString::<4>::truncated("aéé");
        assert_eq!(text.as_str().unwrap(), "aé");
    }

    #[test]
    fn test_invalid_utf8_from_peer() {
        let mut wire: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
        let text = FixedString::<4>::decode(&mut wire);
        assert!(text.as_str().is_err());
        assert_eq!(text.to_string_lossy(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_fixed_string_rejects_nul() {
        assert!(matches!(
            FixedString::<32>::new("gg\0 see you next round"),
            Err(ProtocolError::InteriorNul { position: 2 })
        ));
        assert!(matches!(
            FixedString::<32>::new("\0admin"),
            Err(ProtocolError::InteriorNul { position: 0 })
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_truncated_stops_at_nul() {
        let text = FixedString::<8>::truncated("gg\0tail");
        assert_eq!(text.as_str().unwrap(), "gg");
        assert!(FixedString::<8>::truncated("\0admin").is_empty());
    }

    #[test]
    fn test_bool_reads_any_nonzero() {
        let mut wire: &[u8] = &[0x00, 0x01, 0x7F];
        assert!(!get_bool(&mut wire));
        assert!(get_bool(&mut wire));
        assert!(get_bool(&mut wire));
    }
}
