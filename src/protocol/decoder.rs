use crate::core::header::HEADER_SIZE;
use crate::core::payload::FixedPayload;
use crate::core::serializer::PacketSerializer;
use crate::error::{ProtocolError, Result};
use crate::protocol::event::{DecodedPacket, Event};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Signature of a decode function: whole packet buffer in, event out.
pub type DecodeFn = dyn Fn(&[u8]) -> Event + Send + Sync + 'static;

/// Number of slots in the dispatch table, one per possible tag.
pub const TABLE_SIZE: usize = 256;

#[derive(Clone)]
struct HandlerEntry {
    decode: Arc<DecodeFn>,
    /// Payload size the header must announce, when the handler is tied to a
    /// fixed-layout payload.
    expected_size: Option<usize>,
}

/// Packet decoder with a 256-slot dispatch table indexed by the raw tag.
///
/// Registration takes `&mut self`; once the table is built, share the decoder
/// behind an `Arc` and decode from any thread. Hosts that need to change
/// handlers while decoding use [`SharedDecoder`](crate::protocol::shared::SharedDecoder).
#[derive(Clone)]
pub struct Decoder {
    handlers: Box<[Option<HandlerEntry>; TABLE_SIZE]>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Decoder with an empty table.
    pub fn new() -> Self {
        Self {
            handlers: Box::new(std::array::from_fn(|_| None)),
        }
    }

    /// Decoder with every game packet type registered.
    pub fn with_default_handlers() -> Self {
        let mut decoder = Self::new();
        crate::protocol::registry::setup_decoder(&mut decoder);
        decoder
    }

    /// Install `handler` for `tag`, replacing any previous one.
    ///
    /// No payload size is attached, so [`Decoder::decode_packet`] accepts any
    /// size the header announces for this tag.
    pub fn register_handler<F>(&mut self, tag: u8, handler: F)
    where
        F: Fn(&[u8]) -> Event + Send + Sync + 'static,
    {
        self.install(
            tag,
            HandlerEntry {
                decode: Arc::new(handler),
                expected_size: None,
            },
        );
    }

    /// Install `handler` for `tag` and tie it to payload `P`.
    ///
    /// [`Decoder::decode_packet`] rejects packets for this tag whose header
    /// size differs from `P::SIZE`.
    pub fn register_payload<P, F>(&mut self, tag: u8, handler: F)
    where
        P: FixedPayload,
        F: Fn(&[u8]) -> Event + Send + Sync + 'static,
    {
        self.install(
            tag,
            HandlerEntry {
                decode: Arc::new(handler),
                expected_size: Some(P::SIZE),
            },
        );
    }

    fn install(&mut self, tag: u8, entry: HandlerEntry) {
        let slot = &mut self.handlers[usize::from(tag)];
        if slot.is_some() {
            debug!(tag, "replacing decode handler");
        }
        *slot = Some(entry);
    }

    /// Remove the handler for `tag`. Returns `true` if one was installed.
    pub fn unregister(&mut self, tag: u8) -> bool {
        self.handlers[usize::from(tag)].take().is_some()
    }

    pub fn is_registered(&self, tag: u8) -> bool {
        self.handlers[usize::from(tag)].is_some()
    }

    /// Payload size tied to `tag`, if it was registered with one.
    pub fn expected_size(&self, tag: u8) -> Option<usize> {
        self.handlers[usize::from(tag)]
            .as_ref()
            .and_then(|entry| entry.expected_size)
    }

    pub fn registered_count(&self) -> usize {
        self.handlers.iter().filter(|slot| slot.is_some()).count()
    }

    /// Tags with an installed handler, in ascending order.
    pub fn registered_tags(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&tag| self.is_registered(tag))
    }

    /// Dispatch on the first byte of `packet`.
    ///
    /// Returns [`Event::Empty`] for an empty buffer or an unregistered tag;
    /// otherwise the handler's result on the whole buffer. The header is not
    /// validated here: callers feeding network input should go through
    /// [`Decoder::decode_packet`] instead.
    pub fn decode(&self, packet: &[u8]) -> Event {
        let Some(&tag) = packet.first() else {
            return Event::Empty;
        };

        match &self.handlers[usize::from(tag)] {
            Some(entry) => (entry.decode)(packet),
            None => {
                trace!(tag, "no decode handler");
                Event::Empty
            }
        }
    }

    /// Validate the header of `packet` and dispatch on its type tag.
    ///
    /// Fails with:
    /// - `TruncatedBuffer` / `BadMagic` from header validation, or when the
    ///   buffer holds fewer payload bytes than the header announces
    /// - `UnknownType` when no handler is registered for the tag
    /// - `PayloadSizeMismatch` when the announced size differs from the size
    ///   the handler was registered with, or trailing bytes follow the payload
    pub fn decode_packet(&self, packet: &[u8]) -> Result<DecodedPacket> {
        let header = PacketSerializer::deserialize(packet)?;

        let entry = self.handlers[usize::from(header.packet_type)]
            .as_ref()
            .ok_or(ProtocolError::UnknownType(header.packet_type))?;

        if let Some(expected) = entry.expected_size {
            if header.payload_len() != expected {
                return Err(ProtocolError::PayloadSizeMismatch {
                    packet_type: header.packet_type,
                    expected,
                    actual: header.payload_len(),
                });
            }
        }

        let required = header.packet_len();
        if packet.len() < required {
            return Err(ProtocolError::TruncatedBuffer {
                actual: packet.len(),
                required,
            });
        }
        if packet.len() > required {
            return Err(ProtocolError::PayloadSizeMismatch {
                packet_type: header.packet_type,
                expected: header.payload_len(),
                actual: packet.len() - HEADER_SIZE,
            });
        }

        trace!(
            packet_type = header.packet_type,
            sequence = header.sequence,
            "dispatching packet"
        );
        let event = (entry.decode)(packet);
        Ok(DecodedPacket { header, event })
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("registered", &self.registered_tags().collect::<Vec<_>>())
            .finish()
    }
}
