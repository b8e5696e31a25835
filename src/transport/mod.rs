//! # Transport Layer
//!
//! Byte movers underneath the decoder. A transport delivers whole packet
//! buffers and never looks inside them.
//!
//! ## Available Transports
//! - **Memory**: in-process loopback pair, for tests and local simulation
//! - **Framed**: async adapter that frames any byte stream with [`PacketCodec`]
//!
//! [`PacketCodec`]: crate::core::codec::PacketCodec

use crate::error::Result;

pub mod framed;
pub mod memory;

/// Source and sink of whole packet buffers.
pub trait Transport {
    /// Next pending packet buffer, or `None` when nothing is waiting.
    fn receive(&mut self) -> Option<Vec<u8>>;

    /// Queue `packet` for the peer.
    fn send(&mut self, packet: &[u8]) -> Result<()>;
}
