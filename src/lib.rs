//! # R-Type Protocol
//!
//! Binary packet protocol for the R-Type multiplayer game: a fixed 14-byte
//! header, fixed-layout payloads, and a decoder that dispatches each packet to
//! the handler registered for its one-byte type tag.
//!
//! ## Layers
//! - [`crate::core`]: header, packet types, payload trait, serializer, stream codec
//! - [`protocol`]: game messages, events, decoder, encoder, pipeline
//! - [`transport`]: byte movers feeding the pipeline
//! - [`utils`]: logging setup, metrics, sequence numbers
//!
//! ## Example
//! ```
//! use rtype_protocol::protocol::messages::Auth;
//! use rtype_protocol::{Decoder, Event, PacketEncoder};
//!
//! let decoder = Decoder::with_default_handlers();
//! let encoder = PacketEncoder::new();
//!
//! let packet = encoder.encode(&Auth { player_id: 7 });
//! let decoded = decoder.decode_packet(&packet).unwrap();
//! assert_eq!(decoded.event, Event::Auth(Auth { player_id: 7 }));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

pub use crate::config::{CodecConfig, LoggingConfig, ProtocolConfig, MAGIC_NUMBER};
pub use crate::core::codec::PacketCodec;
pub use crate::core::header::{PacketFlags, PacketHeader, HEADER_SIZE};
pub use crate::core::packet_type::PacketType;
pub use crate::core::payload::{FixedPayload, FixedString};
pub use crate::core::serializer::PacketSerializer;
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::decoder::Decoder;
pub use crate::protocol::encoder::PacketEncoder;
pub use crate::protocol::event::{DecodedPacket, Event};
pub use crate::protocol::pipeline::Pipeline;
pub use crate::protocol::shared::SharedDecoder;
pub use crate::transport::Transport;
