//! # Core Protocol Components
//!
//! Low-level packet handling: header layout, fixed-layout payloads, the
//! serializer and the stream codec.
//!
//! ## Components
//! - **Header**: 14-byte header with magic, type, flags, sequence and size
//! - **PacketType**: known packet tags
//! - **Payload**: `FixedPayload` trait and fixed-capacity text
//! - **Serializer**: packet encode, header validation, payload decode
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Magic(4)] [Type(1)] [Flags(1)] [Sequence(4)] [Size(4)] [Payload(Size)]
//! ```
//! All multi-byte fields are big-endian.

pub mod codec;
pub mod header;
pub mod packet_type;
pub mod payload;
pub mod serializer;
