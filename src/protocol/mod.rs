//! # Protocol Layer
//!
//! Game packet payloads, the tag-dispatch decoder and the receive pipeline.
//!
//! ## Components
//! - **Messages**: fixed-layout payload structs, one per packet type
//! - **Event**: tagged union handed to the application
//! - **Decoder**: 256-slot dispatch table keyed by packet tag
//! - **Registry**: default handler set for every game packet type
//! - **Encoder**: sequence-numbering send side
//! - **Pipeline**: validate, decode, drop malformed input
//! - **Shared**: snapshot-swap decoder for runtime re-registration

pub mod decoder;
pub mod encoder;
pub mod event;
pub mod messages;
pub mod pipeline;
pub mod registry;
pub mod shared;
