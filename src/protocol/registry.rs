//! Binds every game packet type to its decode function.

use crate::core::payload::FixedPayload;
use crate::core::serializer::PacketSerializer;
use crate::protocol::decoder::Decoder;
use crate::protocol::event::Event;
use crate::protocol::messages::*;
use tracing::{debug, info};

/// Decode the payload after the header as a `P` and wrap it in an [`Event`].
///
/// A buffer too short for `P` yields [`Event::Empty`].
pub fn decode_payload<P>(packet: &[u8]) -> Event
where
    P: FixedPayload + Into<Event>,
{
    match PacketSerializer::deserialize_payload::<P>(packet) {
        Ok(payload) => payload.into(),
        Err(e) => {
            debug!(packet_type = %P::PACKET_TYPE, error = %e, "payload decode failed");
            Event::Empty
        }
    }
}

/// Register `P` under its own tag with a size-checked handler.
pub fn register<P>(decoder: &mut Decoder)
where
    P: FixedPayload + Into<Event> + 'static,
{
    decoder.register_payload::<P, _>(P::PACKET_TYPE.tag(), decode_payload::<P>);
}

/// Register every game packet type. Run once at startup, before traffic.
pub fn setup_decoder(decoder: &mut Decoder) {
    // TCP
    register::<LoginRequest>(decoder);
    register::<LoginResponse>(decoder);
    register::<LobbyCreate>(decoder);
    register::<LobbyJoinRequest>(decoder);
    register::<LobbyJoinResponse>(decoder);
    register::<LobbyListRequest>(decoder);
    register::<LobbyListResponse>(decoder);
    register::<PlayerReady>(decoder);
    register::<LobbyUpdate>(decoder);
    register::<LobbyLeave>(decoder);
    register::<LobbyStart>(decoder);
    register::<ChatMessage>(decoder);
    register::<LobbyKick>(decoder);
    register::<GameStart>(decoder);
    register::<GameEnd>(decoder);
    register::<ClientLeave>(decoder);
    register::<ErrorMessage>(decoder);

    // UDP
    register::<PlayerInput>(decoder);
    register::<Auth>(decoder);
    register::<BossSpawn>(decoder);
    register::<BossUpdate>(decoder);
    register::<EnemyHit>(decoder);
    register::<ForceState>(decoder);
    register::<LevelTransition>(decoder);

    info!(handlers = decoder.registered_count(), "decoder ready");
}
