//! # Events
//!
//! Application-level messages produced by decoding. An event is built fresh for
//! each incoming packet and handed to the consumer once.

use crate::core::header::PacketHeader;
use crate::core::packet_type::PacketType;
use crate::core::payload::FixedPayload;
use crate::core::serializer::PacketSerializer;
use crate::protocol::messages::*;

/// Tagged union over every decodable payload.
///
/// `Empty` is what decoding yields when there is nothing to deliver: an empty
/// buffer, an unregistered tag, or a payload the decode function rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Event {
    #[default]
    Empty,
    LoginRequest(LoginRequest),
    LoginResponse(LoginResponse),
    LobbyCreate(LobbyCreate),
    LobbyJoinRequest(LobbyJoinRequest),
    LobbyJoinResponse(LobbyJoinResponse),
    LobbyListRequest(LobbyListRequest),
    /// Boxed: the lobby table dwarfs every other payload.
    LobbyListResponse(Box<LobbyListResponse>),
    PlayerReady(PlayerReady),
    LobbyUpdate(LobbyUpdate),
    LobbyLeave(LobbyLeave),
    LobbyStart(LobbyStart),
    ChatMessage(ChatMessage),
    LobbyKick(LobbyKick),
    GameStart(GameStart),
    GameEnd(GameEnd),
    ClientLeave(ClientLeave),
    Error(ErrorMessage),
    PlayerInput(PlayerInput),
    Auth(Auth),
    BossSpawn(BossSpawn),
    BossUpdate(BossUpdate),
    EnemyHit(EnemyHit),
    ForceState(ForceState),
    LevelTransition(LevelTransition),
}

impl Event {
    /// Packet type of the carried payload; `None` for [`Event::Empty`].
    pub fn packet_type(&self) -> Option<PacketType> {
        let packet_type = match self {
            Event::Empty => return None,
            Event::LoginRequest(_) => PacketType::LoginRequest,
            Event::LoginResponse(_) => PacketType::LoginResponse,
            Event::LobbyCreate(_) => PacketType::LobbyCreate,
            Event::LobbyJoinRequest(_) => PacketType::LobbyJoinRequest,
            Event::LobbyJoinResponse(_) => PacketType::LobbyJoinResponse,
            Event::LobbyListRequest(_) => PacketType::LobbyListRequest,
            Event::LobbyListResponse(_) => PacketType::LobbyListResponse,
            Event::PlayerReady(_) => PacketType::PlayerReady,
            Event::LobbyUpdate(_) => PacketType::LobbyUpdate,
            Event::LobbyLeave(_) => PacketType::LobbyLeave,
            Event::LobbyStart(_) => PacketType::LobbyStart,
            Event::ChatMessage(_) => PacketType::ChatMessage,
            Event::LobbyKick(_) => PacketType::LobbyKick,
            Event::GameStart(_) => PacketType::GameStart,
            Event::GameEnd(_) => PacketType::GameEnd,
            Event::ClientLeave(_) => PacketType::ClientLeave,
            Event::Error(_) => PacketType::Error,
            Event::PlayerInput(_) => PacketType::PlayerInput,
            Event::Auth(_) => PacketType::Auth,
            Event::BossSpawn(_) => PacketType::BossSpawn,
            Event::BossUpdate(_) => PacketType::BossUpdate,
            Event::EnemyHit(_) => PacketType::EnemyHit,
            Event::ForceState(_) => PacketType::ForceState,
            Event::LevelTransition(_) => PacketType::LevelTransition,
        };
        Some(packet_type)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Event::Empty)
    }

    /// Serialize the carried payload under its own packet type.
    ///
    /// Returns `None` for [`Event::Empty`].
    pub fn to_packet(&self, sequence: u32) -> Option<Vec<u8>> {
        fn pack<P: FixedPayload>(payload: &P, sequence: u32) -> Vec<u8> {
            PacketSerializer::serialize(P::PACKET_TYPE.tag(), payload, sequence)
        }

        let packet = match self {
            Event::Empty => return None,
            Event::LoginRequest(p) => pack(p, sequence),
            Event::LoginResponse(p) => pack(p, sequence),
            Event::LobbyCreate(p) => pack(p, sequence),
            Event::LobbyJoinRequest(p) => pack(p, sequence),
            Event::LobbyJoinResponse(p) => pack(p, sequence),
            Event::LobbyListRequest(p) => pack(p, sequence),
            Event::LobbyListResponse(p) => pack(p.as_ref(), sequence),
            Event::PlayerReady(p) => pack(p, sequence),
            Event::LobbyUpdate(p) => pack(p, sequence),
            Event::LobbyLeave(p) => pack(p, sequence),
            Event::LobbyStart(p) => pack(p, sequence),
            Event::ChatMessage(p) => pack(p, sequence),
            Event::LobbyKick(p) => pack(p, sequence),
            Event::GameStart(p) => pack(p, sequence),
            Event::GameEnd(p) => pack(p, sequence),
            Event::ClientLeave(p) => pack(p, sequence),
            Event::Error(p) => pack(p, sequence),
            Event::PlayerInput(p) => pack(p, sequence),
            Event::Auth(p) => pack(p, sequence),
            Event::BossSpawn(p) => pack(p, sequence),
            Event::BossUpdate(p) => pack(p, sequence),
            Event::EnemyHit(p) => pack(p, sequence),
            Event::ForceState(p) => pack(p, sequence),
            Event::LevelTransition(p) => pack(p, sequence),
        };
        Some(packet)
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Event {
                fn from(payload: $payload) -> Self {
                    Event::$variant(payload)
                }
            }
        )*
    };
}

impl_from_payload! {
    LoginRequest => LoginRequest,
    LoginResponse => LoginResponse,
    LobbyCreate => LobbyCreate,
    LobbyJoinRequest => LobbyJoinRequest,
    LobbyJoinResponse => LobbyJoinResponse,
    LobbyListRequest => LobbyListRequest,
    PlayerReady => PlayerReady,
    LobbyUpdate => LobbyUpdate,
    LobbyLeave => LobbyLeave,
    LobbyStart => LobbyStart,
    ChatMessage => ChatMessage,
    LobbyKick => LobbyKick,
    GameStart => GameStart,
    GameEnd => GameEnd,
    ClientLeave => ClientLeave,
    ErrorMessage => Error,
    PlayerInput => PlayerInput,
    Auth => Auth,
    BossSpawn => BossSpawn,
    BossUpdate => BossUpdate,
    EnemyHit => EnemyHit,
    ForceState => ForceState,
    LevelTransition => LevelTransition,
}

impl From<LobbyListResponse> for Event {
    fn from(payload: LobbyListResponse) -> Self {
        Event::LobbyListResponse(Box::new(payload))
    }
}

/// A validated header together with the event decoded from its packet.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    pub header: PacketHeader,
    pub event: Event,
}

impl DecodedPacket {
    #[inline]
    pub fn sequence(&self) -> u32 {
        self.header.sequence
    }
}
