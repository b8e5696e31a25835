//! Packet type tags known to the game.

use std::fmt;

/// Every packet type with a registered payload.
///
/// Tags below `0x20` travel over the game's TCP channel, tags from `0x20` up
/// over UDP. Gaps (`0x0E`, `0x21`) belong to map transfer and world-state
/// messages whose bodies are variable-length and have no fixed layout here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PacketType {
    LoginRequest = 0x01,
    LoginResponse = 0x02,
    LobbyCreate = 0x03,
    LobbyJoinRequest = 0x04,
    LobbyJoinResponse = 0x05,
    LobbyListRequest = 0x06,
    LobbyListResponse = 0x07,
    PlayerReady = 0x08,
    LobbyUpdate = 0x09,
    LobbyLeave = 0x0A,
    LobbyStart = 0x0B,
    ChatMessage = 0x0C,
    LobbyKick = 0x0D,
    GameStart = 0x0F,
    GameEnd = 0x10,
    ClientLeave = 0x11,
    Error = 0x12,
    PlayerInput = 0x20,
    Auth = 0x22,
    BossSpawn = 0x23,
    BossUpdate = 0x24,
    EnemyHit = 0x25,
    ForceState = 0x26,
    LevelTransition = 0x27,
}

impl PacketType {
    /// All known packet types, in tag order.
    pub const ALL: [PacketType; 24] = [
        PacketType::LoginRequest,
        PacketType::LoginResponse,
        PacketType::LobbyCreate,
        PacketType::LobbyJoinRequest,
        PacketType::LobbyJoinResponse,
        PacketType::LobbyListRequest,
        PacketType::LobbyListResponse,
        PacketType::PlayerReady,
        PacketType::LobbyUpdate,
        PacketType::LobbyLeave,
        PacketType::LobbyStart,
        PacketType::ChatMessage,
        PacketType::LobbyKick,
        PacketType::GameStart,
        PacketType::GameEnd,
        PacketType::ClientLeave,
        PacketType::Error,
        PacketType::PlayerInput,
        PacketType::Auth,
        PacketType::BossSpawn,
        PacketType::BossUpdate,
        PacketType::EnemyHit,
        PacketType::ForceState,
        PacketType::LevelTransition,
    ];

    /// Raw wire tag.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a packet type by its wire tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(PacketType::LoginRequest),
            0x02 => Some(PacketType::LoginResponse),
            0x03 => Some(PacketType::LobbyCreate),
            0x04 => Some(PacketType::LobbyJoinRequest),
            0x05 => Some(PacketType::LobbyJoinResponse),
            0x06 => Some(PacketType::LobbyListRequest),
            0x07 => Some(PacketType::LobbyListResponse),
            0x08 => Some(PacketType::PlayerReady),
            0x09 => Some(PacketType::LobbyUpdate),
            0x0A => Some(PacketType::LobbyLeave),
            0x0B => Some(PacketType::LobbyStart),
            0x0C => Some(PacketType::ChatMessage),
            0x0D => Some(PacketType::LobbyKick),
            0x0F => Some(PacketType::GameStart),
            0x10 => Some(PacketType::GameEnd),
            0x11 => Some(PacketType::ClientLeave),
            0x12 => Some(PacketType::Error),
            0x20 => Some(PacketType::PlayerInput),
            0x22 => Some(PacketType::Auth),
            0x23 => Some(PacketType::BossSpawn),
            0x24 => Some(PacketType::BossUpdate),
            0x25 => Some(PacketType::EnemyHit),
            0x26 => Some(PacketType::ForceState),
            0x27 => Some(PacketType::LevelTransition),
            _ => None,
        }
    }

    /// Returns `true` for types the game sends over its datagram channel.
    #[inline]
    pub const fn is_datagram(self) -> bool {
        self.tag() >= 0x20
    }

    /// Upper snake case name, matching the game's message catalogue.
    pub const fn name(self) -> &'static str {
        match self {
            PacketType::LoginRequest => "LOGIN_REQUEST",
            PacketType::LoginResponse => "LOGIN_RESPONSE",
            PacketType::LobbyCreate => "LOBBY_CREATE",
            PacketType::LobbyJoinRequest => "LOBBY_JOIN_REQUEST",
            PacketType::LobbyJoinResponse => "LOBBY_JOIN_RESPONSE",
            PacketType::LobbyListRequest => "LOBBY_LIST_REQUEST",
            PacketType::LobbyListResponse => "LOBBY_LIST_RESPONSE",
            PacketType::PlayerReady => "PLAYER_READY",
            PacketType::LobbyUpdate => "LOBBY_UPDATE",
            PacketType::LobbyLeave => "LOBBY_LEAVE",
            PacketType::LobbyStart => "LOBBY_START",
            PacketType::ChatMessage => "MESSAGE",
            PacketType::LobbyKick => "LOBBY_KICK",
            PacketType::GameStart => "GAME_START",
            PacketType::GameEnd => "GAME_END",
            PacketType::ClientLeave => "CLIENT_LEAVE",
            PacketType::Error => "ERROR",
            PacketType::PlayerInput => "PLAYER_INPUT",
            PacketType::Auth => "AUTH",
            PacketType::BossSpawn => "BOSS_SPAWN",
            PacketType::BossUpdate => "BOSS_UPDATE",
            PacketType::EnemyHit => "ENEMY_HIT",
            PacketType::ForceState => "FORCE_STATE",
            PacketType::LevelTransition => "LEVEL_TRANSITION",
        }
    }
}

impl From<PacketType> for u8 {
    fn from(value: PacketType) -> Self {
        value.tag()
    }
}

impl TryFrom<u8> for PacketType {
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, u8> {
        PacketType::from_tag(tag).ok_or(tag)
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#04x})", self.name(), self.tag())
    }
}
