//! # Game Payloads
//!
//! One fixed-layout struct per packet type. Field order on the wire is the
//! declaration order; sizes are noted beside each `SIZE`.

use crate::core::packet_type::PacketType;
use crate::core::payload::{get_bool, put_bool, FixedPayload, FixedString};
use crate::error::{ProtocolError, Result};
use bytes::{Buf, BufMut};

/// Capacity of user and lobby names.
pub type Name = FixedString<32>;

/// Capacity of short server-side messages (login rejections, errors).
pub type ShortText = FixedString<64>;

/// Capacity of chat lines.
pub type ChatText = FixedString<128>;

/// Players per match; bounds fixed-capacity score and roster tables.
pub const MAX_PLAYERS: usize = 4;

/// Lobbies carried by one [`LobbyListResponse`].
pub const MAX_LISTED_LOBBIES: usize = 16;

/// Copy `entries` into a zero-padded table of `N` slots, returning the fill
/// count alongside it.
fn fill_table<T: Copy + Default, const N: usize>(entries: &[T]) -> Result<(u8, [T; N])> {
    if entries.len() > N {
        return Err(ProtocolError::FieldTooLong {
            capacity: N,
            actual: entries.len(),
        });
    }

    let mut table = [T::default(); N];
    table[..entries.len()].copy_from_slice(entries);
    Ok((entries.len() as u8, table))
}

// -------------------------
// TCP Messages
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginRequest {
    pub username: Name,
    pub password: Name,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        Ok(Self {
            username: Name::new(username)?,
            password: Name::new(password)?,
        })
    }
}

impl FixedPayload for LoginRequest {
    const PACKET_TYPE: PacketType = PacketType::LoginRequest;
    const SIZE: usize = 32 + 32;

    fn encode<B: BufMut>(&self, out: &mut B) {
        self.username.encode(out);
        self.password.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            username: Name::decode(buf),
            password: Name::decode(buf),
        }
    }
}

/// Server answer to a login. On success `player_id` and `udp_port` are set; on
/// failure `error_code` and `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginResponse {
    pub success: bool,
    pub player_id: u16,
    pub udp_port: u16,
    pub error_code: u16,
    pub message: ShortText,
}

impl LoginResponse {
    pub fn accepted(player_id: u16, udp_port: u16) -> Self {
        Self {
            success: true,
            player_id,
            udp_port,
            ..Self::default()
        }
    }

    /// Rejection; `message` is cut to fit.
    pub fn rejected(error_code: u16, message: &str) -> Self {
        Self {
            success: false,
            error_code,
            message: ShortText::truncated(message),
            ..Self::default()
        }
    }
}

impl FixedPayload for LoginResponse {
    const PACKET_TYPE: PacketType = PacketType::LoginResponse;
    const SIZE: usize = 1 + 2 + 2 + 2 + 64;

    fn encode<B: BufMut>(&self, out: &mut B) {
        put_bool(out, self.success);
        out.put_u16(self.player_id);
        out.put_u16(self.udp_port);
        out.put_u16(self.error_code);
        self.message.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            success: get_bool(buf),
            player_id: buf.get_u16(),
            udp_port: buf.get_u16(),
            error_code: buf.get_u16(),
            message: ShortText::decode(buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyCreate {
    pub lobby_name: Name,
    pub player_name: Name,
    /// Empty for an open lobby.
    pub password: Name,
    pub max_players: u8,
    pub difficulty: u8,
}

impl FixedPayload for LobbyCreate {
    const PACKET_TYPE: PacketType = PacketType::LobbyCreate;
    const SIZE: usize = 32 * 3 + 1 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        self.lobby_name.encode(out);
        self.player_name.encode(out);
        self.password.encode(out);
        out.put_u8(self.max_players);
        out.put_u8(self.difficulty);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            lobby_name: Name::decode(buf),
            player_name: Name::decode(buf),
            password: Name::decode(buf),
            max_players: buf.get_u8(),
            difficulty: buf.get_u8(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyJoinRequest {
    pub lobby_id: u16,
    pub name: Name,
    pub password: Name,
}

impl FixedPayload for LobbyJoinRequest {
    const PACKET_TYPE: PacketType = PacketType::LobbyJoinRequest;
    const SIZE: usize = 2 + 32 + 32;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.lobby_id);
        self.name.encode(out);
        self.password.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            lobby_id: buf.get_u16(),
            name: Name::decode(buf),
            password: Name::decode(buf),
        }
    }
}

/// One seat in a lobby roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyPlayer {
    pub player_id: u16,
    pub ready: bool,
    pub username: Name,
}

impl LobbyPlayer {
    const SIZE: usize = 2 + 1 + 32;

    pub fn new(player_id: u16, ready: bool, username: &str) -> Result<Self> {
        Ok(Self {
            player_id,
            ready,
            username: Name::new(username)?,
        })
    }

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
        put_bool(out, self.ready);
        self.username.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
            ready: get_bool(buf),
            username: Name::decode(buf),
        }
    }
}

/// Answer to [`LobbyJoinRequest`]: the roster on success, `error_code` and
/// `error_message` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyJoinResponse {
    pub success: bool,
    pub lobby_id: u16,
    pub player_id: u16,
    player_count: u8,
    players: [LobbyPlayer; MAX_PLAYERS],
    pub error_code: u16,
    pub error_message: ShortText,
}

impl LobbyJoinResponse {
    pub fn accepted(lobby_id: u16, player_id: u16, players: &[LobbyPlayer]) -> Result<Self> {
        let (player_count, players) = fill_table(players)?;
        Ok(Self {
            success: true,
            lobby_id,
            player_id,
            player_count,
            players,
            ..Self::default()
        })
    }

    /// Rejection; `message` is cut to fit.
    pub fn rejected(error_code: u16, message: &str) -> Self {
        Self {
            success: false,
            error_code,
            error_message: ShortText::truncated(message),
            ..Self::default()
        }
    }

    /// Seated players, clamped to the roster capacity.
    pub fn players(&self) -> &[LobbyPlayer] {
        let count = usize::from(self.player_count).min(MAX_PLAYERS);
        &self.players[..count]
    }
}

impl FixedPayload for LobbyJoinResponse {
    const PACKET_TYPE: PacketType = PacketType::LobbyJoinResponse;
    const SIZE: usize = 1 + 2 + 2 + 1 + LobbyPlayer::SIZE * MAX_PLAYERS + 2 + 64;

    fn encode<B: BufMut>(&self, out: &mut B) {
        put_bool(out, self.success);
        out.put_u16(self.lobby_id);
        out.put_u16(self.player_id);
        out.put_u8(self.player_count);
        for player in &self.players {
            player.encode(out);
        }
        out.put_u16(self.error_code);
        self.error_message.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            success: get_bool(buf),
            lobby_id: buf.get_u16(),
            player_id: buf.get_u16(),
            player_count: buf.get_u8(),
            players: std::array::from_fn(|_| LobbyPlayer::decode(buf)),
            error_code: buf.get_u16(),
            error_message: ShortText::decode(buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyListRequest {
    pub player_id: u16,
}

impl FixedPayload for LobbyListRequest {
    const PACKET_TYPE: PacketType = PacketType::LobbyListRequest;
    const SIZE: usize = 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
        }
    }
}

/// One row of the lobby browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbySummary {
    pub lobby_id: u16,
    pub name: Name,
    pub player_count: u8,
    pub max_players: u8,
    pub difficulty: u8,
    pub is_started: bool,
    pub has_password: bool,
}

impl LobbySummary {
    const SIZE: usize = 2 + 32 + 1 + 1 + 1 + 1 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.lobby_id);
        self.name.encode(out);
        out.put_u8(self.player_count);
        out.put_u8(self.max_players);
        out.put_u8(self.difficulty);
        put_bool(out, self.is_started);
        put_bool(out, self.has_password);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            lobby_id: buf.get_u16(),
            name: Name::decode(buf),
            player_count: buf.get_u8(),
            max_players: buf.get_u8(),
            difficulty: buf.get_u8(),
            is_started: get_bool(buf),
            has_password: get_bool(buf),
        }
    }
}

/// Up to [`MAX_LISTED_LOBBIES`] open lobbies. Servers with more page them
/// over several responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyListResponse {
    lobby_count: u8,
    lobbies: [LobbySummary; MAX_LISTED_LOBBIES],
}

impl LobbyListResponse {
    pub fn new(lobbies: &[LobbySummary]) -> Result<Self> {
        let (lobby_count, lobbies) = fill_table(lobbies)?;
        Ok(Self {
            lobby_count,
            lobbies,
        })
    }

    /// Listed lobbies, clamped to the table capacity.
    pub fn lobbies(&self) -> &[LobbySummary] {
        let count = usize::from(self.lobby_count).min(MAX_LISTED_LOBBIES);
        &self.lobbies[..count]
    }
}

impl FixedPayload for LobbyListResponse {
    const PACKET_TYPE: PacketType = PacketType::LobbyListResponse;
    const SIZE: usize = 1 + LobbySummary::SIZE * MAX_LISTED_LOBBIES;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u8(self.lobby_count);
        for lobby in &self.lobbies {
            lobby.encode(out);
        }
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            lobby_count: buf.get_u8(),
            lobbies: std::array::from_fn(|_| LobbySummary::decode(buf)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerReady {
    pub ready: bool,
}

impl FixedPayload for PlayerReady {
    const PACKET_TYPE: PacketType = PacketType::PlayerReady;
    const SIZE: usize = 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        put_bool(out, self.ready);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            ready: get_bool(buf),
        }
    }
}

/// Lobby settings and roster, pushed to members whenever either changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyUpdate {
    pub name: Name,
    pub host_id: u16,
    pub started: bool,
    pub max_players: u8,
    pub difficulty: u8,
    player_count: u8,
    players: [LobbyPlayer; MAX_PLAYERS],
}

impl LobbyUpdate {
    /// Not-yet-started lobby open to [`MAX_PLAYERS`] on the lowest difficulty.
    pub fn new(name: &str, host_id: u16, players: &[LobbyPlayer]) -> Result<Self> {
        let (player_count, players) = fill_table(players)?;
        Ok(Self {
            name: Name::new(name)?,
            host_id,
            started: false,
            max_players: MAX_PLAYERS as u8,
            difficulty: 0,
            player_count,
            players,
        })
    }

    /// Seated players, clamped to the roster capacity.
    pub fn players(&self) -> &[LobbyPlayer] {
        let count = usize::from(self.player_count).min(MAX_PLAYERS);
        &self.players[..count]
    }
}

impl FixedPayload for LobbyUpdate {
    const PACKET_TYPE: PacketType = PacketType::LobbyUpdate;
    const SIZE: usize = 32 + 2 + 1 + 1 + 1 + 1 + LobbyPlayer::SIZE * MAX_PLAYERS;

    fn encode<B: BufMut>(&self, out: &mut B) {
        self.name.encode(out);
        out.put_u16(self.host_id);
        put_bool(out, self.started);
        out.put_u8(self.max_players);
        out.put_u8(self.difficulty);
        out.put_u8(self.player_count);
        for player in &self.players {
            player.encode(out);
        }
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            name: Name::decode(buf),
            host_id: buf.get_u16(),
            started: get_bool(buf),
            max_players: buf.get_u8(),
            difficulty: buf.get_u8(),
            player_count: buf.get_u8(),
            players: std::array::from_fn(|_| LobbyPlayer::decode(buf)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyLeave {
    pub player_id: u16,
}

impl FixedPayload for LobbyLeave {
    const PACKET_TYPE: PacketType = PacketType::LobbyLeave;
    const SIZE: usize = 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyStart {
    /// Seconds before the match starts.
    pub countdown: u8,
}

impl FixedPayload for LobbyStart {
    const PACKET_TYPE: PacketType = PacketType::LobbyStart;
    const SIZE: usize = 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u8(self.countdown);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            countdown: buf.get_u8(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatMessage {
    pub lobby_id: u16,
    pub player_name: Name,
    pub message: ChatText,
}

impl ChatMessage {
    pub fn new(lobby_id: u16, player_name: &str, message: &str) -> Result<Self> {
        Ok(Self {
            lobby_id,
            player_name: Name::new(player_name)?,
            message: ChatText::new(message)?,
        })
    }
}

impl FixedPayload for ChatMessage {
    const PACKET_TYPE: PacketType = PacketType::ChatMessage;
    const SIZE: usize = 2 + 32 + 128;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.lobby_id);
        self.player_name.encode(out);
        self.message.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            lobby_id: buf.get_u16(),
            player_name: Name::decode(buf),
            message: ChatText::decode(buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LobbyKick {
    pub player_id: u16,
}

impl FixedPayload for LobbyKick {
    const PACKET_TYPE: PacketType = PacketType::LobbyKick;
    const SIZE: usize = 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameStart {
    pub player_spawn_x: f32,
    pub player_spawn_y: f32,
    pub scroll_speed: f32,
}

impl FixedPayload for GameStart {
    const PACKET_TYPE: PacketType = PacketType::GameStart;
    const SIZE: usize = 4 * 3;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_f32(self.player_spawn_x);
        out.put_f32(self.player_spawn_y);
        out.put_f32(self.scroll_speed);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_spawn_x: buf.get_f32(),
            player_spawn_y: buf.get_f32(),
            scroll_speed: buf.get_f32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreEntry {
    pub player_id: u16,
    pub score: u32,
    pub rank: u8,
}

impl ScoreEntry {
    const SIZE: usize = 2 + 4 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
        out.put_u32(self.score);
        out.put_u8(self.rank);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
            score: buf.get_u32(),
            rank: buf.get_u8(),
        }
    }
}

/// End of match with up to [`MAX_PLAYERS`] scores.
///
/// Unused score slots are zeroed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameEnd {
    pub victory: bool,
    score_count: u8,
    scores: [ScoreEntry; MAX_PLAYERS],
}

impl GameEnd {
    pub fn new(victory: bool, scores: &[ScoreEntry]) -> Result<Self> {
        let (score_count, scores) = fill_table(scores)?;
        Ok(Self {
            victory,
            score_count,
            scores,
        })
    }

    /// Filled score slots. A peer announcing more than the table holds is
    /// clamped to the table.
    pub fn scores(&self) -> &[ScoreEntry] {
        let count = usize::from(self.score_count).min(MAX_PLAYERS);
        &self.scores[..count]
    }
}

impl FixedPayload for GameEnd {
    const PACKET_TYPE: PacketType = PacketType::GameEnd;
    const SIZE: usize = 1 + 1 + ScoreEntry::SIZE * MAX_PLAYERS;

    fn encode<B: BufMut>(&self, out: &mut B) {
        put_bool(out, self.victory);
        out.put_u8(self.score_count);
        for entry in &self.scores {
            entry.encode(out);
        }
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        let victory = get_bool(buf);
        let score_count = buf.get_u8();
        let mut scores = [ScoreEntry::default(); MAX_PLAYERS];
        for slot in &mut scores {
            *slot = ScoreEntry::decode(buf);
        }
        Self {
            victory,
            score_count,
            scores,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientLeave {
    pub player_id: u16,
}

impl FixedPayload for ClientLeave {
    const PACKET_TYPE: PacketType = PacketType::ClientLeave;
    const SIZE: usize = 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
        }
    }
}

/// Error notice sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorMessage {
    pub error_code: u16,
    pub message: ShortText,
}

impl ErrorMessage {
    /// `message` is cut to fit.
    pub fn new(error_code: u16, message: &str) -> Self {
        Self {
            error_code,
            message: ShortText::truncated(message),
        }
    }
}

impl FixedPayload for ErrorMessage {
    const PACKET_TYPE: PacketType = PacketType::Error;
    const SIZE: usize = 2 + 64;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.error_code);
        self.message.encode(out);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            error_code: buf.get_u16(),
            message: ShortText::decode(buf),
        }
    }
}

// -------------------------
// UDP Messages
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// 0 = idle, otherwise the charge level of the shot.
    pub fire: u8,
}

impl FixedPayload for PlayerInput {
    const PACKET_TYPE: PacketType = PacketType::PlayerInput;
    const SIZE: usize = 5;

    fn encode<B: BufMut>(&self, out: &mut B) {
        put_bool(out, self.up);
        put_bool(out, self.down);
        put_bool(out, self.left);
        put_bool(out, self.right);
        out.put_u8(self.fire);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            up: get_bool(buf),
            down: get_bool(buf),
            left: get_bool(buf),
            right: get_bool(buf),
            fire: buf.get_u8(),
        }
    }
}

/// Binds a datagram endpoint to the player id issued at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Auth {
    pub player_id: u16,
}

impl FixedPayload for Auth {
    const PACKET_TYPE: PacketType = PacketType::Auth;
    const SIZE: usize = 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.player_id);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            player_id: buf.get_u16(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BossSpawn {
    pub boss_id: u16,
    pub boss_type: u8,
    pub max_hp: u16,
    pub phase: u8,
}

impl FixedPayload for BossSpawn {
    const PACKET_TYPE: PacketType = PacketType::BossSpawn;
    const SIZE: usize = 2 + 1 + 2 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.boss_id);
        out.put_u8(self.boss_type);
        out.put_u16(self.max_hp);
        out.put_u8(self.phase);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            boss_id: buf.get_u16(),
            boss_type: buf.get_u8(),
            max_hp: buf.get_u16(),
            phase: buf.get_u8(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BossUpdate {
    pub boss_id: u16,
    pub pos_x: f32,
    pub pos_y: f32,
    pub hp: u16,
    pub phase: u8,
    pub action: u8,
}

impl FixedPayload for BossUpdate {
    const PACKET_TYPE: PacketType = PacketType::BossUpdate;
    const SIZE: usize = 2 + 4 + 4 + 2 + 1 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.boss_id);
        out.put_f32(self.pos_x);
        out.put_f32(self.pos_y);
        out.put_u16(self.hp);
        out.put_u8(self.phase);
        out.put_u8(self.action);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            boss_id: buf.get_u16(),
            pos_x: buf.get_f32(),
            pos_y: buf.get_f32(),
            hp: buf.get_u16(),
            phase: buf.get_u8(),
            action: buf.get_u8(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemyHit {
    pub enemy_id: u16,
    pub damage: u8,
    pub hp_remaining: u16,
}

impl FixedPayload for EnemyHit {
    const PACKET_TYPE: PacketType = PacketType::EnemyHit;
    const SIZE: usize = 2 + 1 + 2;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.enemy_id);
        out.put_u8(self.damage);
        out.put_u16(self.hp_remaining);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            enemy_id: buf.get_u16(),
            damage: buf.get_u8(),
            hp_remaining: buf.get_u16(),
        }
    }
}

/// Where the Force pod sits relative to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ForceAttachment {
    Front = 0,
    Back = 1,
    Detached = 2,
}

impl ForceAttachment {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(ForceAttachment::Front),
            1 => Some(ForceAttachment::Back),
            2 => Some(ForceAttachment::Detached),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceState {
    pub force_id: u16,
    pub owner_id: u16,
    pub pos_x: f32,
    pub pos_y: f32,
    /// Raw attachment byte; see [`ForceState::attachment`].
    pub state: u8,
}

impl ForceState {
    /// `None` when the peer sent an attachment this build does not know.
    pub fn attachment(&self) -> Option<ForceAttachment> {
        ForceAttachment::from_raw(self.state)
    }
}

impl FixedPayload for ForceState {
    const PACKET_TYPE: PacketType = PacketType::ForceState;
    const SIZE: usize = 2 + 2 + 4 + 4 + 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u16(self.force_id);
        out.put_u16(self.owner_id);
        out.put_f32(self.pos_x);
        out.put_f32(self.pos_y);
        out.put_u8(self.state);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            force_id: buf.get_u16(),
            owner_id: buf.get_u16(),
            pos_x: buf.get_f32(),
            pos_y: buf.get_f32(),
            state: buf.get_u8(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelTransition {
    pub level_number: u8,
}

impl FixedPayload for LevelTransition {
    const PACKET_TYPE: PacketType = PacketType::LevelTransition;
    const SIZE: usize = 1;

    fn encode<B: BufMut>(&self, out: &mut B) {
        out.put_u8(self.level_number);
    }

    fn decode<B: Buf>(buf: &mut B) -> Self {
        Self {
            level_number: buf.get_u8(),
        }
    }
}

const fn max_of(sizes: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > max {
            max = sizes[i];
        }
        i += 1;
    }
    max
}

/// Size of the largest payload defined here.
pub const LARGEST_PAYLOAD_SIZE: usize = max_of(&[
    LoginRequest::SIZE,
    LoginResponse::SIZE,
    LobbyCreate::SIZE,
    LobbyJoinRequest::SIZE,
    LobbyJoinResponse::SIZE,
    LobbyListRequest::SIZE,
    LobbyListResponse::SIZE,
    PlayerReady::SIZE,
    LobbyUpdate::SIZE,
    LobbyLeave::SIZE,
    LobbyStart::SIZE,
    ChatMessage::SIZE,
    LobbyKick::SIZE,
    GameStart::SIZE,
    GameEnd::SIZE,
    ClientLeave::SIZE,
    ErrorMessage::SIZE,
    PlayerInput::SIZE,
    Auth::SIZE,
    BossSpawn::SIZE,
    BossUpdate::SIZE,
    EnemyHit::SIZE,
    ForceState::SIZE,
    LevelTransition::SIZE,
]);
