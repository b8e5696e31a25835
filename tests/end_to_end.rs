//! Full send and receive paths: encoder, transport, pipeline, application

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use rtype_protocol::protocol::messages::*;
use rtype_protocol::transport::framed::FramedTransport;
use rtype_protocol::transport::memory::MemoryTransport;
use rtype_protocol::{
    CodecConfig, Decoder, Event, PacketEncoder, Pipeline, ProtocolError, Transport,
};
use std::sync::Arc;

fn lobby_traffic(encoder: &PacketEncoder) -> Vec<Vec<u8>> {
    vec![
        encoder.encode(&LoginRequest::new("pilot", "hunter2").unwrap()),
        encoder.encode(&LobbyCreate {
            lobby_name: Name::new("Bydo Hunt").unwrap(),
            player_name: Name::new("pilot").unwrap(),
            password: Name::default(),
            max_players: 4,
            difficulty: 2,
        }),
        encoder.encode(&PlayerReady { ready: true }),
        encoder.encode(&ChatMessage::new(1, "pilot", "go go go").unwrap()),
        encoder.encode(&LobbyStart { countdown: 3 }),
    ]
}

#[test]
fn test_memory_transport_lobby_session() {
    let (mut client, mut server) = MemoryTransport::pair();
    let encoder = PacketEncoder::new();
    for packet in lobby_traffic(&encoder) {
        client.send(&packet).unwrap();
    }

    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    let mut received = Vec::new();
    let delivered = pipeline.drain(&mut server, |decoded| received.push(decoded));

    assert_eq!(delivered, 5);
    let sequences: Vec<u32> = received.iter().map(|d| d.sequence()).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3, 4]);

    match &received[0].event {
        Event::LoginRequest(login) => {
            assert_eq!(login.username.as_str().unwrap(), "pilot");
            assert_eq!(login.password.as_str().unwrap(), "hunter2");
        }
        other => panic!("expected login request, got {other:?}"),
    }
    match &received[3].event {
        Event::ChatMessage(chat) => assert_eq!(chat.message.as_str().unwrap(), "go go go"),
        other => panic!("expected chat, got {other:?}"),
    }
}

#[test]
fn test_malformed_packets_are_no_ops() {
    let (mut client, mut server) = MemoryTransport::pair();
    let encoder = PacketEncoder::new();

    let good = encoder.encode(&Auth { player_id: 3 });
    let mut bad_magic = good.clone();
    bad_magic[0] = 0;
    let mut unknown = good.clone();
    unknown[4] = 0x7E;
    let truncated = good[..good.len() - 1].to_vec();

    for packet in [&bad_magic, &unknown, &truncated, &Vec::new(), &good] {
        client.send(packet).unwrap();
    }

    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    let mut events = Vec::new();
    let delivered = pipeline.drain(&mut server, |decoded| events.push(decoded.event));

    assert_eq!(delivered, 1);
    assert_eq!(events, vec![Event::Auth(Auth { player_id: 3 })]);
}

#[test]
fn test_events_relay_between_peers() {
    let (mut client, mut server) = MemoryTransport::pair();
    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    let client_encoder = PacketEncoder::new();
    let server_encoder = PacketEncoder::starting_at(1000);

    client
        .send(&client_encoder.encode(&PlayerInput {
            up: true,
            fire: 1,
            ..PlayerInput::default()
        }))
        .unwrap();

    // Server echoes every decoded event back with its own sequence.
    let mut inbound = Vec::new();
    pipeline.drain(&mut server, |decoded| inbound.push(decoded.event));
    for event in &inbound {
        let packet = server_encoder.encode_event(event).unwrap();
        server.send(&packet).unwrap();
    }

    let mut echoed = Vec::new();
    pipeline.drain(&mut client, |decoded| echoed.push(decoded));
    assert_eq!(echoed.len(), 1);
    assert_eq!(echoed[0].sequence(), 1000);
    assert_eq!(echoed[0].event, inbound[0]);
}

#[tokio::test]
async fn test_framed_stream_session() {
    let (client_io, server_io) = tokio::io::duplex(64);
    let config = CodecConfig::default();
    let mut client = FramedTransport::with_config(client_io, &config);
    let mut server = FramedTransport::with_config(server_io, &config);

    let encoder = PacketEncoder::new();
    let traffic = lobby_traffic(&encoder);
    let expected = traffic.len();

    let writer = tokio::spawn(async move {
        for packet in traffic {
            client.send_packet(&packet).await.unwrap();
        }
        client.send_packet(&encoder.encode(&ClientLeave { player_id: 1 })).await.unwrap();
    });

    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    let mut events = Vec::new();
    while let Some(decoded) = server.next_decoded(&pipeline).await.unwrap() {
        let leaving = matches!(decoded.event, Event::ClientLeave(_));
        events.push(decoded.event);
        if leaving {
            break;
        }
    }
    writer.await.unwrap();

    assert_eq!(events.len(), expected + 1);
    assert!(matches!(events[1], Event::LobbyCreate(ref lobby) if lobby.max_players == 4));
}

#[tokio::test]
async fn test_framed_stream_skips_unknown_types() {
    let (client_io, server_io) = tokio::io::duplex(256);
    let mut client = FramedTransport::new(client_io);
    let mut server = FramedTransport::new(server_io);
    let encoder = PacketEncoder::new();

    let mut unknown = encoder.encode(&LevelTransition { level_number: 1 });
    unknown[4] = 0x66;
    client.send_packet(&unknown).await.unwrap();
    client
        .send_packet(&encoder.encode(&LevelTransition { level_number: 2 }))
        .await
        .unwrap();

    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    let decoded = server.next_decoded(&pipeline).await.unwrap().unwrap();
    assert_eq!(
        decoded.event,
        Event::LevelTransition(LevelTransition { level_number: 2 })
    );
}

#[tokio::test]
async fn test_framed_stream_desync_is_reported() {
    let (client_io, server_io) = tokio::io::duplex(256);
    let mut raw = client_io;
    let mut server = FramedTransport::new(server_io);

    tokio::io::AsyncWriteExt::write_all(&mut raw, b"GARBAGE-GARBAGE-GARBAGE")
        .await
        .unwrap();

    let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
    assert!(matches!(
        server.next_decoded(&pipeline).await,
        Err(ProtocolError::BadMagic(_))
    ));
}

#[tokio::test]
async fn test_framed_tcp_connection() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut transport = FramedTransport::new(stream);
        let pipeline = Pipeline::new(Arc::new(Decoder::with_default_handlers()));
        transport.next_decoded(&pipeline).await.unwrap()
    });

    let mut client = FramedTransport::connect(addr, &CodecConfig::default()).await.unwrap();
    let packet = PacketEncoder::new().encode(&LobbyKick { player_id: 2 });
    client.send_packet(&packet).await.unwrap();

    let decoded = server.await.unwrap().expect("one packet");
    assert_eq!(decoded.event, Event::LobbyKick(LobbyKick { player_id: 2 }));
}
