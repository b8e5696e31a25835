#![no_main]

use libfuzzer_sys::fuzz_target;
use rtype_protocol::protocol::messages::{ChatMessage, GameEnd};
use rtype_protocol::PacketSerializer;

fuzz_target!(|data: &[u8]| {
    // Header validation and payload decoding must never panic
    let _ = PacketSerializer::deserialize(data);
    let _ = PacketSerializer::deserialize_payload::<ChatMessage>(data);
    if let Ok(end) = PacketSerializer::deserialize_payload::<GameEnd>(data) {
        let _ = end.scores();
    }
});
