#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use rtype_protocol::PacketCodec;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Framing arbitrary stream bytes: errors are fine, panics are not
    let mut codec = PacketCodec::new(4096);
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_frame)) = codec.decode(&mut buf) {}
});
