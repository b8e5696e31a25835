#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use rtype_protocol::{Decoder, Pipeline};
use std::sync::Arc;

static DECODER: Lazy<Arc<Decoder>> = Lazy::new(|| Arc::new(Decoder::with_default_handlers()));

fuzz_target!(|data: &[u8]| {
    let _ = DECODER.decode(data);
    let _ = Pipeline::new(Arc::clone(&DECODER)).process(data);
});
