#![no_main]

use libfuzzer_sys::fuzz_target;
use pwkit::core::encoding::{utf8_decode, utf8_encode};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes should never panic; valid input must
    // round-trip.
    if let Ok(text) = utf8_decode(data) {
        assert_eq!(utf8_encode(&text), data);
    }
});
