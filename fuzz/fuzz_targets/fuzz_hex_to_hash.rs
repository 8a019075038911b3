#![no_main]

use libfuzzer_sys::fuzz_target;
use pwkit::core::encoding::{hash_to_hex, hex_to_hash};

fuzz_target!(|data: &str| {
    // Parsing arbitrary strings should never panic; valid input must
    // round-trip through the uppercase stored form.
    if let Ok(bytes) = hex_to_hash(data) {
        let encoded = hash_to_hex(&bytes);
        assert_eq!(hex_to_hash(&encoded).expect("re-parse must succeed"), bytes);
    }
});
