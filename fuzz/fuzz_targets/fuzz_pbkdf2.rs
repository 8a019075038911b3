#![no_main]

use libfuzzer_sys::fuzz_target;
use pwkit::pbkdf2;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    // Split input into password and salt; keep the iteration count at the
    // engine floor, PBKDF2 is intentionally slow.
    let (password, salt) = data.split_at(data.len() / 2);
    let dk_len = usize::from(data[0] % 65);

    match pbkdf2(password, salt, 1000, dk_len) {
        Ok(derived) => assert_eq!(derived.len(), dk_len),
        // Only a short salt is rejected for these inputs.
        Err(_) => assert!(salt.len() < 8),
    }
});
