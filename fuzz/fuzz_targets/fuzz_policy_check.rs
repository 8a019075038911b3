#![no_main]

use libfuzzer_sys::fuzz_target;
use pwkit::PasswordPolicy;

fuzz_target!(|data: &str| {
    // Checking arbitrary candidate passwords should never panic, and the
    // three forms must agree on the outcome.
    let policy = PasswordPolicy::default();
    let checked = policy.check(data);
    assert_eq!(policy.is_compliant(data), checked.is_ok());
    assert_eq!(policy.first_violation(data), checked.err());
});
