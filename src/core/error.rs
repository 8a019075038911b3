//! Error types for toolkit operations.
//!
//! This module provides a unified error type for all toolkit operations.
//! Validation failures are reported at the point of detection and are never
//! retried internally; regenerating a salt or re-prompting for a password is
//! the caller's responsibility.

use thiserror::Error;

use crate::core::types::PolicyViolation;

/// Errors that can occur when deriving, verifying or encoding hashes.
#[derive(Debug, Error)]
pub enum PwkitError {
    /// The supplied salt is shorter than the 8-byte minimum required for
    /// PBKDF2 key derivation.
    #[error("salt is shorter than the 8 byte minimum required for key derivation")]
    SaltTooShort,

    /// The iteration count is below the floor of 1000 recommended in
    /// RFC 2898.
    #[error("iteration count is less than the minimum of 1000 recommended in RFC 2898")]
    IterationsTooLow,

    /// A password failed its composition policy; carries the first rule
    /// that was violated.
    #[error("password policy violation: {0}")]
    Policy(#[from] PolicyViolation),

    /// Hex decoding error (odd length or non-hex characters).
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// The supplied bytes are not valid UTF-8.
    #[error("UTF-8 decode error: {0}")]
    Utf8Decode(#[from] std::string::FromUtf8Error),

    /// The operating system's secure random source failed.
    #[error("secure random source failed")]
    RandomSource,

    /// The underlying MAC primitive faulted.
    /// Intentionally vague for security.
    #[error("cryptographic operation failed")]
    Crypto,
}

/// Result type alias for toolkit operations.
pub type PwkitResult<T> = Result<T, PwkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PwkitError::SaltTooShort;
        assert_eq!(
            err.to_string(),
            "salt is shorter than the 8 byte minimum required for key derivation"
        );

        let err = PwkitError::IterationsTooLow;
        assert_eq!(
            err.to_string(),
            "iteration count is less than the minimum of 1000 recommended in RFC 2898"
        );

        let err = PwkitError::RandomSource;
        assert_eq!(err.to_string(), "secure random source failed");

        let err = PwkitError::Crypto;
        assert_eq!(err.to_string(), "cryptographic operation failed");
    }

    #[test]
    fn test_policy_violation_conversion() {
        let violation = PolicyViolation::MinLength {
            length: 4,
            minimum: 6,
        };
        let err = PwkitError::from(violation);
        assert!(matches!(err, PwkitError::Policy(_)));
        assert!(err.to_string().starts_with("password policy violation:"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let result = hex::decode("abc");
        let err = PwkitError::from(result.expect_err("odd length must fail"));
        assert!(matches!(err, PwkitError::HexDecode(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = PwkitError::SaltTooShort;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("SaltTooShort"));
    }
}
