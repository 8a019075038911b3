//! Hex and UTF-8 conversions for stored hashes and salts.
//!
//! Hashes are stored and displayed as uppercase hex, two characters per
//! byte, no separators. Passwords and text-form salts are encoded to UTF-8
//! bytes without a byte-order mark before any cryptographic use.

use crate::core::error::PwkitResult;

/// Converts a hash (or any byte sequence) into an uppercase hex string.
///
/// The conversion is lossless: [`hex_to_hash`] recovers the original bytes.
///
/// # Example
///
/// ```rust
/// assert_eq!(pwkit::core::encoding::hash_to_hex(&[0xDE, 0xAD, 0x01]), "DEAD01");
/// ```
#[must_use]
pub fn hash_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Converts a hex string back into hash bytes.
///
/// Accepts both uppercase and lowercase digits.
///
/// # Errors
///
/// Returns [`PwkitError::HexDecode`](crate::PwkitError::HexDecode) if the
/// string has odd length or contains non-hex characters.
pub fn hex_to_hash(hex_str: &str) -> PwkitResult<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}

/// Encodes text as UTF-8 bytes, without a byte-order mark.
#[must_use]
pub fn utf8_encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes back into text.
///
/// # Errors
///
/// Returns [`PwkitError::Utf8Decode`](crate::PwkitError::Utf8Decode) if the
/// bytes are not valid UTF-8.
pub fn utf8_decode(bytes: &[u8]) -> PwkitResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
