//! `DerivedKey` - The output of a password derivation.
//!
//! Stored form: uppercase hex, two characters per byte, no separators.

use core::fmt::{self, Debug, Display};

use zeroize::Zeroize;

use crate::core::encoding::{hash_to_hex, hex_to_hash};
use crate::core::error::PwkitError;

/// A derived key (password hash) produced by the PBKDF2 engine.
///
/// The key has no lifecycle of its own: it is recomputed on demand for
/// comparison and never cached by the toolkit.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - `Debug` output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use pwkit::DerivedKey;
///
/// let key = DerivedKey::new(vec![0xDE, 0xAD, 0xBE, 0xEF]);
///
/// // Serialize for storage
/// let stored = key.to_string();
/// assert_eq!(stored, "DEADBEEF");
///
/// // Parse back from storage
/// let parsed = DerivedKey::try_from(stored.as_str()).expect("valid hex");
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl DerivedKey {
    /// Creates a `DerivedKey` from raw key bytes.
    #[must_use]
    pub fn new(key: Vec<u8>) -> Self {
        Self { key }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Length of the key in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Consumes the `DerivedKey` and returns the raw key bytes.
    ///
    /// The caller takes over responsibility for scrubbing the material.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.key)
    }
}

impl From<Vec<u8>> for DerivedKey {
    fn from(key: Vec<u8>) -> Self {
        Self::new(key)
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Display (serialization to uppercase hex)
// =============================================================================

impl Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hash_to_hex(&self.key))
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.key.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing from stored hex)
// =============================================================================

impl TryFrom<&str> for DerivedKey {
    type Error = PwkitError;

    fn try_from(hex_str: &str) -> Result<Self, Self::Error> {
        Ok(Self::new(hex_to_hash(hex_str)?))
    }
}

impl TryFrom<String> for DerivedKey {
    type Error = PwkitError;

    fn try_from(hex_str: String) -> Result<Self, Self::Error> {
        Self::try_from(hex_str.as_str())
    }
}

// =============================================================================
// PartialEq (constant-time)
// =============================================================================

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for DerivedKey {}
