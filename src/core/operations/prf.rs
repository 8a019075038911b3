//! HMAC-SHA-256 pseudorandom function adapter.
//!
//! PBKDF2 invokes its PRF once per iteration with the password fixed as the
//! MAC key for the whole derivation. The adapter keys an HMAC-SHA-256
//! context a single time and clones the pre-keyed state for each
//! invocation, so the key schedule is not recomputed per call.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::error::{PwkitError, PwkitResult};

/// PRF output size in bytes (the HMAC-SHA-256 digest length), `hLen` in
/// RFC 2898.
pub const H_LEN: usize = 32;

/// A keyed HMAC-SHA-256 context, reused across all PRF invocations of one
/// derivation.
#[derive(Clone)]
pub(crate) struct HmacSha256Prf {
    mac: Hmac<Sha256>,
}

impl HmacSha256Prf {
    /// Keys the PRF with the password. HMAC accepts keys of any length, so
    /// this only fails if the underlying MAC primitive faults.
    pub(crate) fn new(key: &[u8]) -> PwkitResult<Self> {
        let mac = <Hmac<Sha256> as Mac>::new_from_slice(key).map_err(|_| PwkitError::Crypto)?;
        Ok(Self { mac })
    }

    /// Computes `HMAC-SHA-256(key, message)`.
    pub(crate) fn compute(&self, message: &[u8]) -> [u8; H_LEN] {
        let mut mac = self.mac.clone();
        mac.update(message);
        mac.finalize().into_bytes().into()
    }
}
