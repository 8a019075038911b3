//! PBKDF2 key derivation engine with HMAC-SHA-256 as the PRF.
//!
//! This module implements the block/iteration algorithm from RFC 2898
//! section 5.2. A derivation binds `(password, salt, iterations)` once at
//! construction and can then produce derived keys of any requested length.
//!
//! The iteration count is the primary brute-force cost knob: every derived
//! block costs `iterations` sequential PRF evaluations, each depending on
//! the previous one, so a single derivation cannot be parallelized.
//! Independent derivations can run concurrently.

use crate::core::error::{PwkitError, PwkitResult};
use crate::core::operations::prf::{HmacSha256Prf, H_LEN};

/// Minimum iteration count accepted by the engine, the floor recommended
/// in RFC 2898. Exactly this value is accepted.
pub const MIN_ITERATIONS: u32 = 1000;

/// Minimum salt length in bytes accepted by the engine.
pub const MIN_SALT_LENGTH: usize = 8;

/// A PBKDF2 derivation context.
///
/// Binds the password (as the HMAC key), salt and iteration count at
/// construction, validating both floors before any derivation work runs.
///
/// # Example
///
/// ```rust
/// use pwkit::Pbkdf2;
///
/// # fn main() -> pwkit::PwkitResult<()> {
/// let engine = Pbkdf2::new(b"hunter2", b"pepper-pepper", 1000)?;
/// let key = engine.derive(32);
/// assert_eq!(key.len(), 32);
/// # Ok(())
/// # }
/// ```
pub struct Pbkdf2 {
    prf: HmacSha256Prf,
    salt: Vec<u8>,
    iterations: u32,
}

impl Pbkdf2 {
    /// Creates a derivation context for `(password, salt, iterations)`.
    ///
    /// # Errors
    ///
    /// - [`PwkitError::IterationsTooLow`] if `iterations` is below
    ///   [`MIN_ITERATIONS`]
    /// - [`PwkitError::SaltTooShort`] if `salt` is shorter than
    ///   [`MIN_SALT_LENGTH`] bytes
    pub fn new(password: &[u8], salt: &[u8], iterations: u32) -> PwkitResult<Self> {
        if iterations < MIN_ITERATIONS {
            return Err(PwkitError::IterationsTooLow);
        }

        if salt.len() < MIN_SALT_LENGTH {
            return Err(PwkitError::SaltTooShort);
        }

        Ok(Self {
            prf: HmacSha256Prf::new(password)?,
            salt: salt.to_vec(),
            iterations,
        })
    }

    /// Derives exactly `dk_len` bytes of key material.
    ///
    /// `dk_len` is not bounded above; the RFC's theoretical maximum is far
    /// larger than any practical key length. A `dk_len` of zero yields an
    /// empty key.
    #[must_use]
    pub fn derive(&self, dk_len: usize) -> Vec<u8> {
        derive_unchecked(&self.prf, &self.salt, self.iterations, dk_len)
    }

    /// The iteration count this context was constructed with.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// One-shot PBKDF2-HMAC-SHA-256: constructs a context and immediately
/// derives `dk_len` bytes.
///
/// # Errors
///
/// Same as [`Pbkdf2::new`].
pub fn pbkdf2(password: &[u8], salt: &[u8], iterations: u32, dk_len: usize) -> PwkitResult<Vec<u8>> {
    Ok(Pbkdf2::new(password, salt, iterations)?.derive(dk_len))
}

/// The raw block/concatenation algorithm, below the construction-time
/// floors. Not exposed publicly; known-answer tests exercise it directly
/// at iteration counts the engine refuses.
fn derive_unchecked(prf: &HmacSha256Prf, salt: &[u8], iterations: u32, dk_len: usize) -> Vec<u8> {
    let block_count = dk_len.div_ceil(H_LEN);

    let mut derived = Vec::with_capacity(block_count * H_LEN);
    for index in 1..=block_count as u32 {
        derived.extend_from_slice(&derive_block(prf, salt, iterations, index));
    }

    // The final block is folded in full and the concatenation truncated,
    // rather than slicing the last block to r bytes before concatenating;
    // the dk_len-byte result is identical.
    derived.truncate(dk_len);
    derived
}

/// Computes one output block `T_i`: `U_1 = PRF(salt || INT(i))`, then
/// XOR-folds `U_j = PRF(U_{j-1})` for `j` in `2..=iterations`.
fn derive_block(prf: &HmacSha256Prf, salt: &[u8], iterations: u32, index: u32) -> [u8; H_LEN] {
    // INT(i): the 4-byte big-endian block index, regardless of host order.
    let mut message = Vec::with_capacity(salt.len() + 4);
    message.extend_from_slice(salt);
    message.extend_from_slice(&index.to_be_bytes());

    let mut u = prf.compute(&message);
    let mut block = u;

    for _ in 1..iterations {
        u = prf.compute(&u);
        for (acc, byte) in block.iter_mut().zip(u.iter()) {
            *acc ^= byte;
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(password: &[u8], salt: &[u8], iterations: u32, dk_len: usize) -> Vec<u8> {
        let prf = HmacSha256Prf::new(password).expect("keying cannot fail");
        derive_unchecked(&prf, salt, iterations, dk_len)
    }

    // Published PBKDF2-HMAC-SHA-256 vector: one iteration, one block.
    #[test]
    fn test_known_answer_single_iteration() {
        let dk = raw(b"password", b"salt", 1, 32);
        assert_eq!(
            hex::encode(dk),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    // Two iterations exercises the XOR fold.
    #[test]
    fn test_known_answer_two_iterations() {
        let dk = raw(b"password", b"salt", 2, 32);
        assert_eq!(
            hex::encode(dk),
            "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
        );
    }

    #[test]
    fn test_known_answer_4096_iterations() {
        let dk = raw(b"password", b"salt", 4096, 32);
        assert_eq!(
            hex::encode(dk),
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
        );
    }

    // RFC 7914 section 11: two full blocks at a single iteration, so the
    // block counter encoding is visible in the output.
    #[test]
    fn test_known_answer_two_blocks() {
        let dk = raw(b"passwd", b"salt", 1, 64);
        assert_eq!(
            hex::encode(dk),
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
             49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783"
        );
    }

    // RFC 7914 section 11, second vector.
    #[test]
    fn test_known_answer_rfc7914_nacl() {
        let dk = raw(b"Password", b"NaCl", 80000, 64);
        assert_eq!(
            hex::encode(dk),
            "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
             a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d"
        );
    }

    // Embedded NUL bytes in password and salt are ordinary bytes.
    #[test]
    fn test_known_answer_embedded_nul() {
        let dk = raw(b"pass\0word", b"sa\0lt", 4096, 16);
        assert_eq!(hex::encode(dk), "89b69d0516f829893c696226650a8687");
    }

    #[test]
    fn test_truncation_is_a_prefix_of_longer_output() {
        let long = raw(b"password", b"saltsalt", 1000, 80);
        let short = raw(b"password", b"saltsalt", 1000, 33);
        assert_eq!(short, long[..33]);
    }

    #[test]
    fn test_zero_length_key_is_empty() {
        assert!(raw(b"password", b"saltsalt", 1000, 0).is_empty());
    }

    #[test]
    fn test_rejects_iterations_below_floor() {
        let result = Pbkdf2::new(b"password", b"saltsalt", 999);
        assert!(matches!(result, Err(PwkitError::IterationsTooLow)));
    }

    #[test]
    fn test_accepts_iteration_floor_exactly() -> PwkitResult<()> {
        let engine = Pbkdf2::new(b"password", b"saltsalt", MIN_ITERATIONS)?;
        assert_eq!(engine.iterations(), 1000);
        assert_eq!(engine.derive(32).len(), 32);
        Ok(())
    }

    #[test]
    fn test_rejects_salt_below_floor() {
        let result = Pbkdf2::new(b"password", b"1234567", 1000);
        assert!(matches!(result, Err(PwkitError::SaltTooShort)));
    }

    #[test]
    fn test_accepts_salt_floor_exactly() -> PwkitResult<()> {
        let engine = Pbkdf2::new(b"password", b"12345678", 1000)?;
        assert_eq!(engine.derive(16).len(), 16);
        Ok(())
    }

    #[test]
    fn test_iteration_floor_checked_before_salt() {
        // Both floors violated: the iteration check runs first.
        let result = Pbkdf2::new(b"password", b"short", 1);
        assert!(matches!(result, Err(PwkitError::IterationsTooLow)));
    }

    #[test]
    fn test_one_shot_matches_context_form() -> PwkitResult<()> {
        let engine = Pbkdf2::new(b"password", b"saltsalt", 1000)?;
        assert_eq!(pbkdf2(b"password", b"saltsalt", 1000, 48)?, engine.derive(48));
        Ok(())
    }

    #[test]
    fn test_derivation_is_deterministic() -> PwkitResult<()> {
        let first = pbkdf2(b"password", b"fixed-salt", 1000, 32)?;
        let second = pbkdf2(b"password", b"fixed-salt", 1000, 32)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_avalanche_on_inputs() -> PwkitResult<()> {
        let base = pbkdf2(b"password", b"fixed-salt", 1000, 32)?;
        assert_ne!(pbkdf2(b"passwore", b"fixed-salt", 1000, 32)?, base);
        assert_ne!(pbkdf2(b"password", b"fixed-salu", 1000, 32)?, base);
        assert_ne!(pbkdf2(b"password", b"fixed-salt", 1001, 32)?, base);
        Ok(())
    }
}
