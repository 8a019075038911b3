//! The caller-facing password hashing facade.
//!
//! Combines salt generation, UTF-8 password encoding and the PBKDF2 engine
//! into "password -> hash" and "password + hash -> match?" operations,
//! configured explicitly through [`HashConfig`].
//!
//! The facade is stateless across calls: each operation is a pure function
//! of its inputs plus the OS random source, so one hasher can be shared
//! freely between threads.

use rand_core::{OsRng, TryRngCore};

use crate::core::encoding::utf8_encode;
use crate::core::error::{PwkitError, PwkitResult};
use crate::core::operations::pbkdf2::{Pbkdf2, MIN_SALT_LENGTH};
use crate::core::types::{DerivedKey, HashConfig};

/// Generates `length` bytes from the operating system's secure random
/// source, suitable for use as salt.
///
/// The output carries no determinism guarantees and is never seeded from a
/// predictable source.
///
/// # Errors
///
/// Returns [`PwkitError::RandomSource`] if the OS random source fails.
pub fn random_salt(length: usize) -> PwkitResult<Vec<u8>> {
    let mut salt = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|_| PwkitError::RandomSource)?;
    Ok(salt)
}

/// The password hashing facade.
///
/// Holds an immutable [`HashConfig`]; the default configuration generates
/// 32-byte salts and derives 32-byte hashes at 1000 iterations.
///
/// # Example
///
/// ```rust
/// use pwkit::{HashConfig, PasswordHasher};
///
/// # fn main() -> pwkit::PwkitResult<()> {
/// let hasher = PasswordHasher::new(HashConfig {
///     iterations: 10_000,
///     ..HashConfig::default()
/// });
///
/// let salt = hasher.random_salt()?;
/// let hash = hasher.hash_password(&salt, "hunter2")?;
/// assert!(hasher.verify_password(&salt, "hunter2", hash.as_bytes())?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    config: HashConfig,
}

impl PasswordHasher {
    /// Creates a hasher with the given configuration.
    #[must_use]
    pub const fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// The configuration this hasher was constructed with.
    #[must_use]
    pub const fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Generates a salt of the configured length.
    ///
    /// # Errors
    ///
    /// Returns [`PwkitError::RandomSource`] if the OS random source fails.
    pub fn random_salt(&self) -> PwkitResult<Vec<u8>> {
        random_salt(self.config.salt_length)
    }

    /// Hashes `password` with `salt` into a key of the configured length.
    ///
    /// The password is UTF-8 encoded (no byte-order mark) before
    /// derivation. The salt must be stored alongside the hash; both are
    /// needed to verify the password later.
    ///
    /// # Errors
    ///
    /// - [`PwkitError::SaltTooShort`] if `salt` is shorter than 8 bytes
    /// - [`PwkitError::IterationsTooLow`] if the configured iteration
    ///   count is below 1000
    pub fn hash_password(&self, salt: &[u8], password: &str) -> PwkitResult<DerivedKey> {
        // The engine checks this again; the facade rejects short salts
        // before any other work.
        if salt.len() < MIN_SALT_LENGTH {
            return Err(PwkitError::SaltTooShort);
        }

        let engine = Pbkdf2::new(&utf8_encode(password), salt, self.config.iterations)?;
        Ok(DerivedKey::new(engine.derive(self.config.key_length)))
    }

    /// Recomputes the hash for `(salt, password)` and compares it with
    /// `expected` in constant time, full length and every byte.
    ///
    /// # Errors
    ///
    /// Same as [`hash_password`](Self::hash_password).
    pub fn verify_password(
        &self,
        salt: &[u8],
        password: &str,
        expected: &[u8],
    ) -> PwkitResult<bool> {
        use subtle::ConstantTimeEq;

        let computed = self.hash_password(salt, password)?;
        Ok(computed.as_bytes().ct_eq(expected).into())
    }
}
