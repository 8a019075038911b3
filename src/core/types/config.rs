//! Explicit configuration for the hashing facade.

/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: usize = 32;

/// Default iteration count for key stretching.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default derived-key length in bytes, matching the HMAC-SHA-256 output
/// size.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Immutable configuration for a [`PasswordHasher`].
///
/// Carries the salt length used for generation, the iteration count and
/// the derived-key length, so defaults are explicit values passed into the
/// facade rather than hidden process-wide state.
///
/// # Example
///
/// ```rust
/// use pwkit::HashConfig;
///
/// let config = HashConfig {
///     iterations: 200_000,
///     ..HashConfig::default()
/// };
/// assert_eq!(config.salt_length, 32);
/// assert_eq!(config.key_length, 32);
/// ```
///
/// [`PasswordHasher`]: crate::PasswordHasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// Length in bytes of salts produced by
    /// [`PasswordHasher::random_salt`](crate::PasswordHasher::random_salt).
    pub salt_length: usize,

    /// PBKDF2 iteration count; must be at least
    /// [`MIN_ITERATIONS`](crate::core::operations::pbkdf2::MIN_ITERATIONS)
    /// when a hash is derived.
    pub iterations: u32,

    /// Length in bytes of derived hashes.
    pub key_length: usize,
}

impl HashConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(salt_length: usize, iterations: u32, key_length: usize) -> Self {
        Self {
            salt_length,
            iterations,
            key_length,
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SALT_LENGTH, DEFAULT_ITERATIONS, DEFAULT_KEY_LENGTH)
    }
}
