//! Ergonomic imports for the toolkit.
//!
//! # Usage
//!
//! ```rust
//! use pwkit::prelude::*;
//! ```

// Re-export core types and the facade for convenience
pub use crate::core::encoding::{hash_to_hex, hex_to_hash, utf8_decode, utf8_encode};
pub use crate::core::error::{PwkitError, PwkitResult};
pub use crate::core::hasher::{random_salt, PasswordHasher};
pub use crate::core::operations::pbkdf2::{pbkdf2, Pbkdf2, MIN_ITERATIONS, MIN_SALT_LENGTH};
pub use crate::core::types::{
    DerivedKey, HashConfig, PasswordPolicy, PolicyViolation, DEFAULT_ITERATIONS,
    DEFAULT_KEY_LENGTH, DEFAULT_SALT_LENGTH,
};
