//! Password hashing toolkit built on PBKDF2-HMAC-SHA-256.
//!
//! This crate derives fixed-length cryptographic keys from passwords using
//! the PBKDF2 construction from RFC 2898 with HMAC-SHA-256 as the
//! pseudorandom function, and layers a password-hashing/verification API
//! and a declarative password-policy checker on top of it. Applications use
//! it to store password verifiers safely - never the password itself.
//!
//! # Quick Start
//!
//! ```rust
//! use pwkit::{PasswordHasher, PwkitResult};
//!
//! # fn main() -> PwkitResult<()> {
//! let hasher = PasswordHasher::default();
//!
//! // Generate a fresh salt and hash the password.
//! let salt = hasher.random_salt()?;
//! let hash = hasher.hash_password(&salt, "correct horse battery staple")?;
//!
//! // Store (salt, hash, iterations); later, verify a login attempt.
//! assert!(hasher.verify_password(&salt, "correct horse battery staple", hash.as_bytes())?);
//! assert!(!hasher.verify_password(&salt, "Tr0ub4dor&3", hash.as_bytes())?);
//! # Ok(())
//! # }
//! ```
//!
//! # Password Policies
//!
//! ```rust
//! use pwkit::PasswordPolicy;
//!
//! let policy = PasswordPolicy::new(1, 1, 1, 6, usize::MAX);
//! assert!(policy.is_compliant("Abcdef1!"));
//! assert!(!policy.is_compliant("Ab1!"));
//! ```
//!
//! # Security
//!
//! - Derived key material is zeroized on drop
//! - `Debug` output redacts key material
//! - Hash verification uses constant-time comparison
//! - Salts come from the operating system's secure random source
//! - Iteration counts below 1000 and salts below 8 bytes are rejected
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports

#![forbid(unsafe_code)]

pub mod core;
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{PwkitError, PwkitResult};
pub use core::hasher::{random_salt, PasswordHasher};
pub use core::operations::pbkdf2::{pbkdf2, Pbkdf2};
pub use core::types::{DerivedKey, HashConfig, PasswordPolicy, PolicyViolation};
