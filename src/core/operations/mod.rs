//! Cryptographic operations for the toolkit.
//!
//! This module provides the key-derivation pipeline:
//!
//! - [`prf`] - The HMAC-SHA-256 pseudorandom function adapter
//! - [`pbkdf2`] - The PBKDF2 block/iteration engine (RFC 2898)

pub mod pbkdf2;
pub mod prf;
