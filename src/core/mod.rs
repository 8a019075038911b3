//! Core password-hashing types and operations.
//!
//! This module provides the fundamental building blocks of the toolkit:
//!
//! - [`error`] - Error types for all toolkit operations
//! - [`encoding`] - Hex and UTF-8 conversions for stored hashes
//! - [`operations`] - The PRF adapter and the PBKDF2 engine
//! - [`types`] - First-class value types (derived keys, policies, config)
//! - [`hasher`] - The caller-facing hashing facade

pub mod encoding;
pub mod error;
pub mod hasher;
pub mod operations;
pub mod types;

// Re-export commonly used items
pub use error::{PwkitError, PwkitResult};
