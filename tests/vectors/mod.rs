//! Test vector types for the PBKDF2 suite.
//!
//! Vectors live in `tests/vectors/pbkdf2.json`. Entries with an `expected`
//! value are published known answers; entries without one are checked only
//! against the independent reference implementation.

// Comment fields are carried for documentation, not read by every test
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct VectorSuite {
    pub name: String,
    pub tests: Vec<KdfVector>,
}

/// A single PBKDF2 derivation vector.
#[derive(Debug, Deserialize)]
pub struct KdfVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Password text, UTF-8 encoded before derivation.
    pub password: String,
    /// Salt text, UTF-8 encoded before derivation.
    pub salt: String,
    pub iterations: u32,
    #[serde(rename = "dk-len")]
    pub dk_len: usize,
    /// Uppercase-hex expected output (null for fail tests and
    /// reference-only tests).
    pub expected: Option<String>,
}

/// Loads a vector suite from a JSON file.
pub fn load_vectors(path: &Path) -> VectorSuite {
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read vectors from {}: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse vectors from {}: {e}", path.display()))
}
