//! Curvekey Core Library
//!
//! Generates, derives, and identifies X25519 (RFC 7748) key material for
//! declarative infrastructure tooling. Every operation is a pure, synchronous
//! call returning a small [`KeyRecord`] whose `id` is a content address of the
//! public key, so a host can reconcile state idempotently.

pub mod crypto;
pub mod encoding;
pub mod identify;
pub mod keys;
pub mod types;
pub mod version;

pub use identify::identify;
pub use keys::{derive, derive_from_bytes, generate, generate_with};
pub use types::*;
pub use version::version_string;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Message reported when a supplied private key has the wrong length
pub const INVALID_KEY_LENGTH: &str = "private key must be 32 bytes long";

/// Core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Secure random source failed: {0}")]
    Entropy(String),

    #[error("Invalid base64 encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("{0}")]
    Validation(&'static str),

    #[error("Public key derivation failed: {0}")]
    Derivation(String),
}
