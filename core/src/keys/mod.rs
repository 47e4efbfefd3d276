//! Key pair generation and public key derivation
//!
//! Both entry points build a [`KeyRecord`](crate::KeyRecord) the same way:
//! scalar, then X25519 against the base point, then the content address of
//! the public key. Only locally generated scalars are clamped.

pub mod derive;
pub mod generate;

pub use derive::{derive, derive_from_bytes};
pub use generate::{generate, generate_with};

use crate::crypto::base_point_multiply;
use crate::identify::identify;
use crate::types::{KeyRecord, PrivateScalar, PublicPoint};
use crate::Result;

/// Derive the public point for `scalar` and wrap everything into a record
fn build_record(scalar: [u8; 32]) -> Result<KeyRecord> {
    let public_key = base_point_multiply(&scalar)?;
    let id = identify(&public_key);

    Ok(KeyRecord::new(
        id,
        PrivateScalar::new(scalar),
        PublicPoint::new(public_key),
    ))
}
