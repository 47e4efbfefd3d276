//! Fresh key pair generation

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::build_record;
use crate::crypto::clamp_scalar;
use crate::types::KeyRecord;
use crate::{Error, Result};

/// Generate a new key pair from the operating system's entropy source.
///
/// May block if the OS entropy pool is not yet seeded. A failing source is
/// reported as [`Error::Entropy`] and never retried.
pub fn generate() -> Result<KeyRecord> {
    generate_with(&mut OsRng)
}

/// Generate a new key pair from `rng`.
pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<KeyRecord> {
    let mut raw = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut raw[..])
        .map_err(|e| Error::Entropy(e.to_string()))?;

    build_record(clamp_scalar(*raw))
}
