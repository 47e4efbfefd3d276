//! X25519 scalar multiplication
//!
//! Thin wrappers over `x25519_dalek`'s constant-time Montgomery ladder. The
//! arithmetic is never reimplemented here; this layer only fixes the base
//! point and turns a degenerate result into an error.

use crate::{Error, Result};

/// Encoding of the standard Curve25519 base point (u = 9)
pub const BASE_POINT: [u8; 32] = x25519_dalek::X25519_BASEPOINT_BYTES;

/// Multiply `point` by `scalar` using the RFC 7748 X25519 function.
///
/// The scalar is clamped internally by X25519 itself, exactly as the RFC
/// defines it. An all-zero output means the point had low order and the
/// result carries no key material, so it is rejected.
pub fn scalar_multiply(scalar: &[u8; 32], point: &[u8; 32]) -> Result<[u8; 32]> {
    let output = x25519_dalek::x25519(*scalar, *point);

    if output.iter().fold(0u8, |acc, b| acc | b) == 0 {
        return Err(Error::Derivation(
            "bad input point: low order point".to_string(),
        ));
    }

    Ok(output)
}

/// Derive a public point from `scalar` against the standard base point
pub fn base_point_multiply(scalar: &[u8; 32]) -> Result<[u8; 32]> {
    scalar_multiply(scalar, &BASE_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        hex::decode_to_slice(s, &mut out).unwrap();
        out
    }

    #[test]
    fn test_rfc7748_vector() {
        let scalar = from_hex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let point = from_hex("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
        let expected = from_hex("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

        assert_eq!(scalar_multiply(&scalar, &point).unwrap(), expected);
    }

    #[test]
    fn test_base_point_matches_dalek_public_key() {
        let scalar = [0x42u8; 32];
        let secret = x25519_dalek::StaticSecret::from(scalar);
        let public = x25519_dalek::PublicKey::from(&secret);

        assert_eq!(base_point_multiply(&scalar).unwrap(), public.to_bytes());
    }

    #[test]
    fn test_low_order_point_rejected() {
        let result = scalar_multiply(&[0x42u8; 32], &[0u8; 32]);
        assert!(matches!(result, Err(Error::Derivation(_))));
    }

    #[test]
    fn test_shared_secret_agreement() {
        let alice = [0x11u8; 32];
        let bob = [0x22u8; 32];

        let alice_public = base_point_multiply(&alice).unwrap();
        let bob_public = base_point_multiply(&bob).unwrap();

        assert_eq!(
            scalar_multiply(&alice, &bob_public).unwrap(),
            scalar_multiply(&bob, &alice_public).unwrap(),
        );
    }
}
