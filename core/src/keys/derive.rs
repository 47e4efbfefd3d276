//! Public key derivation from a caller-held private key

use zeroize::Zeroizing;

use super::build_record;
use crate::encoding::decode_key;
use crate::types::KeyRecord;
use crate::{Error, Result, INVALID_KEY_LENGTH};

/// Derive the key record for a base64-encoded private key.
///
/// The decoded scalar is used exactly as supplied, without clamping, so the
/// public key is what RFC 7748 X25519 yields for those bytes. Pure: the same
/// input always gives the same record.
pub fn derive(encoded_private_key: &str) -> Result<KeyRecord> {
    let bytes = Zeroizing::new(decode_key(encoded_private_key)?);
    derive_from_bytes(&bytes)
}

/// Derive the key record for raw private key bytes (must be exactly 32)
pub fn derive_from_bytes(private_key: &[u8]) -> Result<KeyRecord> {
    let scalar: [u8; 32] = private_key
        .try_into()
        .map_err(|_| Error::Validation(INVALID_KEY_LENGTH))?;

    build_record(scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::clamp_scalar;
    use crate::encoding::encode_key;

    const PRIVATE_KEY: &str = "iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=";
    const PUBLIC_KEY: &str = "rXSwT/bVUlMB0URSwXrx1uPbGuo9GjYfKYDyYbV22TA=";

    #[test]
    fn test_derive_known_vector() {
        let record = derive(PRIVATE_KEY).unwrap();

        assert_eq!(record.public_key().to_base64(), PUBLIC_KEY);
        assert_eq!(record.id(), "df96b39d3baa8a7ebf7abede1d1d271f8e8101d7");
        assert_eq!(record.private_key().to_base64(), PRIVATE_KEY);
    }

    #[test]
    fn test_derive_keeps_unclamped_scalar() {
        let raw = [0xFFu8; 32];
        let record = derive(&encode_key(&raw)).unwrap();

        assert_eq!(record.private_key().as_bytes(), &raw);
    }

    #[test]
    fn test_unclamped_scalar_matches_clamped_public_key() {
        let raw = [0xFFu8; 32];

        let unclamped = derive_from_bytes(&raw).unwrap();
        let clamped = derive_from_bytes(&clamp_scalar(raw)).unwrap();

        assert_eq!(unclamped.public_key(), clamped.public_key());
        assert_eq!(unclamped.id(), clamped.id());
    }

    #[test]
    fn test_wrong_length_rejected() {
        for len in [0usize, 31, 33, 64] {
            let err = derive_from_bytes(&vec![0x42u8; len]).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert_eq!(err.to_string(), "private key must be 32 bytes long");
        }
    }

    #[test]
    fn test_malformed_base64_rejected() {
        let err = derive("not!base64").unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_empty_input_is_a_length_error() {
        let err = derive("").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
