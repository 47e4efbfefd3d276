//! Base64 wire encoding for key material
//!
//! Keys cross the host boundary as RFC 4648 standard base64 with padding.
//! Encoding is canonical; decoding tolerates non-zero trailing bits and
//! embedded line breaks, the same inputs Go's `base64.StdEncoding` accepts.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::Result;

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encode raw key bytes as standard base64
pub fn encode_key(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard base64 string, reporting malformed input as
/// [`Error::Encoding`](crate::Error::Encoding)
pub fn decode_key(encoded: &str) -> Result<Vec<u8>> {
    let cleaned: String = encoded
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    Ok(LENIENT_STANDARD.decode(cleaned)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_decode_known_key() {
        let bytes = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=").unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[0], 0x88);
        assert_eq!(bytes[31], 0x65);
    }

    #[test]
    fn test_encode_zero_key() {
        assert_eq!(
            encode_key(&[0u8; 32]),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="
        );
    }

    #[test]
    fn test_decode_rejects_invalid_symbol() {
        let result = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02Km!=");
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_decode_rejects_url_safe_alphabet() {
        assert!(decode_key("rXSwT_bVUlMB0URSwXrx1uPbGuo9GjYfKYDyYbV22TA=").is_err());
    }

    #[test]
    fn test_decode_allows_trailing_bits() {
        let canonical = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=").unwrap();
        let loose = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmV=").unwrap();

        assert_eq!(loose, canonical);
    }

    #[test]
    fn test_decode_skips_line_breaks() {
        let canonical = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=").unwrap();
        let wrapped = decode_key("iM4KhF7Zu6vYcTdamVOQsiNf\r\ntCdlu0ceBZonXb02KmU=\n").unwrap();

        assert_eq!(wrapped, canonical);
    }

    #[test]
    fn test_decode_still_rejects_other_whitespace() {
        assert!(decode_key("iM4KhF7Zu6vYcTdamVOQsiNf tCdlu0ceBZonXb02KmU=").is_err());
    }

    #[test]
    fn test_decode_still_requires_padding() {
        assert!(decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU").is_err());
    }

    #[test]
    fn test_encode_stays_canonical() {
        let bytes = decode_key("iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmV=").unwrap();
        assert_eq!(encode_key(&bytes), "iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=");
    }

    #[test]
    fn test_decode_empty_is_empty() {
        assert!(decode_key("").unwrap().is_empty());
    }
}
