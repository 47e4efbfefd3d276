//! Private scalar clamping (RFC 7748, section 5)

/// Size of an X25519 scalar in bytes
pub const SCALAR_SIZE: usize = 32;

/// Clamp raw random bytes into a Curve25519 private scalar.
///
/// Clears the three low bits of the first byte, clears the high bit of the
/// last byte and sets its second-highest bit. Every other byte is untouched.
pub fn clamp_scalar(mut bytes: [u8; SCALAR_SIZE]) -> [u8; SCALAR_SIZE] {
    bytes[0] &= 0xF8;
    bytes[31] = (bytes[31] & 0x7F) | 0x40;
    bytes
}

/// Whether `bytes` already satisfies the clamped scalar format
pub fn is_clamped(bytes: &[u8; SCALAR_SIZE]) -> bool {
    bytes[0] & 0x07 == 0 && bytes[31] & 0x80 == 0 && bytes[31] & 0x40 != 0
}
