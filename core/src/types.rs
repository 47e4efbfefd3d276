//! Key material and the records handed back to the host

use serde::{Serialize, Serializer};
use std::fmt;
use zeroize::Zeroize;

use crate::encoding::encode_key;

/// X25519 private scalar (32 bytes)
///
/// Bytes are wiped when the value is dropped.
#[derive(Clone)]
pub struct PrivateScalar([u8; 32]);

impl PrivateScalar {
    pub(crate) fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Standard base64 encoding of the scalar
    pub fn to_base64(&self) -> String {
        encode_key(&self.0)
    }
}

impl Drop for PrivateScalar {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateScalar(<redacted>)")
    }
}

impl Serialize for PrivateScalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

/// X25519 public point (32-byte u-coordinate)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicPoint([u8; 32]);

impl PublicPoint {
    pub(crate) fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        encode_key(&self.0)
    }
}

impl fmt::Debug for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicPoint({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl Serialize for PublicPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

/// A derived key pair together with its content address.
///
/// Records are immutable: a different private key always means a new record
/// with a new `id`.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRecord {
    id: String,
    private_key: PrivateScalar,
    public_key: PublicPoint,
}

impl KeyRecord {
    pub(crate) fn new(id: String, private_key: PrivateScalar, public_key: PublicPoint) -> Self {
        Self {
            id,
            private_key,
            public_key,
        }
    }

    /// Content address of the public key (40 lowercase hex chars)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn private_key(&self) -> &PrivateScalar {
        &self.private_key
    }

    pub fn public_key(&self) -> PublicPoint {
        self.public_key
    }

    /// The part of the record that is safe to show: `{id, public_key}`
    pub fn public_record(&self) -> PublicKeyRecord {
        PublicKeyRecord {
            id: self.id.clone(),
            public_key: self.public_key,
        }
    }
}

/// Result of deriving a public key from a caller-held private key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicKeyRecord {
    pub id: String,
    pub public_key: PublicPoint,
}
