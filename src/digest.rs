//! The Digest type - an owned snapshot of accumulated hash state.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

use bytes::Bytes;

/// An immutable digest value produced by a [`crate::BlockHasher`].
///
/// A digest reflects every block fed to the hasher up to the moment it was
/// taken; feeding more blocks into the same hasher does not change
/// previously returned `Digest` values.
///
/// # Example
///
/// ```
/// use hashfeed::Digest;
///
/// let digest = Digest::from_slice(&[0x2c]);
/// assert_eq!(digest.as_bytes(), &[0x2c]);
/// assert_eq!(digest.to_hex(), "2c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digest(Bytes);

impl Digest {
    /// Creates a digest from an owned byte container.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Creates a digest by copying a byte slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(slice))
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the digest has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the digest as a hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(self.0.len() * 2);
        for byte in &self.0 {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Consumes the digest and returns the underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<Bytes> for Digest {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl StdHash for Digest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
