//! BLAKE3-based block hasher implementation.

use crate::digest::Digest;
use crate::hasher::BlockHasher;

/// A [`BlockHasher`] backed by BLAKE3.
///
/// `digest()` is non-destructive: BLAKE3 finalization does not consume the
/// state, so the digest can be read mid-stream and feeding can continue.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Creates a new hasher with a key for keyed hashing.
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            state: blake3::Hasher::new_keyed(key),
        }
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> Digest {
        Digest::from_slice(blake3::hash(data).as_bytes())
    }
}

impl BlockHasher for Blake3Hasher {
    fn transform_block(&mut self, block: &[u8]) {
        self.state.update(block);
    }

    fn digest(&self) -> Digest {
        Digest::from_slice(self.state.finalize().as_bytes())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}
