//! The block-hash primitive contract consumed by the feeders.
//!
//! - [`BlockHasher`] - Incremental hash state fed one block at a time
//! - [`Blake3Hasher`] - BLAKE3 implementation (requires `hash-blake3` feature)

use crate::digest::Digest;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub use blake3::Blake3Hasher;

/// An incremental hash primitive.
///
/// The feeders in this crate own no digest state themselves; they pull
/// bytes from a source and hand each chunk to a `BlockHasher`. The digest
/// after feeding blocks B1..Bn in order must equal the digest of the
/// concatenation of B1..Bn, so block boundaries are never observable in
/// the result.
///
/// # Contract
///
/// - `transform_block` must not retain the slice; the caller may reuse or
///   overwrite the memory as soon as the call returns.
/// - `digest` is callable at any point and returns an owned snapshot
///   reflecting all blocks fed so far; it must not finalize or otherwise
///   invalidate further feeding.
pub trait BlockHasher {
    /// Feeds one contiguous block into the running digest state.
    fn transform_block(&mut self, block: &[u8]);

    /// Returns the digest over all blocks fed so far.
    fn digest(&self) -> Digest;
}

impl<H: BlockHasher + ?Sized> BlockHasher for &mut H {
    fn transform_block(&mut self, block: &[u8]) {
        (**self).transform_block(block);
    }

    fn digest(&self) -> Digest {
        (**self).digest()
    }
}
