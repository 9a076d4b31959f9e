//! Item-wise digesting: in-memory slices and integer hash codes.

use crate::digest::Digest;
use crate::error::FeedError;
use crate::hasher::BlockHasher;

/// Digests an in-memory slice in a single transform.
///
/// The returned [`Digest`] is an owned snapshot taken after the block is
/// fed; it does not change if the hasher is fed again afterwards.
///
/// # Example
///
/// ```
/// use hashfeed::{compute_hash_slice, Blake3Hasher};
///
/// let mut hasher = Blake3Hasher::new();
/// let digest = compute_hash_slice(&mut hasher, b"hello world");
/// assert_eq!(digest, Blake3Hasher::hash(b"hello world"));
/// ```
pub fn compute_hash_slice<H: BlockHasher>(hasher: &mut H, bytes: &[u8]) -> Digest {
    hasher.transform_block(bytes);
    hasher.digest()
}

/// Combines a sequence of integer hash codes into a single code.
///
/// Each code is fed as its native-endian 4-byte representation (one block
/// per code, stack-local, no per-item allocation), and the combined code
/// is the digest's first 4 bytes read back native-endian. The result is
/// order-sensitive; callers combining unordered collections must
/// canonicalize the order themselves.
///
/// Returns [`FeedError::DigestTooShort`] if the primitive's digest is
/// shorter than 4 bytes.
pub fn combine_hash_codes<H, I>(hasher: &mut H, codes: I) -> Result<i32, FeedError>
where
    H: BlockHasher,
    I: IntoIterator<Item = i32>,
{
    for code in codes {
        hasher.transform_block(&code.to_ne_bytes());
    }

    let digest = hasher.digest();
    let bytes: [u8; 4] =
        digest.as_bytes()[..digest.len().min(4)]
            .try_into()
            .map_err(|_| FeedError::DigestTooShort {
                actual: digest.len(),
                required: 4,
            })?;

    Ok(i32::from_ne_bytes(bytes))
}
