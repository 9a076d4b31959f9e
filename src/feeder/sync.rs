//! Blocking feeder over a `std::io::Read` source.

use std::io::Read;

use crate::buffer::{BufferPool, PooledBuf, SharedPool};
use crate::config::FeedConfig;
use crate::digest::Digest;
use crate::error::FeedError;
use crate::hasher::BlockHasher;

/// Computes the digest of everything `reader` yields.
///
/// Uses the process-wide [`SharedPool`] and the default buffer size. This
/// is the strictly alternating pull/transform baseline: the resulting
/// digest is identical to the async feeder's for the same byte content.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use hashfeed::{compute_hash, Blake3Hasher};
///
/// let mut hasher = Blake3Hasher::new();
/// let digest = compute_hash(Cursor::new(b"hello world"), &mut hasher)?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), hashfeed::FeedError>(())
/// ```
pub fn compute_hash<R, H>(reader: R, hasher: &mut H) -> Result<Digest, FeedError>
where
    R: Read,
    H: BlockHasher,
{
    compute_hash_with(reader, hasher, SharedPool::global(), FeedConfig::default())
}

/// Computes the digest of everything `reader` yields, with explicit pool
/// and configuration.
///
/// The configuration is validated before any buffer is acquired or any
/// byte is read. Exactly the bytes each read fills are fed to the hasher,
/// so short reads anywhere in the stream do not affect the digest. The
/// buffer returns to the pool on every exit path.
pub fn compute_hash_with<R, H>(
    mut reader: R,
    hasher: &mut H,
    pool: &dyn BufferPool,
    config: FeedConfig,
) -> Result<Digest, FeedError>
where
    R: Read,
    H: BlockHasher,
{
    config.validate()?;

    let buffer_size = config.buffer_size();
    let mut buf = PooledBuf::acquire(pool, buffer_size);

    loop {
        let n = reader.read(&mut buf.as_mut_slice()[..buffer_size])?;
        if n == 0 {
            break;
        }
        hasher.transform_block(&buf.as_slice()[..n]);
    }

    Ok(hasher.digest())
}
