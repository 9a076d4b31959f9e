//! Double-buffered async feeder over `futures_io::AsyncRead`.
//!
//! The feeder keeps two pooled buffers: `next` receives the in-flight
//! read while `working` holds the previous, stable chunk. Each poll
//! issues the read first; if the read is pending, the previous chunk is
//! hashed before suspending, so the CPU-bound transform overlaps the
//! in-flight I/O within a single task. Ownership of a filled buffer
//! moves to the hashing side by swapping the two buffers, so the hasher
//! never observes memory a read may still write into.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::{BufferPool, PooledBuf, SharedPool};
use crate::config::FeedConfig;
use crate::digest::Digest;
use crate::error::FeedError;
use crate::hasher::BlockHasher;

pin_project! {
    /// Future driving one double-buffered feeding computation.
    ///
    /// Both buffers return to the pool when the future is dropped,
    /// whether it completed, failed, or was cancelled mid-stream.
    struct HashFeed<'a, R, H> {
        #[pin]
        reader: R,
        hasher: &'a mut H,
        next: PooledBuf<'a>,
        working: PooledBuf<'a>,
        // Bytes in `working` pulled but not yet hashed; 0 = nothing pending
        filled: usize,
        buffer_size: usize,
    }
}

impl<R, H> Future for HashFeed<'_, R, H>
where
    R: AsyncRead,
    H: BlockHasher,
{
    type Output = Result<Digest, FeedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            // Issue the next pull before hashing the previous chunk.
            let buf = &mut this.next.as_mut_slice()[..*this.buffer_size];
            match this.reader.as_mut().poll_read(cx, buf) {
                Poll::Pending => {
                    // The pull is in flight: hash the previous chunk now,
                    // then suspend.
                    if *this.filled > 0 {
                        this.hasher
                            .transform_block(&this.working.as_slice()[..*this.filled]);
                        *this.filled = 0;
                    }
                    return Poll::Pending;
                }
                Poll::Ready(Err(e)) => {
                    // Buffers return to the pool on drop; no partial digest.
                    return Poll::Ready(Err(e.into()));
                }
                Poll::Ready(Ok(0)) => {
                    if *this.filled > 0 {
                        this.hasher
                            .transform_block(&this.working.as_slice()[..*this.filled]);
                        *this.filled = 0;
                    }
                    return Poll::Ready(Ok(this.hasher.digest()));
                }
                Poll::Ready(Ok(n)) => {
                    // Chunks are fed strictly in source order: the previous
                    // chunk is hashed before its buffer is recycled.
                    if *this.filled > 0 {
                        this.hasher
                            .transform_block(&this.working.as_slice()[..*this.filled]);
                    }
                    PooledBuf::swap(this.next, this.working);
                    *this.filled = n;
                }
            }
        }
    }
}

/// Computes the digest of everything `reader` yields.
///
/// Uses the process-wide [`SharedPool`] and the default buffer size.
/// Yields the same digest as [`crate::compute_hash`] for the same byte
/// content, regardless of buffer size.
///
/// Dropping the returned future cancels the computation: no digest is
/// produced and both chunk buffers return to the pool.
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts `tokio::io::AsyncRead`
/// to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use hashfeed::{compute_hash_async, Blake3Hasher};
///
/// let file = tokio::fs::File::open("data.bin").await?;
/// let mut hasher = Blake3Hasher::new();
/// let digest = compute_hash_async(file.compat(), &mut hasher).await?;
/// ```
pub async fn compute_hash_async<R, H>(reader: R, hasher: &mut H) -> Result<Digest, FeedError>
where
    R: AsyncRead,
    H: BlockHasher,
{
    compute_hash_async_with(reader, hasher, SharedPool::global(), FeedConfig::default()).await
}

/// Computes the digest of everything `reader` yields, with explicit pool
/// and configuration.
///
/// The configuration is validated before any buffer is acquired or any
/// read is issued. Two buffers of `config.buffer_size()` are drawn from
/// `pool` for the double-buffered pipeline and released on every exit
/// path.
pub async fn compute_hash_async_with<R, H>(
    reader: R,
    hasher: &mut H,
    pool: &dyn BufferPool,
    config: FeedConfig,
) -> Result<Digest, FeedError>
where
    R: AsyncRead,
    H: BlockHasher,
{
    config.validate()?;

    let buffer_size = config.buffer_size();
    HashFeed {
        reader,
        hasher,
        next: PooledBuf::acquire(pool, buffer_size),
        working: PooledBuf::acquire(pool, buffer_size),
        filled: 0,
        buffer_size,
    }
    .await
}
