//! Item-wise async feeder over a byte sequence.
//!
//! Adapts any asynchronous producer of single bytes to the same
//! look-ahead discipline as the stream feeder, at one-byte granularity:
//! item N+1 is requested before item N is hashed. Throughput is bounded
//! by per-item scheduling overhead, so this is a uniformity adapter for
//! non-block-oriented producers, not a fast path.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;

use crate::digest::Digest;
use crate::error::FeedError;
use crate::hasher::BlockHasher;

pin_project! {
    struct ByteStreamFeed<'a, S, H> {
        #[pin]
        stream: S,
        hasher: &'a mut H,
        // Byte pulled but not yet hashed
        lookahead: Option<u8>,
    }
}

impl<S, H> Future for ByteStreamFeed<'_, S, H>
where
    S: Stream<Item = io::Result<u8>>,
    H: BlockHasher,
{
    type Output = Result<Digest, FeedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Pending => {
                    if let Some(b) = this.lookahead.take() {
                        this.hasher.transform_block(&[b]);
                    }
                    return Poll::Pending;
                }
                Poll::Ready(None) => {
                    if let Some(b) = this.lookahead.take() {
                        this.hasher.transform_block(&[b]);
                    }
                    return Poll::Ready(Ok(this.hasher.digest()));
                }
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Err(e.into())),
                Poll::Ready(Some(Ok(b))) => {
                    if let Some(prev) = this.lookahead.replace(b) {
                        this.hasher.transform_block(&[prev]);
                    }
                }
            }
        }
    }
}

/// Computes the digest of an async sequence of single bytes.
///
/// Each byte is fed as a one-byte block (stack-local, no per-item
/// allocation), so the digest equals that of the same bytes fed through
/// [`crate::compute_hash_async`] from a block-oriented reader. An `Err`
/// item aborts the computation and propagates unchanged; dropping the
/// future cancels it without producing a digest.
///
/// # Example
///
/// ```ignore
/// use futures_util::stream;
/// use hashfeed::{compute_hash_bytes_async, Blake3Hasher};
///
/// let bytes = stream::iter(b"hello".iter().map(|&b| Ok(b)));
/// let mut hasher = Blake3Hasher::new();
/// let digest = compute_hash_bytes_async(bytes, &mut hasher).await?;
/// ```
pub async fn compute_hash_bytes_async<S, H>(stream: S, hasher: &mut H) -> Result<Digest, FeedError>
where
    S: Stream<Item = io::Result<u8>>,
    H: BlockHasher,
{
    ByteStreamFeed {
        stream,
        hasher,
        lookahead: None,
    }
    .await
}
