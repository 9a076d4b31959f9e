#![cfg(feature = "async-io")]
// Integration tests for the async feeding API
// Tests cover: sync/async equivalence, pipelined overlap, cancellation, pool accounting

use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use hashfeed::{
    BlockHasher, BufferPool, Digest, FeedConfig, FeedError, SharedPool, compute_hash,
    compute_hash_async, compute_hash_async_with, compute_hash_bytes_async,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Additive checksum hasher that records every block it sees.
struct SumHasher {
    sum: u8,
    blocks: Vec<usize>,
}

impl SumHasher {
    fn new() -> Self {
        Self {
            sum: 0,
            blocks: Vec::new(),
        }
    }
}

impl BlockHasher for SumHasher {
    fn transform_block(&mut self, block: &[u8]) {
        self.blocks.push(block.len());
        for &b in block {
            self.sum = self.sum.wrapping_add(b);
        }
    }

    fn digest(&self) -> Digest {
        Digest::from_slice(&[self.sum])
    }
}

/// Pool wrapper that counts acquire/release pairs.
struct CountingPool {
    inner: SharedPool,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl CountingPool {
    fn new() -> Self {
        Self {
            inner: SharedPool::new(),
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl BufferPool for CountingPool {
    fn acquire(&self, min_size: usize) -> Vec<u8> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.inner.acquire(min_size)
    }

    fn release(&self, buf: Vec<u8>) {
        self.released.fetch_add(1, Ordering::SeqCst);
        self.inner.release(buf);
    }
}

/// Reader that yields one chunk, then stays pending forever.
struct StallingReader {
    first: Option<Vec<u8>>,
}

impl AsyncRead for StallingReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        match self.first.take() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Poll::Ready(Ok(n))
            }
            None => Poll::Pending,
        }
    }
}

/// Reader that suspends before every chunk it yields.
struct ChoppyReader {
    chunks: Vec<Vec<u8>>,
    pending_next: bool,
}

impl ChoppyReader {
    fn new(data: &[u8], chunk_len: usize) -> Self {
        Self {
            chunks: data.chunks(chunk_len).rev().map(<[u8]>::to_vec).collect(),
            pending_next: true,
        }
    }
}

impl AsyncRead for ChoppyReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        if self.pending_next {
            self.pending_next = false;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        self.pending_next = true;

        match self.chunks.pop() {
            Some(data) => {
                // chunk_len never exceeds the feeder's buffer here
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Poll::Ready(Ok(n))
            }
            None => Poll::Ready(Ok(0)),
        }
    }
}

/// Reader that yields one chunk, then fails.
struct FailsOnSecondRead {
    first: Option<Vec<u8>>,
}

impl AsyncRead for FailsOnSecondRead {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        match self.first.take() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Poll::Ready(Ok(n))
            }
            None => Poll::Ready(Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "second read failed",
            ))),
        }
    }
}

// ============================================================================
// Sync/async equivalence
// ============================================================================

#[tokio::test]
async fn test_async_matches_sync() {
    let data: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();

    let mut sync_hasher = SumHasher::new();
    let sync_digest = compute_hash(io::Cursor::new(&data), &mut sync_hasher).unwrap();

    let mut async_hasher = SumHasher::new();
    let async_digest = compute_hash_async(&data[..], &mut async_hasher).await.unwrap();

    assert_eq!(sync_digest, async_digest, "sync and async digests must match");
}

#[tokio::test]
async fn test_buffer_size_does_not_affect_digest() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();

    let mut reference_hasher = SumHasher::new();
    let reference = compute_hash_async(&data[..], &mut reference_hasher).await.unwrap();

    for buffer_size in [1, 7, 100, 999, 4096] {
        let mut hasher = SumHasher::new();
        let digest = compute_hash_async_with(
            &data[..],
            &mut hasher,
            SharedPool::global(),
            FeedConfig::new(buffer_size).unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(digest, reference, "buffer size {} changed the digest", buffer_size);
    }
}

#[tokio::test]
async fn test_interleaved_pending_reads() {
    // A source that suspends before every chunk still hashes in order
    let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();

    let mut choppy = SumHasher::new();
    let choppy_digest = compute_hash_async_with(
        ChoppyReader::new(&data, 16),
        &mut choppy,
        SharedPool::global(),
        FeedConfig::new(64).unwrap(),
    )
    .await
    .unwrap();

    let mut smooth = SumHasher::new();
    let smooth_digest = compute_hash_async(&data[..], &mut smooth).await.unwrap();

    assert_eq!(choppy_digest, smooth_digest);
    let total: usize = choppy.blocks.iter().sum();
    assert_eq!(total, data.len(), "every pulled byte is hashed exactly once");
}

// ============================================================================
// Edge cases
// ============================================================================

#[tokio::test]
async fn test_empty_source() {
    let mut hasher = SumHasher::new();
    let empty: &[u8] = &[];
    let digest = compute_hash_async(empty, &mut hasher).await.unwrap();

    assert!(hasher.blocks.is_empty(), "empty source must never transform");
    assert_eq!(digest, SumHasher::new().digest());
}

#[tokio::test]
async fn test_single_byte_source() {
    let mut streamed = SumHasher::new();
    let single: &[u8] = &[0x61];
    let digest = compute_hash_async(single, &mut streamed).await.unwrap();

    let mut direct = SumHasher::new();
    direct.transform_block(&[0x61]);

    assert_eq!(streamed.blocks, vec![1]);
    assert_eq!(digest, direct.digest());
}

// ============================================================================
// Cancellation and pool accounting
// ============================================================================

#[test]
fn test_cancel_before_first_pull() {
    let pool = CountingPool::new();
    let mut hasher = SumHasher::new();

    {
        let reader = StallingReader { first: None };
        let fut = compute_hash_async_with(reader, &mut hasher, &pool, FeedConfig::default());
        let mut task = tokio_test::task::spawn(fut);
        assert!(task.poll().is_pending());
        // Dropping the task cancels the computation
    }

    assert!(hasher.blocks.is_empty(), "no transform before the first pull");
    assert_eq!(pool.acquired(), 2, "double buffering acquires two buffers");
    assert_eq!(pool.released(), 2, "cancellation must release both buffers");
}

#[test]
fn test_cancel_mid_stream() {
    let pool = CountingPool::new();
    let mut hasher = SumHasher::new();

    {
        let reader = StallingReader {
            first: Some(vec![1, 2, 3]),
        };
        let fut = compute_hash_async_with(reader, &mut hasher, &pool, FeedConfig::default());
        let mut task = tokio_test::task::spawn(fut);
        assert!(task.poll().is_pending());
    }

    assert_eq!(
        hasher.blocks,
        vec![3],
        "only the pulled prefix may have been transformed"
    );
    assert_eq!(pool.acquired(), pool.released());
}

#[tokio::test]
async fn test_source_failure_releases_buffers() {
    let pool = CountingPool::new();
    let mut hasher = SumHasher::new();
    let reader = FailsOnSecondRead {
        first: Some(vec![1, 2, 3]),
    };

    let result = compute_hash_async_with(reader, &mut hasher, &pool, FeedConfig::default()).await;

    assert!(matches!(result, Err(FeedError::Io(_))));
    assert!(
        hasher.blocks.len() <= 1,
        "never more transforms than chunks pulled"
    );
    assert_eq!(pool.acquired(), 2);
    assert_eq!(pool.released(), 2);
}

#[tokio::test]
async fn test_invalid_buffer_size_fails_before_acquisition() {
    let pool = CountingPool::new();
    let mut hasher = SumHasher::new();
    let reader: &[u8] = b"abc";

    let result = compute_hash_async_with(
        reader,
        &mut hasher,
        &pool,
        FeedConfig::default().with_buffer_size(0),
    )
    .await;

    assert!(matches!(result, Err(FeedError::InvalidConfig { .. })));
    assert_eq!(pool.acquired(), 0);
}

// ============================================================================
// Byte-sequence feeder
// ============================================================================

#[tokio::test]
async fn test_byte_sequence_matches_stream() {
    let data: Vec<u8> = (0..500).map(|i| (i % 251) as u8).collect();

    let mut item_hasher = SumHasher::new();
    let item_digest = compute_hash_bytes_async(
        futures_util::stream::iter(data.iter().map(|&b| Ok(b))),
        &mut item_hasher,
    )
    .await
    .unwrap();

    let mut stream_hasher = SumHasher::new();
    let stream_digest = compute_hash_async(&data[..], &mut stream_hasher).await.unwrap();

    assert_eq!(item_digest, stream_digest);
    assert_eq!(item_hasher.blocks.len(), data.len(), "one block per byte");
}

// ============================================================================
// BLAKE3 + tokio interop (feature = "hash-blake3")
// ============================================================================

#[cfg(feature = "hash-blake3")]
mod blake3_interop {
    use super::*;
    use hashfeed::Blake3Hasher;
    use tokio_util::compat::TokioAsyncReadCompatExt;

    #[tokio::test]
    async fn test_async_equals_one_shot() {
        let data: Vec<u8> = (0..50_000).map(|i| (i * 7 + 13) as u8).collect();

        let mut hasher = Blake3Hasher::new();
        let digest = compute_hash_async(&data[..], &mut hasher).await.unwrap();

        assert_eq!(digest, Blake3Hasher::hash(&data));
    }

    #[tokio::test]
    async fn test_tokio_file_via_compat() {
        let file = tokio::fs::File::open("Cargo.toml").await.unwrap();
        let mut hasher = Blake3Hasher::new();
        let digest = compute_hash_async(file.compat(), &mut hasher).await.unwrap();

        let expected = Blake3Hasher::hash(&std::fs::read("Cargo.toml").unwrap());
        assert_eq!(digest, expected);
    }
}
