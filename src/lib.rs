//! hashfeed
//!
//! Streaming incremental hashing for Rust.
//!
//! `hashfeed` pulls bytes from a source and feeds them through a
//! [`BlockHasher`] one fixed-size chunk at a time, so a digest can be
//! computed without materializing the whole input. It is designed as a
//! small, composable primitive for:
//!
//! - content addressing
//! - integrity checking of large files and network payloads
//! - combining pre-computed hash codes
//!
//! The crate intentionally:
//! - does NOT choose or implement a digest algorithm (bring your own
//!   [`BlockHasher`]; a BLAKE3 adapter ships behind the `hash-blake3`
//!   feature)
//! - does NOT define wire or file formats
//! - does NOT run independent computations in parallel
//!
//! It only does one thing: **Pull bytes → feed hasher → return digest**
//!
//! The async feeder is double-buffered: the next read is issued before the
//! previous chunk is hashed, so hashing overlaps in-flight I/O inside a
//! single task. Chunk boundaries never affect the digest: any buffer size
//! produces the same value as hashing the concatenated input.
//!
//! # Sync
//!
//! ```
//! use std::io::Cursor;
//! use hashfeed::{compute_hash, Blake3Hasher, FeedError};
//!
//! fn main() -> Result<(), FeedError> {
//!     let mut hasher = Blake3Hasher::new();
//!     let digest = compute_hash(Cursor::new(b"hello world"), &mut hasher)?;
//!     println!("digest {}", digest);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use hashfeed::{compute_hash_async, Blake3Hasher};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), hashfeed::FeedError> {
//!     let mut hasher = Blake3Hasher::new();
//!     let digest = compute_hash_async(reader, &mut hasher).await?;
//!     println!("digest {}", digest);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod error;
mod feeder;
mod hasher;

mod buffer; // pool contract + default shared pool

#[cfg(feature = "async-io")]
mod async_feed;

//
// Public surface (intentionally tiny)
//

pub use buffer::{BufferPool, SharedPool};
pub use config::{DEFAULT_BUFFER_SIZE, FeedConfig};
pub use digest::Digest;
pub use error::FeedError;
pub use feeder::{combine_hash_codes, compute_hash, compute_hash_slice, compute_hash_with};
pub use hasher::BlockHasher;

#[cfg(feature = "hash-blake3")]
pub use hasher::Blake3Hasher;

#[cfg(feature = "async-io")]
pub use async_feed::{compute_hash_async, compute_hash_async_with, compute_hash_bytes_async};
