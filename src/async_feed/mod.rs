//! Async feeders.
//!
//! This module provides asynchronous feeding using the
//! `futures-io::AsyncRead` and `futures-core::Stream` traits, making it
//! runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`compute_hash_async`] / [`compute_hash_async_with`] - Digest an async reader
//! - [`compute_hash_bytes_async`] - Digest an async sequence of single bytes
//!
//! This module requires the `async-io` feature to be enabled.

mod items;
mod stream;

pub use items::compute_hash_bytes_async;
pub use stream::{compute_hash_async, compute_hash_async_with};
