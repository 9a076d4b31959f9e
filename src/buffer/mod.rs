//! Buffer pooling for feeding computations.
//!
//! A feeding computation acquires its chunk buffers from a [`BufferPool`]
//! and returns every buffer exactly once, on every exit path. The default
//! pool is process-wide and safe to share across unrelated computations.
//!
//! - [`BufferPool`] - The pool contract (caller-suppliable)
//! - [`SharedPool`] - Default process-wide pool

mod pool;

pub use pool::{BufferPool, SharedPool};

pub(crate) use pool::PooledBuf;
