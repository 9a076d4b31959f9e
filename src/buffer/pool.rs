//! Process-wide buffer pool and the scoped-acquisition guard.

use std::sync::Mutex;

/// Maximum number of buffers kept on the shared free list.
pub const MAX_POOL_SIZE: usize = 8;

/// Largest buffer capacity worth retaining (64 KiB).
pub const MAX_POOLED_CAPACITY: usize = 64 * 1024;

/// A source of reusable byte buffers.
///
/// `acquire` returns a buffer of length at least `min_size` with
/// unspecified contents; it may be larger than requested. Every acquired
/// buffer must be passed back to `release` exactly once. Implementations
/// must tolerate `release` of buffers they did not hand out (a caller may
/// migrate buffers between pools it owns).
pub trait BufferPool {
    /// Returns a buffer of length at least `min_size`.
    fn acquire(&self, min_size: usize) -> Vec<u8>;

    /// Returns a buffer to the pool.
    fn release(&self, buf: Vec<u8>);
}

/// The default buffer pool.
///
/// Process-wide and thread-safe; unrelated computations may acquire from
/// it concurrently. The free list is bounded and oversized buffers are
/// dropped on release rather than retained.
///
/// # Example
///
/// ```
/// use hashfeed::{BufferPool, SharedPool};
///
/// let buf = SharedPool::global().acquire(4096);
/// assert!(buf.len() >= 4096);
/// SharedPool::global().release(buf);
/// ```
#[derive(Debug)]
pub struct SharedPool {
    free: Mutex<Vec<Vec<u8>>>,
}

static GLOBAL_POOL: SharedPool = SharedPool::new();

impl SharedPool {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }

    /// Returns the process-wide default pool.
    pub fn global() -> &'static SharedPool {
        &GLOBAL_POOL
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        // A poisoned free list only ever holds plain byte buffers.
        self.free
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BufferPool for SharedPool {
    fn acquire(&self, min_size: usize) -> Vec<u8> {
        let mut buf = self.lock().pop().unwrap_or_default();
        if buf.len() < min_size {
            buf.resize(min_size, 0);
        }
        buf
    }

    fn release(&self, buf: Vec<u8>) {
        if buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        let mut free = self.lock();
        if free.len() < MAX_POOL_SIZE {
            free.push(buf);
        }
    }
}

impl Default for SharedPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A pooled buffer that returns itself on drop.
///
/// Dropping the guard is the single release point, which makes release
/// unconditional across completion, error return, and future drop.
pub(crate) struct PooledBuf<'p> {
    data: Vec<u8>,
    pool: &'p dyn BufferPool,
}

impl<'p> PooledBuf<'p> {
    /// Acquires a buffer of length at least `min_size` from `pool`.
    pub(crate) fn acquire(pool: &'p dyn BufferPool, min_size: usize) -> Self {
        Self {
            data: pool.acquire(min_size),
            pool,
        }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Swaps the underlying buffers of two guards from the same pool.
    pub(crate) fn swap(a: &mut PooledBuf<'_>, b: &mut PooledBuf<'_>) {
        std::mem::swap(&mut a.data, &mut b.data);
    }
}

impl Drop for PooledBuf<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.data));
    }
}
