//! Configuration for feeding behavior.
//!
//! - [`FeedConfig`] - Chunk buffer sizing

use crate::error::FeedError;

/// Default chunk buffer size (4 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Configuration for a feeding computation.
///
/// The buffer size bounds how many bytes are pulled from the source per
/// read and handed to the hasher per transform. It never affects the
/// resulting digest value, only the chunking of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedConfig {
    buffer_size: usize,
}

impl FeedConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if the buffer size is zero.
    pub fn new(buffer_size: usize) -> Result<Self, FeedError> {
        if buffer_size == 0 {
            return Err(FeedError::InvalidConfig {
                message: "buffer size must be non-zero",
            });
        }

        Ok(Self { buffer_size })
    }

    /// Sets the buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Returns the buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), FeedError> {
        Self::new(self.buffer_size).map(|_| ())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
