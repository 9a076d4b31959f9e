//! Error types for hashfeed.

use std::fmt;

/// Errors that can occur while feeding a source into a hasher.
#[derive(Debug)]
pub enum FeedError {
    /// An I/O error occurred while pulling input data.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The primitive's digest was too short for the requested conversion.
    DigestTooShort {
        /// The actual digest length in bytes.
        actual: usize,
        /// The minimum length required.
        required: usize,
    },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Io(e) => write!(f, "io error: {}", e),
            FeedError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            FeedError::DigestTooShort { actual, required } => {
                write!(f, "digest too short: {} bytes (need {})", actual, required)
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FeedError {
    fn from(e: std::io::Error) -> Self {
        FeedError::Io(e)
    }
}
