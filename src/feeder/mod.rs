//! Synchronous feeders.
//!
//! - [`compute_hash`] / [`compute_hash_with`] - Digest a [`std::io::Read`] source
//! - [`compute_hash_slice`] - Digest an in-memory slice
//! - [`combine_hash_codes`] - Combine integer hash codes into one

mod combine;
mod sync;

pub use combine::{combine_hash_codes, compute_hash_slice};
pub use sync::{compute_hash, compute_hash_with};
