#![no_main]

use std::io::Cursor;

use hashfeed::{Blake3Hasher, FeedConfig, SharedPool, compute_hash_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // One-shot reference digest
    let expected = Blake3Hasher::hash(&data);

    // Buffer sizes dividing, not dividing, and exceeding the input length
    let buffer_sizes = [1, 3, 64, 4096];

    for buffer_size in buffer_sizes {
        let config = FeedConfig::new(buffer_size).unwrap();
        let mut hasher = Blake3Hasher::new();
        let digest = compute_hash_with(
            Cursor::new(&data),
            &mut hasher,
            SharedPool::global(),
            config,
        )
        .unwrap();

        // Verify: chunk boundaries never observable in the digest
        assert_eq!(digest, expected);

        // Verify: determinism - same input produces the same digest
        let mut hasher2 = Blake3Hasher::new();
        let digest2 = compute_hash_with(
            Cursor::new(&data),
            &mut hasher2,
            SharedPool::global(),
            config,
        )
        .unwrap();
        assert_eq!(digest, digest2);
    }
});
