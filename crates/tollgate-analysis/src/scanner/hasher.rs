//! Content hashing (xxh3).

use xxhash_rust::xxh3::xxh3_64;

/// Hash file contents. Stable across runs and platforms.
pub fn hash_content(bytes: &[u8]) -> u64 {
    xxh3_64(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_content(b"contract C {}"), hash_content(b"contract C {}"));
        assert_ne!(hash_content(b"contract C {}"), hash_content(b"contract D {}"));
    }
}
