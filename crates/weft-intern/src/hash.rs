//! Content hashing for intern buckets.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Hash code of `text[start..end]`.
///
/// Hashes only the bytes of the range, so a subrange and an independent copy
/// of it always land in the same bucket.
pub fn range_hash_code(text: &str, start: usize, end: usize) -> u32 {
    hash_code(&text.as_bytes()[start..end])
}

/// Hash code of a whole string.
pub fn str_hash_code(text: &str) -> u32 {
    hash_code(text.as_bytes())
}

fn hash_code(bytes: &[u8]) -> u32 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.write_usize(bytes.len());
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}
