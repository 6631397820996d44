use std::time::{SystemTime, UNIX_EPOCH};
use xxhash_rust::xxh32::xxh32;

/// Derive a world seed from free-form text, e.g. a command-line argument.
///
/// Stable across runs and platforms, so the same text always names the same map.
pub fn seed_from_text(text: &str) -> u32 {
    xxh32(text.as_bytes(), 0)
}

/// Derive a seed from the wall clock (whole seconds since the Unix epoch).
///
/// A clock set before the epoch yields 0.
pub fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as u32)
        .unwrap_or_default()
}
