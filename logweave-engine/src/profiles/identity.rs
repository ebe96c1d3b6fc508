//! Profile identity generation.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Generate a UUID-shaped identity string from a seed string and a salt.
///
/// Deterministic on purpose: the same (seed, salt) pair always yields the
/// same name, so collision handling can regenerate by bumping the salt.
pub fn generate_name(seed: &str, salt: u64) -> String {
    let hi = xxh3_64_with_seed(seed.as_bytes(), salt);
    let lo = xxh3_64_with_seed(seed.as_bytes(), salt ^ 0x9e37_79b9_7f4a_7c15);
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (hi >> 32) as u32,
        (hi >> 16) & 0xffff,
        hi & 0xffff,
        (lo >> 48) & 0xffff,
        lo & 0xffff_ffff_ffff
    )
}
