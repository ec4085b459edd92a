//! Reductions from a total to a bucket index.
//!
//! [`mod_index`] is the only place where classification buckets are derived
//! from a total; callers never take a raw remainder themselves.

use abjad_model::Modulus;

/// Repeated digit sum of `n`: `0` for `0`, otherwise a value in `1..=9`.
pub fn digital_root(n: u64) -> u32 {
    if n == 0 {
        0
    } else {
        // 1 + (n - 1) % 9 is always <= 9
        (1 + (n - 1) % 9) as u32
    }
}

/// 1-indexed modulo: the bucket of `n` among `base` buckets.
///
/// A total that divides evenly belongs to the last bucket, so the result is
/// always in `1..=base` and never `0`.
pub fn mod_index(n: u64, base: Modulus) -> u32 {
    let size = base.value();
    match n % u64::from(size) {
        0 => size,
        // remainder is below size, which fits in u32
        r => r as u32,
    }
}
