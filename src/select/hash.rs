//! Stateless, content-derived pseudo-random choices.
//!
//! Every choice that should look varied but render identically on every run (layout
//! variant, transition, mascot expression, emoji) goes through [`hash_text`]. The hash is a
//! 31-polynomial over UTF-16 code units with 32-bit wrapping arithmetic, so it does not
//! depend on platform, pointer width or `std`'s randomized hasher.

/// Maps `text` to an integer in `[0, modulus)`. `modulus == 0` yields 0.
pub fn hash_text(text: &str, modulus: u32) -> u32 {
    if modulus == 0 {
        return 0;
    }
    polynomial_hash(text).unsigned_abs() % modulus
}

/// `(hash_text(key, n) + scene_index) mod n`.
///
/// Spreads consecutive scenes with similar keys across different choices while staying
/// deterministic.
pub fn spread_index(key: &str, scene_index: u32, n: u32) -> u32 {
    if n == 0 {
        return 0;
    }
    ((u64::from(hash_text(key, n)) + u64::from(scene_index)) % u64::from(n)) as u32
}

/// Deterministically picks one element of `items` keyed on `key`.
pub fn pick<'a, T>(key: &str, items: &'a [T]) -> Option<&'a T> {
    let n = u32::try_from(items.len()).unwrap_or(u32::MAX);
    items.get(hash_text(key, n) as usize)
}

/// Joins a base key with a discriminant the way every selector key in the crate is built.
pub fn key(base: &str, discriminant: impl std::fmt::Display) -> String {
    format!("{base}{discriminant}")
}

fn polynomial_hash(text: &str) -> i32 {
    let mut h: i32 = 0;
    for unit in text.encode_utf16() {
        h = h
            .wrapping_shl(5)
            .wrapping_sub(h)
            .wrapping_add(i32::from(unit));
    }
    h
}

#[cfg(test)]
#[path = "../../tests/unit/select/hash.rs"]
mod tests;
