//! String helpers

use core::cmp::Ordering;

/// Number of bytes in `s`.
pub fn string_length(s: &str) -> usize {
    s.len()
}

/// Lexicographic byte-wise comparison.
///
/// Returns `0` when both strings are identical, a negative value when `a`
/// sorts before `b` and a positive value otherwise.
pub fn string_compare(a: &str, b: &str) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
