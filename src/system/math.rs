//! Multiply/divide helpers

/// Multiplies two integers, wrapping on overflow.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Truncating integer division.
///
/// A zero divisor yields `0` rather than a fault. `i32::MIN / -1` wraps to
/// `i32::MIN`.
pub fn divide(a: i32, b: i32) -> i32 {
    if b == 0 {
        return 0;
    }
    a.wrapping_div(b)
}
