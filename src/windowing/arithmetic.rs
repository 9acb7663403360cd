//! Floor division and modulo with the sign of the divisor.
//!
//! Rust's `/` and `%` on signed integers truncate toward zero, so
//! `-1 / 3 == 0` and `-1 % 3 == -1`. Periodic windows need the
//! floor convention instead (`floor_div(-1, 3) == -1`, `true_mod(-1, 3) == 2`)
//! so that a logical position left of zero maps onto the end of the series
//! and counts as one wrap backwards.
//!
//! `float_mod` is the floating-point counterpart used to fold time values
//! into `[0, period)`.

/// `⌊a / b⌋`, rounding toward negative infinity.
///
/// `b` must be non-zero. Callers in this crate always pass `b > 0`.
#[inline]
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) { q - 1 } else { q }
}

/// `a - b * floor_div(a, b)`; lies in `[0, b)` whenever `b > 0`.
///
/// Computed from the truncating remainder, so it does not overflow for
/// `a` near `i64::MIN` or `i64::MAX`.
#[inline]
pub fn true_mod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && ((r < 0) != (b < 0)) { r + b } else { r }
}

/// Floating-point modulo taking the sign of the divisor.
///
/// For `p > 0` the result lies in `[0, p)`, and an exact zero remainder is
/// returned as `+0.0` even when `x` is negative. A negative `x` whose
/// magnitude is below half an ulp of `p` rounds up to `p` itself; that case is
/// folded back to `0.0` so the result stays inside the half-open interval.
#[inline]
pub fn float_mod(x: f64, p: f64) -> f64 {
    let mut r = x % p;
    if r == 0.0 {
        return 0.0_f64.copysign(p);
    }
    if (r < 0.0) != (p < 0.0) {
        r += p;
        if r == p {
            r = 0.0_f64.copysign(p);
        }
    }
    r
}
