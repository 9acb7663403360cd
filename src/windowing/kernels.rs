//! windowing::kernels — the four windowed-sum kernels.
//!
//! Purpose
//! -------
//! Compute boxcar window sums around a set of centers in a single array. The
//! kernels are the performance-critical layer under
//! [`windowed_sum`](crate::windowing::windowed_sum) and are public so callers
//! that already hold canonical inputs can skip validation and dispatch.
//!
//! Key behaviors
//! -------------
//! - [`fixed`]: centers `0..N`, one shared span, window clamped to `[0, N)`.
//! - [`fixed_periodic`]: centers `0..N`, one shared span, window wraps.
//! - [`variable`]: explicit centers with one span each, clamped.
//! - [`variable_periodic`]: explicit centers with one span each, wraps.
//!
//! Window placement
//! ----------------
//! For center `c` and span `S` the logical window is `[c - S/2, c - S/2 + S)`
//! with `S/2` rounded down, so even spans take one more element left of the
//! center than right of it.
//!
//! Boundary asymmetry
//! ------------------
//! The clamped kernels drop logical positions outside `[0, N)`: windows near
//! either edge are simply shorter and may be empty. The periodic kernels never
//! drop anything: each center always sums exactly `S` terms, mapping logical
//! position `j` onto `j mod N` and wrapping as many times as `S` requires,
//! including `S > N`. Both behaviors are intended; do not make the clamped
//! kernels wrap or pad.
//!
//! Periodic time correction
//! ------------------------
//! Periodic kernels receive the *unweighted* array and apply the time weight
//! themselves: the term for logical position `j` is
//! `a[j mod N] * (t[j mod N] + period * floor(j / N))^tpower`. The offset
//! restores the unwrapped time for positions that crossed a boundary, given
//! that `t` was folded into one period and is sorted.
//!
//! Invariants & assumptions
//! ------------------------
//! - `subtract_mid` compares the *logical* position to the center, so in
//!   periodic mode a wrapped copy of the center element (possible when
//!   `S > N`) is still counted.
//! - Each center's terms are accumulated left to right in logical order with
//!   a plain running sum. The reference implementation in
//!   [`reference`](crate::windowing::reference) does the same, so the two
//!   agree bit for bit. Do not replace the fold with `ndarray`'s `sum()`,
//!   which reorders additions.
//! - Non-positive spans produce empty windows (sum `0.0`); callers that need
//!   them rejected go through the orchestrator.
//! - Every `i64` center is accepted, including `i64::MIN` and `i64::MAX`;
//!   window bounds never overflow.
//!
//! Performance
//! -----------
//! - Clamped kernels compute bounds once per center and fold over contiguous
//!   sub-views; periodic kernels track the wrapped position and wrap count
//!   incrementally instead of dividing per term.
//! - With the `parallel` feature, centers are distributed over the rayon
//!   pool. Output is unchanged because each center is still summed
//!   sequentially.
//!
//! Testing notes
//! -------------
//! - The `parallel` path is only compiled with `--features parallel`; run
//!   the suite once with and once without it. Under the feature the unit
//!   tests here and `tests/windowed_sum_parity.rs` check it against the
//!   sequential reference.

use ndarray::{Array1, ArrayView1, Zip, s};

use crate::windowing::arithmetic::{floor_div, true_mod};

/// Clamped window sums with a shared span.
///
/// `r[i] = Σ a[j]` for `j ∈ [max(0, i - S/2), min(N, i - S/2 + S))`,
/// skipping `j == i` when `subtract_mid`. Output length is `N`.
///
/// ```rust
/// use ndarray::array;
/// use rust_windowsum::windowing::kernels::fixed;
///
/// let r = fixed(array![1.0, 2.0, 3.0, 4.0].view(), 3, false);
/// assert_eq!(r, array![3.0, 6.0, 9.0, 7.0]);
/// ```
pub fn fixed(a: ArrayView1<'_, f64>, span: i64, subtract_mid: bool) -> Array1<f64> {
    fill_centers(a.len(), |i| clamped_sum(a, i as i64, span, subtract_mid))
}

/// Wrapping window sums with a shared span.
///
/// `r[i] = Σ_{j=start}^{start+S-1} a[j mod N] * (t[j mod N] + P·⌊j/N⌋)^tpower`
/// with `start = i - S/2`, skipping `j == i` when `subtract_mid`. Output
/// length is `N`.
///
/// Panics
/// ------
/// - If `t.len() != a.len()`.
pub fn fixed_periodic(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, span: i64, subtract_mid: bool,
    period: f64,
) -> Array1<f64> {
    assert_eq!(a.len(), t.len(), "fixed_periodic: a and t must have equal length");
    fill_centers(a.len(), |i| wrapped_sum(a, t, tpower, i as i64, span, subtract_mid, period))
}

/// Clamped window sums around explicit centers with per-center spans.
///
/// `r[i] = Σ a[j]` for `j ∈ [max(0, ind[i] - span[i]/2), min(N, ind[i] - span[i]/2 + span[i]))`,
/// skipping `j == ind[i]` when `subtract_mid`. Output length is `ind.len()`.
/// Centers may lie outside `[0, N)`; only the in-range part of their window
/// contributes.
///
/// Panics
/// ------
/// - If `ind.len() != span.len()`.
pub fn variable(
    a: ArrayView1<'_, f64>, ind: ArrayView1<'_, i64>, span: ArrayView1<'_, i64>,
    subtract_mid: bool,
) -> Array1<f64> {
    assert_eq!(ind.len(), span.len(), "variable: ind and span must have equal length");
    fill_centers(ind.len(), |i| clamped_sum(a, ind[i], span[i], subtract_mid))
}

/// Wrapping window sums around explicit centers with per-center spans.
///
/// Same term as [`fixed_periodic`] with `start = ind[i] - span[i]/2` and
/// `span[i]` terms per center; `j == ind[i]` is skipped when `subtract_mid`.
/// Output length is `ind.len()`.
///
/// Panics
/// ------
/// - If `t.len() != a.len()` or `ind.len() != span.len()`.
/// - If `a` is empty while `ind` is not; there is nothing to wrap onto.
pub fn variable_periodic(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, ind: ArrayView1<'_, i64>,
    span: ArrayView1<'_, i64>, subtract_mid: bool, period: f64,
) -> Array1<f64> {
    assert_eq!(a.len(), t.len(), "variable_periodic: a and t must have equal length");
    assert_eq!(ind.len(), span.len(), "variable_periodic: ind and span must have equal length");
    assert!(
        !a.is_empty() || ind.is_empty(),
        "variable_periodic: cannot wrap centers onto an empty series"
    );
    fill_centers(ind.len(), |i| wrapped_sum(a, t, tpower, ind[i], span[i], subtract_mid, period))
}

/// Evaluate `f` for every output position.
fn fill_centers<F>(len: usize, f: F) -> Array1<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    let mut out = Array1::<f64>::zeros(len);
    #[cfg(feature = "parallel")]
    Zip::indexed(&mut out).par_for_each(|i, r| *r = f(i));
    #[cfg(not(feature = "parallel"))]
    Zip::indexed(&mut out).for_each(|i, r| *r = f(i));
    out
}

#[inline]
fn running_sum(init: f64, values: ArrayView1<'_, f64>) -> f64 {
    values.iter().fold(init, |acc, &x| acc + x)
}

/// Sum of `a` over the in-range part of one window.
#[inline]
fn clamped_sum(a: ArrayView1<'_, f64>, center: i64, span: i64, subtract_mid: bool) -> f64 {
    let n = a.len() as i64;
    let half = floor_div(span, 2);
    // Saturation only moves a bound further past the array edge it already
    // lies beyond, so the clamped range is unchanged.
    let lo = center.saturating_sub(half).max(0);
    let hi = center.saturating_add(span - half).min(n);
    if lo >= hi {
        return 0.0;
    }
    let skip_center = subtract_mid && (lo..hi).contains(&center);
    let (lo, hi) = (lo as usize, hi as usize);

    if skip_center {
        let mid = center as usize;
        let left = running_sum(0.0, a.slice(s![lo..mid]));
        running_sum(left, a.slice(s![mid + 1..hi]))
    } else {
        running_sum(0.0, a.slice(s![lo..hi]))
    }
}

/// Time-weighted sum of exactly `span` logical positions starting at
/// `center - span/2`, wrapping modulo `N`.
#[inline]
fn wrapped_sum(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, center: i64, span: i64,
    subtract_mid: bool, period: f64,
) -> f64 {
    if span <= 0 {
        return 0.0;
    }
    let n = a.len() as i64;
    let half = floor_div(span, 2);

    // Positions are counted from the center's own wrap `base`, so that
    // centers near the ends of the i64 range do not overflow.
    let base = floor_div(center, n);
    let first = true_mod(center, n) - half;
    let mut idx = true_mod(first, n) as usize;
    let mut wraps = floor_div(first, n);
    let mut offset = period * (base as f64 + wraps as f64);
    let mut sum = 0.0;
    for k in 0..span {
        if !(subtract_mid && k == half) {
            sum += a[idx] * (t[idx] + offset).powi(tpower);
        }
        idx += 1;
        if idx == a.len() {
            idx = 0;
            wraps += 1;
            offset = period * (base as f64 + wraps as f64);
        }
    }
    sum
}
