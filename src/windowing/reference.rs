//! windowing::reference — straightforward windowed sums for cross-checking.
//!
//! Purpose
//! -------
//! Provide a second implementation of the four kernels and of the
//! orchestrator, written as literal loops over logical window positions with
//! per-term bounds checks and per-term wrapping. It shares no code with
//! [`kernels`](crate::windowing::kernels), [`WindowPlan`] or the validation
//! and broadcasting helpers; only [`WindowError`] and the float fold
//! [`float_mod`] are common to both paths.
//!
//! Key behaviors
//! -------------
//! - Each `*_slow` kernel has the same signature and semantics as its fast
//!   counterpart.
//! - [`windowed_sum_slow`] has the same contract and errors as
//!   [`windowed_sum`](crate::windowing::windowed_sum), checked in the same
//!   order, but validates, broadcasts and folds `t` on its own.
//!
//! Invariants & assumptions
//! ------------------------
//! - Logical positions are `i128`, so no center or span can overflow them.
//! - Terms are added in increasing logical position starting from `0.0`,
//!   exactly like the fast kernels, so outputs are equal under `==`, not
//!   merely close.
//!
//! Testing notes
//! -------------
//! - Unit tests here pin the reference on small hand-computed cases; the
//!   randomized fast-vs-reference comparison lives in
//!   `tests/windowed_sum_parity.rs`.
//!
//! [`WindowPlan`]: crate::windowing::WindowPlan

use ndarray::{Array1, ArrayView1};

use crate::windowing::{
    arithmetic::float_mod,
    errors::{WindowError, WindowResult},
    options::{Span, TPowers, WindowOptions},
};

/// Reference for [`kernels::fixed`](crate::windowing::kernels::fixed).
pub fn fixed_slow(a: ArrayView1<'_, f64>, span: i64, subtract_mid: bool) -> Array1<f64> {
    let n = a.len() as i64;
    let mut out = Vec::with_capacity(a.len());
    for i in 0..n {
        out.push(clamped_term_sum(a, i, span, subtract_mid));
    }
    Array1::from(out)
}

/// Reference for [`kernels::fixed_periodic`](crate::windowing::kernels::fixed_periodic).
pub fn fixed_periodic_slow(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, span: i64, subtract_mid: bool,
    period: f64,
) -> Array1<f64> {
    let n = a.len() as i64;
    let mut out = Vec::with_capacity(a.len());
    for i in 0..n {
        out.push(wrapped_term_sum(a, t, tpower, i, span, subtract_mid, period));
    }
    Array1::from(out)
}

/// Reference for [`kernels::variable`](crate::windowing::kernels::variable).
pub fn variable_slow(
    a: ArrayView1<'_, f64>, ind: ArrayView1<'_, i64>, span: ArrayView1<'_, i64>,
    subtract_mid: bool,
) -> Array1<f64> {
    let mut out = Vec::with_capacity(ind.len());
    for (&center, &s) in ind.iter().zip(span.iter()) {
        out.push(clamped_term_sum(a, center, s, subtract_mid));
    }
    Array1::from(out)
}

/// Reference for [`kernels::variable_periodic`](crate::windowing::kernels::variable_periodic).
pub fn variable_periodic_slow(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, ind: ArrayView1<'_, i64>,
    span: ArrayView1<'_, i64>, subtract_mid: bool, period: f64,
) -> Array1<f64> {
    let mut out = Vec::with_capacity(ind.len());
    for (&center, &s) in ind.iter().zip(span.iter()) {
        out.push(wrapped_term_sum(a, t, tpower, center, s, subtract_mid, period));
    }
    Array1::from(out)
}

/// Reference for [`windowed_sum`](crate::windowing::windowed_sum).
///
/// Errors
/// ------
/// - Identical to `windowed_sum`, reported in the same order: no arrays,
///   span, array lengths, `t` length, `tpowers`, span/center broadcast,
///   period.
#[allow(clippy::needless_range_loop)]
pub fn windowed_sum_slow(
    arrays: &[ArrayView1<'_, f64>], span: &Span, opts: &WindowOptions<'_>,
) -> WindowResult<Vec<Array1<f64>>> {
    if arrays.is_empty() {
        return Err(WindowError::NoArrays);
    }

    let spans: Vec<i64> = match span {
        Span::Fixed(s) => vec![*s],
        Span::Variable(values) => values.iter().copied().collect(),
    };
    for index in 0..spans.len() {
        if spans[index] <= 0 {
            return Err(WindowError::NonPositiveSpan { index, value: spans[index] });
        }
    }

    let n = arrays[0].len();
    for index in 0..arrays.len() {
        if arrays[index].len() != n {
            return Err(WindowError::ArrayLengthMismatch {
                index,
                expected: n,
                found: arrays[index].len(),
            });
        }
    }
    if let Some(t) = &opts.t {
        if t.len() != n {
            return Err(WindowError::TimeLengthMismatch { expected: n, found: t.len() });
        }
    }

    let mut tpowers = Vec::with_capacity(arrays.len());
    for k in 0..arrays.len() {
        let p = match &opts.tpowers {
            TPowers::Shared(p) => *p,
            TPowers::PerArray(ps) if ps.len() == arrays.len() => ps[k],
            TPowers::PerArray(ps) if ps.len() == 1 => ps[0],
            TPowers::PerArray(ps) => {
                return Err(WindowError::TPowersMismatch {
                    arrays: arrays.len(),
                    tpowers: ps.len(),
                });
            }
        };
        tpowers.push(p);
    }

    // Explicit centers: the given indices, or 0..N for a span vector alone.
    let explicit = opts.indices.is_some() || matches!(span, Span::Variable(_));
    let mut centers = Vec::new();
    let mut center_spans = Vec::new();
    if explicit {
        let ind: Vec<i64> = match &opts.indices {
            Some(ind) => ind.iter().copied().collect(),
            None => (0..n as i64).collect(),
        };
        let (n_spans, n_ind) = (spans.len(), ind.len());
        if n_spans != n_ind && n_spans != 1 && n_ind != 1 {
            return Err(WindowError::BroadcastMismatch { left: n_spans, right: n_ind });
        }
        let m = if n_spans == 1 { n_ind } else { n_spans };
        for k in 0..m {
            centers.push(if n_ind == 1 { ind[0] } else { ind[k] });
            center_spans.push(if n_spans == 1 { spans[0] } else { spans[k] });
        }
    }

    let mut t = Vec::with_capacity(n);
    match opts.period {
        Some(period) => {
            let Some(raw) = &opts.t else {
                return Err(WindowError::PeriodWithoutTime);
            };
            if !period.is_finite() || period <= 0.0 {
                return Err(WindowError::InvalidPeriod { period });
            }
            let n_out = if explicit { centers.len() } else { n };
            if n == 0 && n_out > 0 {
                return Err(WindowError::EmptyPeriodicSeries { centers: n_out });
            }
            for i in 0..n {
                t.push(float_mod(raw[i], period));
            }
        }
        None => {
            for i in 0..n {
                t.push(opts.t.as_ref().map_or(1.0, |raw| raw[i]));
            }
        }
    }
    let t = Array1::from(t);
    let centers = Array1::from(centers);
    let center_spans = Array1::from(center_spans);
    let subtract_mid = opts.subtract_mid;

    let mut results = Vec::with_capacity(arrays.len());
    for (a, &tpower) in arrays.iter().zip(&tpowers) {
        let r = match (explicit, opts.period) {
            (false, Some(period)) => {
                fixed_periodic_slow(*a, t.view(), tpower, spans[0], subtract_mid, period)
            }
            (true, Some(period)) => variable_periodic_slow(
                *a,
                t.view(),
                tpower,
                centers.view(),
                center_spans.view(),
                subtract_mid,
                period,
            ),
            (false, None) => {
                let weighted = weight_slow(*a, t.view(), tpower);
                fixed_slow(weighted.view(), spans[0], subtract_mid)
            }
            (true, None) => {
                let weighted = weight_slow(*a, t.view(), tpower);
                variable_slow(weighted.view(), centers.view(), center_spans.view(), subtract_mid)
            }
        };
        results.push(r);
    }
    Ok(results)
}

fn weight_slow(a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32) -> Array1<f64> {
    let mut weighted = Vec::with_capacity(a.len());
    for i in 0..a.len() {
        weighted.push(a[i] * t[i].powi(tpower));
    }
    Array1::from(weighted)
}

fn clamped_term_sum(a: ArrayView1<'_, f64>, center: i64, span: i64, subtract_mid: bool) -> f64 {
    let n = a.len() as i128;
    let center = i128::from(center);
    let start = center - i128::from(span).div_euclid(2);
    let mut sum = 0.0;
    for j in start..start + i128::from(span) {
        if j < 0 || j >= n {
            continue;
        }
        if subtract_mid && j == center {
            continue;
        }
        sum += a[j as usize];
    }
    sum
}

fn wrapped_term_sum(
    a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32, center: i64, span: i64,
    subtract_mid: bool, period: f64,
) -> f64 {
    let n = a.len() as i128;
    let center = i128::from(center);
    let start = center - i128::from(span).div_euclid(2);
    let mut sum = 0.0;
    for j in start..start + i128::from(span) {
        if subtract_mid && j == center {
            continue;
        }
        let w = j.rem_euclid(n) as usize;
        let wraps = j.div_euclid(n);
        sum += a[w] * (t[w] + period * wraps as f64).powi(tpower);
    }
    sum
}
