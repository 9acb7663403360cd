//! windowing::plan — the validated, canonical form of a windowed-sum call.
//!
//! Purpose
//! -------
//! Turn heterogeneous user arguments (scalar or per-center span, optional
//! centers, optional time, scalar or per-array powers, optional period) into
//! one [`WindowPlan`] that the fast kernels consume. All validation happens
//! while building the plan; a plan that exists is always runnable.
//!
//! Key behaviors
//! -------------
//! - Select the [`WindowMode`] from (explicit centers?) × (periodic?).
//! - Broadcast the span against the centers (NumPy rules, see
//!   [`broadcast_pair`]).
//! - Materialize the time coordinate: all ones when absent, folded into
//!   `[0, period)` when periodic.
//! - Resolve one time exponent per input array.
//!
//! Conventions
//! -----------
//! - A per-center span without explicit centers uses the implicit centers
//!   `0..N`, so it must broadcast against `N`. Such calls run on the
//!   per-center kernels.
//! - A plan only describes the arrays' *shape*; it does not borrow them, so
//!   it can be reused for any set of arrays with the same count and length.

use ndarray::{Array1, ArrayView1};

use crate::windowing::{
    arithmetic::float_mod,
    broadcast::broadcast_pair,
    errors::{WindowError, WindowResult},
    options::{Span, WindowMode, WindowOptions},
    validation::{resolve_tpowers, validate_arrays, validate_period, validate_span, validate_time},
};

/// WindowPlan — validated inputs for the kernels.
///
/// Fields
/// ------
/// - `mode`: kernel path for every array in the call.
/// - `len`: common array length `N`.
/// - `n_arrays`: number of input arrays the plan was built for.
/// - `t`: time coordinate of length `N` (ones if not supplied; folded if
///   periodic).
/// - `centers` / `spans`: for `Fixed*` modes `centers` is empty and `spans`
///   holds the single shared span; for `Variable*` modes both have the
///   broadcast length `M`.
/// - `tpowers`: one exponent per input array.
/// - `period`: `Some` exactly for periodic modes.
/// - `subtract_mid`: exclude the center's own term.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
    mode: WindowMode,
    len: usize,
    n_arrays: usize,
    t: Array1<f64>,
    centers: Array1<i64>,
    spans: Array1<i64>,
    tpowers: Vec<i32>,
    period: Option<f64>,
    subtract_mid: bool,
}

impl WindowPlan {
    /// Validate the arguments of a windowed-sum call and build its plan.
    ///
    /// Errors
    /// ------
    /// Checks run in this order; the first failure is returned:
    /// - `WindowError::NoArrays`
    /// - `WindowError::NonPositiveSpan`
    /// - `WindowError::ArrayLengthMismatch`
    /// - `WindowError::TimeLengthMismatch`
    /// - `WindowError::TPowersMismatch`
    /// - `WindowError::BroadcastMismatch`
    /// - `WindowError::PeriodWithoutTime`, `WindowError::InvalidPeriod`,
    ///   `WindowError::EmptyPeriodicSeries`
    pub fn new(
        arrays: &[ArrayView1<'_, f64>], span: &Span, opts: &WindowOptions<'_>,
    ) -> WindowResult<Self> {
        if arrays.is_empty() {
            return Err(WindowError::NoArrays);
        }
        validate_span(span)?;
        let len = validate_arrays(arrays)?;
        validate_time(opts.t.as_ref(), len)?;
        let tpowers = resolve_tpowers(&opts.tpowers, arrays.len())?;

        let explicit_centers = opts.indices.is_some() || matches!(span, Span::Variable(_));
        let mode = WindowMode::select(explicit_centers, opts.period.is_some());

        let (centers, spans) = if explicit_centers {
            let centers: Vec<i64> = match &opts.indices {
                Some(ind) => ind.to_vec(),
                None => (0..len as i64).collect(),
            };
            let spans = span.to_vec();
            let b = broadcast_pair(spans.len(), centers.len())?;
            (Array1::from(b.expand_right(&centers)), Array1::from(b.expand_left(&spans)))
        } else {
            (Array1::zeros(0), Array1::from(span.to_vec()))
        };

        let output_len = if explicit_centers { centers.len() } else { len };
        let t = match (opts.period, opts.t) {
            (Some(period), t) => {
                validate_period(period, t.is_some(), len, output_len)?;
                t.map(|t| t.mapv(|v| float_mod(v, period))).ok_or(WindowError::PeriodWithoutTime)?
            }
            (None, Some(t)) => t.to_owned(),
            (None, None) => Array1::ones(len),
        };

        Ok(WindowPlan {
            mode,
            len,
            n_arrays: arrays.len(),
            t,
            centers,
            spans,
            tpowers,
            period: opts.period,
            subtract_mid: opts.subtract_mid,
        })
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Common input length `N`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn n_arrays(&self) -> usize {
        self.n_arrays
    }

    /// Number of values in each output array.
    pub fn output_len(&self) -> usize {
        if self.mode.has_explicit_centers() { self.centers.len() } else { self.len }
    }

    /// Time coordinate after defaulting and folding.
    pub fn t(&self) -> ArrayView1<'_, f64> {
        self.t.view()
    }

    /// Broadcast centers; empty for the implicit-center modes.
    pub fn centers(&self) -> ArrayView1<'_, i64> {
        self.centers.view()
    }

    /// Broadcast spans; a single entry for the implicit-center modes.
    pub fn spans(&self) -> ArrayView1<'_, i64> {
        self.spans.view()
    }

    /// Shared span of the implicit-center modes (first span entry).
    pub fn shared_span(&self) -> i64 {
        self.spans.first().copied().unwrap_or(0)
    }

    pub fn tpowers(&self) -> &[i32] {
        &self.tpowers
    }

    pub fn period(&self) -> Option<f64> {
        self.period
    }

    pub fn subtract_mid(&self) -> bool {
        self.subtract_mid
    }

    /// Check that `arrays` matches the count and length this plan was built
    /// for.
    ///
    /// Errors
    /// ------
    /// - `WindowError::TPowersMismatch` when the array count differs (the
    ///   plan holds one exponent per array).
    /// - `WindowError::ArrayLengthMismatch` for the first array whose length
    ///   is not `N`.
    pub fn check_arrays(&self, arrays: &[ArrayView1<'_, f64>]) -> WindowResult<()> {
        if arrays.len() != self.n_arrays {
            return Err(WindowError::TPowersMismatch {
                arrays: arrays.len(),
                tpowers: self.tpowers.len(),
            });
        }
        match arrays.iter().position(|a| a.len() != self.len) {
            Some(index) => Err(WindowError::ArrayLengthMismatch {
                index,
                expected: self.len,
                found: arrays[index].len(),
            }),
            None => Ok(()),
        }
    }
}
