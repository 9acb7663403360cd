//! windowing::dispatch — the `windowed_sum` orchestrator.
//!
//! Purpose
//! -------
//! Validate a windowed-sum call, weight each input array by its time power,
//! and route it to exactly one of the four kernels in
//! [`kernels`](crate::windowing::kernels).
//!
//! Key behaviors
//! -------------
//! - [`windowed_sum`] builds a [`WindowPlan`] (all validation happens there)
//!   and runs it.
//! - [`windowed_sum_with_plan`] runs an existing plan against arrays of the
//!   same count and length, so repeated calls with identical options skip
//!   broadcasting and time folding.
//! - Non-periodic modes pre-multiply each array by `t^tpower`; periodic modes
//!   hand the raw array to the kernel, which weights every term with the
//!   period-corrected time of its logical position.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are never mutated; each call allocates one output array per
//!   input array (plus one weighted copy per array in non-periodic modes).
//! - Output `k` corresponds to input `k` and has length
//!   [`WindowPlan::output_len`].
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::array;
//! use rust_windowsum::windowing::{Span, WindowOptions, windowed_sum};
//!
//! let y = array![1.0, 2.0, 3.0, 4.0];
//! let t = array![0.0, 1.0, 2.0, 3.0];
//! let opts = WindowOptions::new().with_t(t.view()).with_tpowers(vec![0, 1]);
//! let out = windowed_sum(&[y.view(), y.view()], &Span::Fixed(3), &opts)?;
//! assert_eq!(out[0], array![3.0, 6.0, 9.0, 7.0]);
//! assert_eq!(out[1], array![2.0, 8.0, 20.0, 18.0]);
//! # Ok::<(), rust_windowsum::windowing::WindowError>(())
//! ```

use ndarray::{Array1, ArrayView1, Zip};
use tracing::{debug, trace};

use crate::windowing::{
    errors::WindowResult,
    kernels,
    options::{Span, WindowMode, WindowOptions},
    plan::WindowPlan,
};

/// Windowed sums of one or more equal-length arrays.
///
/// Parameters
/// ----------
/// - `arrays`: one or more arrays of common length `N`.
/// - `span`: shared span or one span per center; every entry must be `> 0`.
/// - `opts`: optional time array, explicit centers, time powers, period,
///   and `subtract_mid` (see [`WindowOptions`]).
///
/// Returns
/// -------
/// One output array per input array, each of length `N` (implicit centers)
/// or of the broadcast length of span and centers.
///
/// Errors
/// ------
/// - Any [`WindowError`](crate::windowing::WindowError) raised while building
///   the [`WindowPlan`]; no kernel runs on failure.
pub fn windowed_sum(
    arrays: &[ArrayView1<'_, f64>], span: &Span, opts: &WindowOptions<'_>,
) -> WindowResult<Vec<Array1<f64>>> {
    let plan = WindowPlan::new(arrays, span, opts)?;
    debug!(
        mode = ?plan.mode(),
        arrays = plan.n_arrays(),
        len = plan.len(),
        output_len = plan.output_len(),
        subtract_mid = plan.subtract_mid(),
        "windowed_sum"
    );
    windowed_sum_with_plan(arrays, &plan)
}

/// Run a previously built plan.
///
/// Errors
/// ------
/// - `WindowError::TPowersMismatch` / `WindowError::ArrayLengthMismatch`
///   when `arrays` does not have the count and length the plan was built for.
pub fn windowed_sum_with_plan(
    arrays: &[ArrayView1<'_, f64>], plan: &WindowPlan,
) -> WindowResult<Vec<Array1<f64>>> {
    plan.check_arrays(arrays)?;
    Ok(arrays
        .iter()
        .zip(plan.tpowers())
        .enumerate()
        .map(|(k, (a, &tpower))| {
            trace!(array = k, tpower, mode = ?plan.mode(), "dispatching kernel");
            run_kernel(plan, *a, tpower)
        })
        .collect())
}

fn run_kernel(plan: &WindowPlan, a: ArrayView1<'_, f64>, tpower: i32) -> Array1<f64> {
    // Present for both periodic modes by construction of the plan.
    let period = plan.period().unwrap_or_default();
    let subtract_mid = plan.subtract_mid();
    match plan.mode() {
        WindowMode::Fixed => {
            let weighted = weight_by_time(a, plan.t(), tpower);
            kernels::fixed(weighted.view(), plan.shared_span(), subtract_mid)
        }
        WindowMode::FixedPeriodic => {
            kernels::fixed_periodic(a, plan.t(), tpower, plan.shared_span(), subtract_mid, period)
        }
        WindowMode::Variable => {
            let weighted = weight_by_time(a, plan.t(), tpower);
            kernels::variable(weighted.view(), plan.centers(), plan.spans(), subtract_mid)
        }
        WindowMode::VariablePeriodic => kernels::variable_periodic(
            a,
            plan.t(),
            tpower,
            plan.centers(),
            plan.spans(),
            subtract_mid,
            period,
        ),
    }
}

/// `a[i] * t[i]^tpower`, elementwise.
fn weight_by_time(a: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, tpower: i32) -> Array1<f64> {
    Zip::from(a).and(t).map_collect(|&x, &tv| x * tv.powi(tpower))
}
