//! rust_windowsum — windowed sums over 1-D series with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the windowed-sum routines to Python via the `_rust_windowsum` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing functions and the `windowing` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`windowing`) as the public crate surface.
//! - Define `#[pyfunction]` wrappers for `windowed_sum` and its reference
//!   counterpart `windowed_sum_slow`, and the `#[pymodule]` initializer for
//!   the `_rust_windowsum` Python extension.
//! - Register the `windowing` submodule under `rust_windowsum` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `windowing`; this file performs only
//!   FFI glue, argument conversion, and error mapping.
//! - The Python signatures mirror the Rust semantics: `span` and `tpowers`
//!   accept either an integer or a sequence of integers, `t` and `indices`
//!   are optional arrays, `period` is an optional float.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`windowing::WindowError`]
//!   internally and raised as `ValueError` at the PyO3 boundary; malformed
//!   Python objects (non-numeric sequences) raise `TypeError`.
//! - Results are returned to Python as a tuple of float64 `numpy.ndarray`s,
//!   one per input array.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`windowing`] directly and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_windowsum` and wraps its
//!   functions in the user-facing `rust_windowsum` package.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration tests under `tests/`.
//! - The PyO3 layer is exercised by Python-level tests that call
//!   `windowed_sum` and `windowed_sum_slow` with numpy inputs.

pub mod utils;
pub mod windowing;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyTuple},
};

#[cfg(feature = "python-bindings")]
use crate::{
    utils::{extract_arrays, extract_f64_array, extract_i64_array, extract_span, extract_tpowers},
    windowing::{Span, WindowOptions, WindowResult},
};

/// Signature shared by the fast and reference orchestrators.
#[cfg(feature = "python-bindings")]
type Orchestrator = for<'a, 'b> fn(
    &[ndarray::ArrayView1<'a, f64>],
    &Span,
    &WindowOptions<'b>,
) -> WindowResult<Vec<ndarray::Array1<f64>>>;

/// Convert Python arguments, run `orchestrator`, and pack the outputs into a
/// tuple of numpy arrays.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
fn call_windowed_sum<'py>(
    py: Python<'py>, orchestrator: Orchestrator, arrays: &Bound<'py, PyAny>,
    span: &Bound<'py, PyAny>, t: Option<&Bound<'py, PyAny>>, indices: Option<&Bound<'py, PyAny>>,
    tpowers: Option<&Bound<'py, PyAny>>, period: Option<f64>, subtract_mid: bool,
) -> PyResult<Bound<'py, PyTuple>> {
    let arrays_ro: Vec<PyReadonlyArray1<f64>> = extract_arrays(py, arrays)?;
    let t_ro = t.map(|obj| extract_f64_array(py, obj)).transpose()?;
    let ind_ro = indices.map(|obj| extract_i64_array(py, obj, "indices")).transpose()?;
    let span = extract_span(py, span)?;

    let mut opts = WindowOptions::new()
        .with_tpowers(extract_tpowers(tpowers)?)
        .with_subtract_mid(subtract_mid);
    if let Some(t_ro) = &t_ro {
        opts = opts.with_t(t_ro.as_array());
    }
    if let Some(ind_ro) = &ind_ro {
        opts = opts.with_indices(ind_ro.as_array());
    }
    if let Some(period) = period {
        opts = opts.with_period(period);
    }

    let views: Vec<_> = arrays_ro.iter().map(|a| a.as_array()).collect();
    let outputs = orchestrator(&views, &span, &opts)?;
    PyTuple::new(py, outputs.into_iter().map(|r| r.into_pyarray(py)))
}

/// Windowed sums of one or more equal-length arrays.
///
/// Returns a tuple with one float64 array per input array.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "windowed_sum")]
#[pyo3(
    signature = (arrays, span, t = None, indices = None, tpowers = None, period = None, subtract_mid = false),
    text_signature = "(arrays, span, /, t=None, indices=None, tpowers=0, period=None, subtract_mid=False)"
)]
#[allow(clippy::too_many_arguments)]
pub fn py_windowed_sum<'py>(
    py: Python<'py>, arrays: &Bound<'py, PyAny>, span: &Bound<'py, PyAny>,
    t: Option<&Bound<'py, PyAny>>, indices: Option<&Bound<'py, PyAny>>,
    tpowers: Option<&Bound<'py, PyAny>>, period: Option<f64>, subtract_mid: bool,
) -> PyResult<Bound<'py, PyTuple>> {
    call_windowed_sum(
        py,
        windowing::windowed_sum,
        arrays,
        span,
        t,
        indices,
        tpowers,
        period,
        subtract_mid,
    )
}

/// Reference implementation of `windowed_sum`, for cross-checking.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "windowed_sum_slow")]
#[pyo3(
    signature = (arrays, span, t = None, indices = None, tpowers = None, period = None, subtract_mid = false),
    text_signature = "(arrays, span, /, t=None, indices=None, tpowers=0, period=None, subtract_mid=False)"
)]
#[allow(clippy::too_many_arguments)]
pub fn py_windowed_sum_slow<'py>(
    py: Python<'py>, arrays: &Bound<'py, PyAny>, span: &Bound<'py, PyAny>,
    t: Option<&Bound<'py, PyAny>>, indices: Option<&Bound<'py, PyAny>>,
    tpowers: Option<&Bound<'py, PyAny>>, period: Option<f64>, subtract_mid: bool,
) -> PyResult<Bound<'py, PyTuple>> {
    call_windowed_sum(
        py,
        windowing::windowed_sum_slow,
        arrays,
        span,
        t,
        indices,
        tpowers,
        period,
        subtract_mid,
    )
}

/// _rust_windowsum — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_windowsum` Python module and register its `windowing`
/// submodule used by the public `rust_windowsum` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_windowsum<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let windowing_mod = PyModule::new(_py, "windowing")?;
    windowing_submodule(_py, m, &windowing_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_windowsum.windowing", windowing_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn windowing_submodule<'py>(
    _py: Python, rust_windowsum: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_windowed_sum, m)?)?;
    m.add_function(wrap_pyfunction!(py_windowed_sum_slow, m)?)?;
    rust_windowsum.add_submodule(m)?;
    Ok(())
}
