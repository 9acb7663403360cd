#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::windowing::options::{Span, TPowers};

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_i64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<PyReadonlyArray1<'py, i64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        return Ok(arr_ro);
    }

    let vec: Vec<i64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{name} must be an integer or a 1-D sequence of integers"
        ))
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract every element of an iterable of arrays as a read-only float64
/// array.
#[cfg(feature = "python-bindings")]
pub fn extract_arrays<'py>(
    py: Python<'py>, arrays: &Bound<'py, PyAny>,
) -> PyResult<Vec<PyReadonlyArray1<'py, f64>>> {
    let mut out = Vec::new();
    for item in arrays.try_iter()? {
        out.push(extract_f64_array(py, &item?)?);
    }
    Ok(out)
}

/// Python `span` argument: an integer or a sequence of integers.
///
/// Integral floats (`3.0`, `np.array([3., 5.])`) are accepted as the
/// integers they represent; any other float raises `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_span<'py>(py: Python<'py>, span: &Bound<'py, PyAny>) -> PyResult<Span> {
    if let Ok(value) = span.extract::<i64>() {
        return Ok(Span::Fixed(value));
    }
    if let Ok(value) = span.extract::<f64>() {
        return integral_i64(value).map(Span::Fixed).ok_or_else(|| non_integral_span(value));
    }
    if let Ok(arr) = extract_i64_array(py, span, "span") {
        return Ok(Span::Variable(arr.as_array().to_owned()));
    }

    let arr = extract_f64_array(py, span).map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "span must be an integer or a 1-D sequence of integers",
        )
    })?;
    let mut values = Vec::with_capacity(arr.as_array().len());
    for &v in arr.as_array().iter() {
        values.push(integral_i64(v).ok_or_else(|| non_integral_span(v))?);
    }
    Ok(Span::Variable(Array1::from(values)))
}

#[cfg(feature = "python-bindings")]
fn non_integral_span(value: f64) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(format!("span values must be integers, got {value}"))
}

/// `x` as an `i64` when it is finite, has no fractional part and lies in
/// the `i64` range.
pub fn integral_i64(x: f64) -> Option<i64> {
    // 2^63 is exact in f64, and -2^63 is i64::MIN.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    (x.is_finite() && x.fract() == 0.0 && (-BOUND..BOUND).contains(&x)).then_some(x as i64)
}

/// Python `tpowers` argument: `None` (→ 0), an integer, or a sequence of
/// integers.
#[cfg(feature = "python-bindings")]
pub fn extract_tpowers(tpowers: Option<&Bound<'_, PyAny>>) -> PyResult<TPowers> {
    let Some(obj) = tpowers else {
        return Ok(TPowers::default());
    };
    if let Ok(value) = obj.extract::<i32>() {
        return Ok(TPowers::Shared(value));
    }
    let powers: Vec<i32> = obj.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "tpowers must be an integer or a sequence of integers",
        )
    })?;
    Ok(TPowers::PerArray(powers))
}
