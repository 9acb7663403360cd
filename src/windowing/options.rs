//! windowing::options — typed configuration for a windowed-sum call.
//!
//! Purpose
//! -------
//! Hold the user-facing knobs of [`windowed_sum`](crate::windowing::windowed_sum)
//! in small value objects so the orchestrator signature stays short and the
//! defaults live in one place.
//!
//! Key behaviors
//! -------------
//! - [`Span`] distinguishes a shared span from one span per center.
//! - [`TPowers`] distinguishes one exponent for every array from one exponent
//!   per array.
//! - [`WindowOptions`] bundles the optional time array, explicit centers,
//!   exponents, period, and the `subtract_mid` flag, with `Default` and
//!   chained `with_*` setters.
//! - [`WindowMode`] names the four kernel paths chosen from
//!   (centers given?) × (periodic?).
//!
//! Conventions
//! -----------
//! - Nothing here validates; range and shape checks live in
//!   [`validation`](crate::windowing::validation) so that every entry point
//!   reports the same errors.

use ndarray::{Array1, ArrayView1};

/// Window width, shared or per center.
///
/// Values are signed so that zero and negative spans coming from callers can
/// be reported as [`WindowError::NonPositiveSpan`](crate::windowing::WindowError)
/// rather than being unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Fixed(i64),
    Variable(Array1<i64>),
}

impl Span {
    /// Number of span entries before broadcasting (1 for `Fixed`).
    pub fn len(&self) -> usize {
        match self {
            Span::Fixed(_) => 1,
            Span::Variable(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span entries as an owned vector, a single element for `Fixed`.
    pub fn to_vec(&self) -> Vec<i64> {
        match self {
            Span::Fixed(s) => vec![*s],
            Span::Variable(values) => values.to_vec(),
        }
    }
}

impl From<i64> for Span {
    fn from(span: i64) -> Self {
        Span::Fixed(span)
    }
}

impl From<Vec<i64>> for Span {
    fn from(spans: Vec<i64>) -> Self {
        Span::Variable(Array1::from(spans))
    }
}

impl From<Array1<i64>> for Span {
    fn from(spans: Array1<i64>) -> Self {
        Span::Variable(spans)
    }
}

/// Integer exponents applied to the time coordinate, one per input array.
#[derive(Debug, Clone, PartialEq)]
pub enum TPowers {
    Shared(i32),
    PerArray(Vec<i32>),
}

impl Default for TPowers {
    fn default() -> Self {
        TPowers::Shared(0)
    }
}

impl From<i32> for TPowers {
    fn from(power: i32) -> Self {
        TPowers::Shared(power)
    }
}

impl From<Vec<i32>> for TPowers {
    fn from(powers: Vec<i32>) -> Self {
        TPowers::PerArray(powers)
    }
}

/// Kernel path for one call.
///
/// - `Fixed`: implicit centers `0..N`, shared span, clamped at the edges.
/// - `FixedPeriodic`: implicit centers, shared span, indices wrap modulo `N`.
/// - `Variable`: explicit centers with per-center spans, clamped.
/// - `VariablePeriodic`: explicit centers with per-center spans, wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Fixed,
    FixedPeriodic,
    Variable,
    VariablePeriodic,
}

impl WindowMode {
    pub fn select(explicit_centers: bool, periodic: bool) -> Self {
        match (explicit_centers, periodic) {
            (false, false) => WindowMode::Fixed,
            (false, true) => WindowMode::FixedPeriodic,
            (true, false) => WindowMode::Variable,
            (true, true) => WindowMode::VariablePeriodic,
        }
    }

    pub fn is_periodic(self) -> bool {
        matches!(self, WindowMode::FixedPeriodic | WindowMode::VariablePeriodic)
    }

    pub fn has_explicit_centers(self) -> bool {
        matches!(self, WindowMode::Variable | WindowMode::VariablePeriodic)
    }
}

/// Optional arguments of a windowed-sum call.
///
/// Fields
/// ------
/// - `t`: time coordinate, one value per array position. Treated as all ones
///   when absent; required when `period` is set.
/// - `indices`: explicit centers. Selects the per-center kernels even for a
///   scalar span.
/// - `tpowers`: exponent(s) applied to `t`, default `Shared(0)`.
/// - `period`: enables wraparound and folds `t` into `[0, period)`.
/// - `subtract_mid`: drop each center's own contribution from its sum.
#[derive(Debug, Clone, Default)]
pub struct WindowOptions<'a> {
    pub t: Option<ArrayView1<'a, f64>>,
    pub indices: Option<ArrayView1<'a, i64>>,
    pub tpowers: TPowers,
    pub period: Option<f64>,
    pub subtract_mid: bool,
}

impl<'a> WindowOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_t(mut self, t: ArrayView1<'a, f64>) -> Self {
        self.t = Some(t);
        self
    }

    pub fn with_indices(mut self, indices: ArrayView1<'a, i64>) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn with_tpowers(mut self, tpowers: impl Into<TPowers>) -> Self {
        self.tpowers = tpowers.into();
        self
    }

    pub fn with_period(mut self, period: f64) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_subtract_mid(mut self, subtract_mid: bool) -> Self {
        self.subtract_mid = subtract_mid;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // `WindowMode::select` covers the four (centers, periodic) combinations
    // and the predicates agree with the selection.
    //
    // Expect
    // ------
    // - Each pair maps to its own mode and round-trips through the
    //   predicates.
    fn window_mode_select_covers_all_combinations() {
        for centers in [false, true] {
            for periodic in [false, true] {
                let mode = WindowMode::select(centers, periodic);
                assert_eq!(mode.has_explicit_centers(), centers);
                assert_eq!(mode.is_periodic(), periodic);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Defaults match the documented call signature and setters chain.
    //
    // Expect
    // ------
    // - Default: no t, no indices, tpowers 0, no period, subtract_mid off.
    // - Setters populate the corresponding fields.
    fn window_options_defaults_and_setters() {
        // Arrange
        let t = array![1.0, 2.0];
        let ind = array![0_i64];

        // Act
        let default = WindowOptions::new();
        let set = WindowOptions::new()
            .with_t(t.view())
            .with_indices(ind.view())
            .with_tpowers(vec![1, 2])
            .with_period(3.0)
            .with_subtract_mid(true);

        // Assert
        assert!(default.t.is_none() && default.indices.is_none() && default.period.is_none());
        assert_eq!(default.tpowers, TPowers::Shared(0));
        assert!(!default.subtract_mid);
        assert_eq!(set.t.map(|v| v.len()), Some(2));
        assert_eq!(set.indices.map(|v| v.len()), Some(1));
        assert_eq!(set.tpowers, TPowers::PerArray(vec![1, 2]));
        assert_eq!(set.period, Some(3.0));
        assert!(set.subtract_mid);
    }

    #[test]
    // Purpose
    // -------
    // `Span` conversions keep the entry count.
    //
    // Expect
    // ------
    // - Scalar → len 1; vector → its length.
    fn span_conversions_report_length() {
        assert_eq!(Span::from(3).len(), 1);
        assert_eq!(Span::from(vec![1, 2, 3]).len(), 3);
        assert_eq!(Span::from(vec![4, 5]).to_vec(), vec![4, 5]);
        assert!(Span::from(Vec::<i64>::new()).is_empty());
    }
}
