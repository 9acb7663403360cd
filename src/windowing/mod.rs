//! windowing — boxcar window sums over 1-D series.
//!
//! Purpose
//! -------
//! Collect the windowed-sum routines and their shared infrastructure: the
//! sign-correct integer helpers, the four kernels, the validation and
//! broadcasting layer that turns user arguments into a canonical plan, the
//! orchestrator, and an independent reference implementation used for
//! differential testing.
//!
//! Key behaviors
//! -------------
//! - [`windowed_sum`] sums each input array over a window around every
//!   center, optionally weighting by `t^tpower`, wrapping periodically, and
//!   dropping the center's own term.
//! - [`kernels`] exposes the four kernels (`fixed`, `fixed_periodic`,
//!   `variable`, `variable_periodic`) for callers that already hold
//!   canonical inputs.
//! - [`reference`] mirrors the kernels and orchestrator with literal loops;
//!   the two implementations agree exactly.
//! - [`WindowPlan`] is the validated form of a call and can be reused with
//!   [`windowed_sum_with_plan`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All inputs are 1-D; all arrays in one call share one length `N`.
//! - Non-periodic windows are clamped to `[0, N)`; periodic windows always
//!   sum exactly `span` terms. See [`kernels`] for why both are kept.
//! - In periodic mode the caller guarantees that `t % period` is sorted.
//! - Every user-facing failure is a [`WindowError`]; panics indicate misuse
//!   of the raw kernels (mismatched slice lengths), never invalid options.
//!
//! Conventions
//! -----------
//! - Spans and centers are `i64` so that non-positive spans and centers left
//!   of the array are representable; time powers are `i32` exponents.
//! - Division and modulo on positions use [`arithmetic`], never the native
//!   truncating operators.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::array;
//! use rust_windowsum::windowing::prelude::*;
//!
//! let y = array![1.0, 1.0, 1.0, 1.0, 1.0];
//! let centers = array![0_i64, 4];
//! let opts = WindowOptions::new().with_indices(centers.view());
//! let out = windowed_sum(&[y.view()], &Span::from(vec![3, 3]), &opts)?;
//! assert_eq!(out[0], array![2.0, 2.0]);
//! # Ok::<(), WindowError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own branches.
//! - `tests/windowed_sum_parity.rs` compares [`windowed_sum`] against
//!   [`reference::windowed_sum_slow`] on seeded random inputs for every
//!   mode, and `tests/windowed_sum_properties.rs` checks the clamping,
//!   wrapping, and `subtract_mid` properties end to end.

pub mod arithmetic;
pub mod broadcast;
pub mod dispatch;
pub mod errors;
pub mod kernels;
pub mod options;
pub mod plan;
pub mod reference;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::broadcast::{Broadcast, broadcast_pair};
pub use self::dispatch::{windowed_sum, windowed_sum_with_plan};
pub use self::errors::{WindowError, WindowResult};
pub use self::options::{Span, TPowers, WindowMode, WindowOptions};
pub use self::plan::WindowPlan;
pub use self::reference::windowed_sum_slow;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_windowsum::windowing::prelude::*;
//
// to import the main windowing surface in a single line.

pub mod prelude {
    pub use super::dispatch::windowed_sum;
    pub use super::errors::{WindowError, WindowResult};
    pub use super::options::{Span, TPowers, WindowOptions};
}
