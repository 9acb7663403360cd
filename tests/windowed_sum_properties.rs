//! End-to-end properties of `windowed_sum`.
//!
//! Purpose
//! -------
//! - Check the observable laws of the public entry point on inputs where
//!   the answer is known in closed form: window counts over constant
//!   series, exact `span` terms in periodic mode, the `subtract_mid`
//!   difference, and equivalence between a periodic window and a clamped
//!   window over an explicitly tiled series.
//! - Check that each invalid call surfaces the matching `WindowError`.
//!
//! Coverage
//! --------
//! - `windowing::windowed_sum` in all four modes.
//! - `windowing::WindowPlan` reuse via `windowed_sum_with_plan`.
//!
//! Exclusions
//! ----------
//! - Fast-vs-reference agreement; see `windowed_sum_parity.rs`.
use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_windowsum::windowing::{
    Span, TPowers, WindowError, WindowOptions, WindowPlan, windowed_sum, windowed_sum_with_plan,
};

/// Number of in-range positions of a clamped window, minus the center when
/// it is dropped and lies inside the array.
fn clamped_count(n: i64, center: i64, span: i64, subtract_mid: bool) -> f64 {
    let start = center - span.div_euclid(2);
    let lo = start.max(0);
    let hi = (start + span).min(n);
    let mut count = (hi - lo).max(0);
    if subtract_mid && (lo..hi).contains(&center) {
        count -= 1;
    }
    count as f64
}

/// Sorted random times in `[0, upper)`.
fn sorted_times(rng: &mut StdRng, n: usize, upper: f64) -> Array1<f64> {
    let mut t: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..upper)).collect();
    t.sort_by(f64::total_cmp);
    Array1::from(t)
}

#[test]
// Purpose
// -------
// Over a series of ones, each output counts the in-range window positions.
//
// Given
// -----
// - N in 1..=12, shared spans 1..=2N+2, both `subtract_mid` settings.
// - Explicit centers from -N-2 to 2N+1 with one span per center.
//
// Expect
// ------
// - Every output equals `clamped_count`.
fn ones_count_window_positions() {
    for n in 1..=12_i64 {
        let ones = Array1::<f64>::ones(n as usize);
        for subtract_mid in [false, true] {
            let opts = WindowOptions::new().with_subtract_mid(subtract_mid);
            for span in 1..=2 * n + 2 {
                let out = windowed_sum(&[ones.view()], &Span::Fixed(span), &opts)
                    .expect("valid fixed call");
                let expected: Array1<f64> =
                    (0..n).map(|i| clamped_count(n, i, span, subtract_mid)).collect();
                assert_eq!(out[0], expected, "n={n}, span={span}, subtract_mid={subtract_mid}");
            }

            let centers: Array1<i64> = (-n - 2..2 * n + 2).collect();
            let spans: Vec<i64> = (0..centers.len() as i64).map(|k| 1 + k % (n + 3)).collect();
            let opts = opts.clone().with_indices(centers.view());
            let out = windowed_sum(&[ones.view()], &Span::from(spans.clone()), &opts)
                .expect("valid variable call");
            let expected: Array1<f64> = centers
                .iter()
                .zip(&spans)
                .map(|(&c, &s)| clamped_count(n, c, s, subtract_mid))
                .collect();
            assert_eq!(out[0], expected, "n={n}, subtract_mid={subtract_mid}");
        }
    }
}

#[test]
// Purpose
// -------
// Periodic windows never clamp: over ones they sum exactly `span` terms.
//
// Given
// -----
// - N in 1..=9, spans N, 2N+1 and 1, with and without explicit centers.
//
// Expect
// ------
// - Each output equals `span`, or `span - 1` with `subtract_mid`.
fn periodic_windows_sum_exactly_span_terms() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=9_usize {
        let ones = Array1::<f64>::ones(n);
        let t = sorted_times(&mut rng, n, 1.5);
        let centers: Array1<i64> = (-(n as i64)..2 * n as i64).collect();
        for span in [n as i64, 2 * n as i64 + 1, 1] {
            for subtract_mid in [false, true] {
                let expected = span as f64 - f64::from(u8::from(subtract_mid));
                let opts = WindowOptions::new()
                    .with_t(t.view())
                    .with_period(1.5)
                    .with_subtract_mid(subtract_mid);

                let out = windowed_sum(&[ones.view()], &Span::Fixed(span), &opts)
                    .expect("valid fixed periodic call");
                assert_eq!(out[0], Array1::from_elem(n, expected), "n={n}, span={span}");

                let opts = opts.with_indices(centers.view());
                let out = windowed_sum(&[ones.view()], &Span::Fixed(span), &opts)
                    .expect("valid variable periodic call");
                assert_eq!(out[0], Array1::from_elem(centers.len(), expected), "n={n}, span={span}");
            }
        }
    }
}

#[test]
// Purpose
// -------
// Dropping the center removes exactly the center's term.
//
// Given
// -----
// - Integer-valued arrays (so sums are exact) in the non-periodic modes.
// - Real-valued arrays with `tpower = 1` in periodic mode.
//
// Expect
// ------
// - Non-periodic: `full - dropped == a[i]` exactly.
// - Periodic: `full - dropped ≈ a[i] * (t[i] mod P)`.
fn subtract_mid_removes_the_center_term() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let n: usize = rng.random_range(1..=15);
        let a = Array1::from_shape_fn(n, |_| f64::from(rng.random_range(-20_i32..=20)));
        let span: i64 = rng.random_range(1..=n as i64 + 3);

        let full = windowed_sum(&[a.view()], &Span::Fixed(span), &WindowOptions::new())
            .expect("valid call");
        let dropped = windowed_sum(
            &[a.view()],
            &Span::Fixed(span),
            &WindowOptions::new().with_subtract_mid(true),
        )
        .expect("valid call");
        assert_eq!(&full[0] - &dropped[0], a);

        let x = Array1::from_shape_fn(n, |_| rng.random_range(-2.0..2.0));
        let period = 3.0;
        let t = sorted_times(&mut rng, n, period);
        let opts = WindowOptions::new().with_t(t.view()).with_tpowers(1).with_period(period);
        let full = windowed_sum(&[x.view()], &Span::Fixed(span), &opts).expect("valid call");
        let dropped =
            windowed_sum(&[x.view()], &Span::Fixed(span), &opts.clone().with_subtract_mid(true))
                .expect("valid call");
        for i in 0..n {
            assert_abs_diff_eq!(full[0][i] - dropped[0][i], x[i] * t[i], epsilon = 1e-9);
        }
    }
}

#[test]
// Purpose
// -------
// A periodic window equals a clamped window over three explicit copies of
// the series, with times shifted by one period per copy.
//
// Given
// -----
// - a, t with t sorted in [0, P); spans 1..=N; tpower in 0..=2.
// - Tiled arrays `[a, a, a]` and `[t - P, t, t + P]`, centers `i + N`.
//
// Expect
// ------
// - Exact equality, with and without `subtract_mid`.
fn periodic_matches_tiled_clamped_sum() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..60 {
        let n: usize = rng.random_range(1..=12);
        let period: f64 = rng.random_range(0.5..4.0);
        let a = Array1::from_shape_fn(n, |_| rng.random_range(-3.0..3.0));
        let t = sorted_times(&mut rng, n, period);
        let tpower: i32 = rng.random_range(0..=2);
        let span: i64 = rng.random_range(1..=n as i64);
        let subtract_mid = rng.random_bool(0.5);

        let tiled_a: Array1<f64> = (0..3 * n).map(|j| a[j % n]).collect();
        let tiled_t: Array1<f64> =
            (0..3 * n).map(|j| t[j % n] + period * ((j / n) as f64 - 1.0)).collect();
        let centers: Array1<i64> = (0..n as i64).map(|i| i + n as i64).collect();

        let periodic = windowed_sum(
            &[a.view()],
            &Span::Fixed(span),
            &WindowOptions::new()
                .with_t(t.view())
                .with_tpowers(tpower)
                .with_period(period)
                .with_subtract_mid(subtract_mid),
        )
        .expect("valid periodic call");
        let tiled = windowed_sum(
            &[tiled_a.view()],
            &Span::Fixed(span),
            &WindowOptions::new()
                .with_t(tiled_t.view())
                .with_indices(centers.view())
                .with_tpowers(tpower)
                .with_subtract_mid(subtract_mid),
        )
        .expect("valid tiled call");

        assert_eq!(periodic[0], tiled[0], "n={n}, span={span}, tpower={tpower}");
    }
}

#[test]
// Purpose
// -------
// Pin the documented scenarios end to end.
//
// Expect
// ------
// - Centers [0, 4] with spans [3, 3] over five ones give [2, 2].
// - tpowers [0, 1] with t = [1, 2, 3, 4] over `[1, 2, 3, 4]` twice give
//   [3, 6, 9, 7] and [5, 14, 29, 25].
// - A single center stretched across a span vector gives one output per
//   span.
fn documented_scenarios() {
    let ones = Array1::<f64>::ones(5);
    let centers = array![0_i64, 4];
    let out = windowed_sum(
        &[ones.view()],
        &Span::from(vec![3, 3]),
        &WindowOptions::new().with_indices(centers.view()),
    )
    .expect("valid call");
    assert_eq!(out, vec![array![2.0, 2.0]]);

    let y = array![1.0, 2.0, 3.0, 4.0];
    let t = array![1.0, 2.0, 3.0, 4.0];
    let out = windowed_sum(
        &[y.view(), y.view()],
        &Span::Fixed(3),
        &WindowOptions::new().with_t(t.view()).with_tpowers(vec![0, 1]),
    )
    .expect("valid call");
    assert_eq!(out[0], array![3.0, 6.0, 9.0, 7.0]);
    assert_eq!(out[1], array![5.0, 14.0, 29.0, 25.0]);

    let center = array![2_i64];
    let out = windowed_sum(
        &[y.view()],
        &Span::from(vec![1, 2, 3, 5]),
        &WindowOptions::new().with_indices(center.view()),
    )
    .expect("valid call");
    assert_eq!(out[0], array![3.0, 5.0, 9.0, 10.0]);
}

#[test]
// Purpose
// -------
// A plan built once can be applied to several batches of arrays.
//
// Expect
// ------
// - Same outputs as calling `windowed_sum` directly.
// - A batch with the wrong count or length is rejected.
fn plan_is_reusable_across_batches() {
    let y1 = array![1.0, 2.0, 3.0, 4.0];
    let y2 = array![4.0, 3.0, 2.0, 1.0];
    let t = array![0.1, 0.4, 0.6, 0.9];
    let opts = WindowOptions::new().with_t(t.view()).with_tpowers(1).with_period(1.0);
    let plan = WindowPlan::new(&[y1.view()], &Span::Fixed(3), &opts).expect("valid plan");

    for y in [&y1, &y2] {
        let direct = windowed_sum(&[y.view()], &Span::Fixed(3), &opts).expect("valid call");
        let reused = windowed_sum_with_plan(&[y.view()], &plan).expect("valid batch");
        assert_eq!(direct, reused);
    }

    let short = array![1.0, 2.0];
    assert!(windowed_sum_with_plan(&[short.view()], &plan).is_err());
    assert!(windowed_sum_with_plan(&[y1.view(), y2.view()], &plan).is_err());
}

#[test]
// Purpose
// -------
// Each invalid argument surfaces its own error.
fn invalid_calls_report_the_matching_error() {
    let a = Array1::<f64>::ones(4);
    let b = Array1::<f64>::ones(3);
    let t3 = array![0.0, 1.0, 2.0];
    let t4 = array![0.0, 1.0, 2.0, 3.0];
    let ind3 = array![0_i64, 1, 2];
    let plain = WindowOptions::new();

    assert_eq!(windowed_sum(&[], &Span::Fixed(3), &plain), Err(WindowError::NoArrays));
    assert_eq!(
        windowed_sum(&[a.view()], &Span::Fixed(0), &plain),
        Err(WindowError::NonPositiveSpan { index: 0, value: 0 })
    );
    assert_eq!(
        windowed_sum(&[a.view()], &Span::from(vec![2, 3, -1, 4]), &plain),
        Err(WindowError::NonPositiveSpan { index: 2, value: -1 })
    );
    assert_eq!(
        windowed_sum(&[a.view(), b.view()], &Span::Fixed(3), &plain),
        Err(WindowError::ArrayLengthMismatch { index: 1, expected: 4, found: 3 })
    );
    assert_eq!(
        windowed_sum(&[a.view()], &Span::Fixed(3), &WindowOptions::new().with_t(t3.view())),
        Err(WindowError::TimeLengthMismatch { expected: 4, found: 3 })
    );
    assert_eq!(
        windowed_sum(
            &[a.view()],
            &Span::Fixed(3),
            &WindowOptions::new().with_tpowers(TPowers::PerArray(vec![0, 1]))
        ),
        Err(WindowError::TPowersMismatch { arrays: 1, tpowers: 2 })
    );
    assert_eq!(
        windowed_sum(
            &[a.view()],
            &Span::from(vec![3, 3]),
            &WindowOptions::new().with_indices(ind3.view())
        ),
        Err(WindowError::BroadcastMismatch { left: 2, right: 3 })
    );
    assert_eq!(
        windowed_sum(&[a.view()], &Span::Fixed(3), &WindowOptions::new().with_period(1.0)),
        Err(WindowError::PeriodWithoutTime)
    );
    assert_eq!(
        windowed_sum(
            &[a.view()],
            &Span::Fixed(3),
            &WindowOptions::new().with_t(t4.view()).with_period(-2.0)
        ),
        Err(WindowError::InvalidPeriod { period: -2.0 })
    );

    let empty = Array1::<f64>::zeros(0);
    let t0 = Array1::<f64>::zeros(0);
    let ind1 = array![0_i64];
    assert_eq!(
        windowed_sum(
            &[empty.view()],
            &Span::Fixed(1),
            &WindowOptions::new().with_t(t0.view()).with_indices(ind1.view()).with_period(1.0)
        ),
        Err(WindowError::EmptyPeriodicSeries { centers: 1 })
    );
}
