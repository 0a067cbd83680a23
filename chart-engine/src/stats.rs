//! Numeric helpers with JavaScript `Math` semantics
//!
//! Empty input yields the identity of the fold (`-inf` for max, `+inf` for
//! min) and any `NaN` poisons the result, so callers see the same values a
//! browser would compute.

/// `Math.max(...values)`
pub fn js_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        if v > max {
            max = v;
        }
    }
    max
}

/// `Math.min(...values)`
pub fn js_min(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut min = f64::INFINITY;
    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        if v < min {
            min = v;
        }
    }
    min
}

/// Values with gaps (`NaN`) dropped
///
/// Derived bounds are computed over these, so a blank cell does not wipe out
/// a whole scale.
pub fn present(values: impl IntoIterator<Item = f64>) -> impl Iterator<Item = f64> {
    values.into_iter().filter(|v| !v.is_nan())
}

/// `[min, Q1, median, Q3, max]` using nearest-rank positions
///
/// Quartiles index the numerically sorted values at `floor(n * p)` with no
/// interpolation. Gaps are skipped; a slice with no values yields five `NaN`s.
pub fn five_number_summary(values: &[f64]) -> [f64; 5] {
    let mut sorted: Vec<f64> = present(values.iter().copied()).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let at = |index: usize| sorted.get(index).copied().unwrap_or(f64::NAN);
    let rank = |p: f64| at((n as f64 * p).floor() as usize);

    [
        at(0),
        rank(0.25),
        rank(0.5),
        rank(0.75),
        n.checked_sub(1).map_or(f64::NAN, at),
    ]
}
