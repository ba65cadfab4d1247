//! Numerical kernels shared by the evaluator, geometry, and likelihood.
//!
//! Provides the three scalar primitives the flex-knot stack is built on:
//!
//! - [`interp`]: one-dimensional linear interpolation over ascending nodes,
//!   clamped to the end values outside the node range.
//! - [`trapezoid`]: trapezoid-rule integral over a sampled grid.
//! - [`log_sum_exp_weighted`]: `ln Σ b_i exp(a_i)` with a max shift, where
//!   zero-weight terms are ignored entirely.
//!
//! All functions are pure and allocation-free.

/// Linear interpolation of `(xp, fp)` at `x`.
///
/// # Parameters
/// - `x`: evaluation point.
/// - `xp`: node abscissas, ascending, at least one entry.
/// - `fp`: node values, same length as `xp`.
///
/// # Returns
/// - `fp[0]` for `x <= xp[0]` and `fp[last]` for `x >= xp[last]`.
/// - The value on the segment `xp[j] <= x < xp[j+1]` otherwise, computed as
///   `slope * (x - xp[j]) + fp[j]`, so a node hit exactly returns its value.
/// - NaN for NaN `x`.
///
/// Zero-width segments never contain `x` in the half-open search; if a
/// non-finite slope still produces NaN the right-hand form
/// `slope * (x - xp[j+1]) + fp[j+1]` is tried, then `fp[j]` for a flat pair.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let last = xp.len() - 1;
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= xp[last] {
        return fp[last];
    }
    if x <= xp[0] || last == 0 {
        return fp[0];
    }
    let j = xp.partition_point(|&v| v <= x).saturating_sub(1).min(last - 1);
    let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
    let mut value = slope * (x - xp[j]) + fp[j];
    if value.is_nan() {
        value = slope * (x - xp[j + 1]) + fp[j + 1];
        if value.is_nan() && fp[j] == fp[j + 1] {
            value = fp[j];
        }
    }
    value
}

/// Trapezoid-rule integral `Σ (x[i+1] - x[i]) (y[i+1] + y[i]) / 2`.
///
/// Returns `0.0` for fewer than two samples.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.windows(2).zip(y.windows(2)).map(|(dx, dy)| (dx[1] - dx[0]) * (dy[1] + dy[0]) / 2.0).sum()
}

/// Weighted log-sum-exp `ln Σ_i b_i exp(a_i)`.
///
/// # Parameters
/// - `a`: exponents.
/// - `b`: weights, same length as `a`. Terms with `b_i == 0` are dropped
///   before the max shift, so an infinite or NaN exponent paired with a zero
///   weight does not poison the result.
///
/// # Returns
/// - `-∞` when the weighted sum is exactly zero (including no terms).
/// - NaN when the weighted sum is negative.
/// - `ln(s) + a_max` otherwise, with `a_max` the largest retained exponent
///   (or `0` if that is not finite).
pub fn log_sum_exp_weighted(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let retained = || a.iter().zip(b).filter(|&(_, &w)| w != 0.0);
    let a_max = retained().map(|(&ai, _)| ai).fold(f64::NEG_INFINITY, f64::max);
    let shift = if a_max.is_finite() { a_max } else { 0.0 };
    let sum: f64 = retained().map(|(&ai, &w)| w * (ai - shift).exp()).sum();
    if sum < 0.0 {
        return f64::NAN;
    }
    sum.ln() + shift
}
