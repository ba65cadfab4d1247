//! Flex-knot validation helpers: reusable checks for domains, data, sigmas,
//! prior bounds, and hypercubes.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used by constructors across the
//! crate ([`Domain`](crate::knots::core::domain::Domain), the likelihood
//! engine, the priors) so each boundary fails fast with a structured
//! [`KnotError`]. Theta structure checks live next to the codec in
//! [`theta`](crate::knots::core::theta).
//!
//! Key behaviors
//! -------------
//! - Validate domain endpoints (`x_min < x_max`, both finite).
//! - Validate observed data (non-empty, equal lengths, finite values).
//! - Validate error-model sigmas (finite, strictly positive, right length).
//! - Validate prior bounds, node-count ranges, and hypercube vectors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every helper reports the *first* offending index/value it encounters.
//! - Checks are O(n) single passes; nothing allocates.
//!
//! Conventions
//! -----------
//! - Indices are 0-based.
//! - Helpers return [`KnotResult`] and never panic on invalid inputs.
//! - This module contains no I/O and no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on valid inputs and on boundary cases
//!   (NaN, ±∞, zeros, off-by-one lengths, values just outside `[0, 1]`).
use crate::knots::errors::{KnotError, KnotResult};
use ndarray::ArrayView1;

/// Validate the endpoints of a flex-knot domain.
///
/// Parameters
/// ----------
/// - `x_min`: `f64`
///   Left endpoint; must be finite.
/// - `x_max`: `f64`
///   Right endpoint; must be finite and strictly greater than `x_min`.
///
/// Returns
/// -------
/// `KnotResult<()>`
///   - `Ok(())` when `x_min < x_max` and both are finite.
///
/// Errors
/// ------
/// - `KnotError::InvalidDomain`
///   Returned for NaN/±∞ endpoints or `x_min >= x_max`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use flexknot::knots::core::validation::validate_domain;
/// assert!(validate_domain(0.0, 1.0).is_ok());
/// assert!(validate_domain(1.0, 0.0).is_err());
/// ```
pub fn validate_domain(x_min: f64, x_max: f64) -> KnotResult<()> {
    if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
        return Err(KnotError::InvalidDomain { x_min, x_max });
    }
    Ok(())
}

/// Validate observed data pairs `(xs, ys)`.
///
/// Parameters
/// ----------
/// - `xs`: `ArrayView1<f64>`
///   Observed abscissas.
/// - `ys`: `ArrayView1<f64>`
///   Observed ordinates; same length as `xs`.
///
/// Returns
/// -------
/// `KnotResult<()>`
///   - `Ok(())` if both arrays are non-empty, equally long, and finite.
///
/// Errors
/// ------
/// - `KnotError::EmptyData` when `xs` is empty.
/// - `KnotError::DataLengthMismatch` when the lengths differ.
/// - `KnotError::NonFiniteData` for the first NaN/±∞ entry, scanning `xs`
///   then `ys`. The index refers to the position inside its own array.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_data<'a>(xs: ArrayView1<'a, f64>, ys: ArrayView1<'a, f64>) -> KnotResult<()> {
    if xs.len() != ys.len() {
        return Err(KnotError::DataLengthMismatch { xs: xs.len(), ys: ys.len() });
    }
    if xs.is_empty() {
        return Err(KnotError::EmptyData);
    }
    for values in [xs, ys] {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(KnotError::NonFiniteData { index, value });
            }
        }
    }
    Ok(())
}

/// Validate a single sigma value.
///
/// Returns `Ok(sigma)` when finite and strictly positive; `index` is only used
/// for the error payload.
///
/// # Errors
/// [`KnotError::InvalidSigma`] otherwise.
pub fn verify_sigma(sigma: f64, index: usize) -> KnotResult<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(KnotError::InvalidSigma { index, value: sigma });
    }
    Ok(sigma)
}

/// Validate a per-point sigma array against the number of observations.
///
/// # Errors
/// - [`KnotError::SigmaLengthMismatch`] if `sigmas.len() != n`.
/// - [`KnotError::InvalidSigma`] for the first non-finite or non-positive entry.
pub fn validate_sigmas(sigmas: ArrayView1<f64>, n: usize) -> KnotResult<()> {
    if sigmas.len() != n {
        return Err(KnotError::SigmaLengthMismatch { expected: n, actual: sigmas.len() });
    }
    for (index, &value) in sigmas.iter().enumerate() {
        verify_sigma(value, index)?;
    }
    Ok(())
}

/// Validate the bounds of a uniform prior.
///
/// # Errors
/// [`KnotError::InvalidPriorBounds`] unless both bounds are finite and
/// `lower < upper`.
pub fn validate_prior_bounds(lower: f64, upper: f64) -> KnotResult<()> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(KnotError::InvalidPriorBounds { lower, upper });
    }
    Ok(())
}

/// Validate the node-count range of an adaptive prior.
///
/// `n_max >= 2` guarantees that both end-node y slots exist in the adaptive
/// layout; `n_min <= n_max` keeps the count prior non-empty.
///
/// # Errors
/// [`KnotError::InvalidNodeRange`] otherwise.
pub fn validate_node_range(n_min: usize, n_max: usize) -> KnotResult<()> {
    if n_min > n_max || n_max < 2 {
        return Err(KnotError::InvalidNodeRange { n_min, n_max });
    }
    Ok(())
}

/// Validate a unit-hypercube sample.
///
/// Parameters
/// ----------
/// - `hypercube`: `ArrayView1<f64>`
///   Sample whose entries must lie in the closed interval `[0, 1]`.
/// - `expected`: `Option<usize>`
///   Required length, when the caller has one.
///
/// Errors
/// ------
/// - `KnotError::HypercubeLengthMismatch` if `expected` is `Some(n)` and the
///   length differs.
/// - `KnotError::HypercubeOutOfRange` for the first entry outside `[0, 1]`
///   (NaN included).
pub fn validate_hypercube(hypercube: ArrayView1<f64>, expected: Option<usize>) -> KnotResult<()> {
    if let Some(expected) = expected {
        if hypercube.len() != expected {
            return Err(KnotError::HypercubeLengthMismatch { expected, actual: hypercube.len() });
        }
    }
    for (index, &value) in hypercube.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(KnotError::HypercubeOutOfRange { index, value });
        }
    }
    Ok(())
}
