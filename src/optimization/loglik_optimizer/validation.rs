//! Validation helpers for log-likelihood optimization.
//!
//! This module centralizes common consistency checks used across the
//! optimizer interface:
//!
//! - **Option checks**: [`verify_simplex_step`], [`verify_zero_step`],
//!   [`verify_sd_tolerance`], [`verify_max_iter`] ensure fit settings are
//!   finite and strictly positive.
//! - **Initial guess**: [`validate_theta_input`] rejects empty or non-finite
//!   starting points.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks log-likelihood outputs
//!   for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::Theta,
};

/// Validate the relative simplex step.
///
/// # Errors
/// Returns [`OptError::InvalidSimplexStep`] if the value is non-finite or ≤ 0.0.
pub fn verify_simplex_step(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidSimplexStep { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidSimplexStep { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate the absolute step used for zero coordinates.
///
/// # Errors
/// Returns [`OptError::InvalidZeroStep`] if the value is non-finite or ≤ 0.0.
pub fn verify_zero_step(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidZeroStep { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidZeroStep { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate the standard-deviation tolerance of the simplex costs.
///
/// # Errors
/// Returns [`OptError::InvalidSdTolerance`] if the value is non-finite or ≤ 0.0.
pub fn verify_sd_tolerance(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidSdTolerance { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidSdTolerance { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate an initial guess: non-empty with finite entries.
///
/// # Errors
/// - [`OptError::EmptyTheta`] for an empty vector.
/// - [`OptError::InvalidThetaInput`] for the first non-finite entry.
pub fn validate_theta_input(theta: &Theta) -> OptResult<()> {
    if theta.is_empty() {
        return Err(OptError::EmptyTheta);
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that a scalar log-likelihood value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Option checks reject zero, negative, and non-finite settings.
    //
    // Given
    // -----
    // - 0, -1, NaN, and a valid value for each option.
    //
    // Expect
    // ------
    // - Errors for the invalid inputs, `Ok` for the valid ones.
    fn option_checks_reject_bad_settings() {
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(verify_simplex_step(bad).is_err());
            assert!(verify_zero_step(bad).is_err());
            assert!(verify_sd_tolerance(bad).is_err());
        }
        assert!(verify_simplex_step(0.05).is_ok());
        assert!(verify_zero_step(0.00025).is_ok());
        assert!(verify_sd_tolerance(1e-8).is_ok());
        assert!(verify_max_iter(0).is_err());
        assert!(verify_max_iter(10).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Initial guesses and estimates must be present and finite.
    //
    // Given
    // -----
    // - Empty, NaN-containing, and valid vectors.
    //
    // Expect
    // ------
    // - `EmptyTheta`, `InvalidThetaInput`/`InvalidThetaHat`, and `Ok`.
    fn theta_checks() {
        assert_eq!(validate_theta_input(&array![]), Err(OptError::EmptyTheta));
        assert!(matches!(
            validate_theta_input(&array![1.0, f64::NAN]),
            Err(OptError::InvalidThetaInput { index: 1, .. })
        ));
        assert!(validate_theta_input(&array![1.0, 2.0]).is_ok());

        assert_eq!(validate_theta_hat(None), Err(OptError::MissingThetaHat));
        assert!(validate_theta_hat(Some(array![f64::INFINITY])).is_err());
        assert_eq!(validate_theta_hat(Some(array![0.5])).unwrap(), array![0.5]);
        assert!(validate_value(f64::NEG_INFINITY).is_err());
    }
}
