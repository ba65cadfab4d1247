//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! Builds the initial simplex around `θ₀`, wraps the model in an
//! `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`), and delegates the run to
//! `run_nelder_mead`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        run::run_nelder_mead,
        simplex::initial_simplex,
        traits::{FitOptions, LogLikelihood},
        types::NelderMeadSolver,
        validation::validate_theta_input,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` using Nelder–Mead.
///
/// # Behavior
/// - Validates the options and the initial guess (non-empty, finite), then
///   calls `f.check(theta0)`.
/// - Builds the initial simplex with [`initial_simplex`].
/// - Runs Nelder–Mead until the standard deviation of the vertex costs drops
///   below `opts.sd_tolerance` or `opts.max_iter` iterations have passed.
///
/// # Errors
/// - Option and initial-guess validation errors.
/// - Any error from `f.check` or raised by `f.value` during the run.
/// - `OptError::NonFiniteCost` if no vertex ever had a finite ℓ.
///
/// # Example
/// ```
/// use ndarray::array;
/// use flexknot::optimization::errors::OptResult;
/// use flexknot::optimization::loglik_optimizer::{maximize, FitOptions, LogLikelihood, Theta};
///
/// struct Peak;
/// impl LogLikelihood for Peak {
///     fn value(&self, theta: &Theta) -> OptResult<f64> {
///         Ok(-(theta[0] - 1.0).powi(2) - (theta[1] + 2.0).powi(2))
///     }
///     fn check(&self, _: &Theta) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Peak, array![0.5, 0.5], &FitOptions::default())?;
/// assert!((out.theta_hat[0] - 1.0).abs() < 1e-3);
/// # Ok::<(), flexknot::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, opts: &FitOptions,
) -> OptResult<OptimOutcome> {
    opts.validate()?;
    validate_theta_input(&theta0)?;
    f.check(&theta0)?;

    let solver = NelderMeadSolver::new(initial_simplex(&theta0, opts))
        .with_sd_tolerance(opts.sd_tolerance)?;
    let problem = ArgMinAdapter::new(f);
    run_nelder_mead(&theta0, opts, problem, solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of a known maximum on a smooth toy log-likelihood.
    // - Tolerance of -∞ regions.
    // - Rejection of bad starting points before the run.
    // -------------------------------------------------------------------------

    struct Peak {
        center: [f64; 2],
    }

    impl LogLikelihood for Peak {
        fn value(&self, theta: &Theta) -> OptResult<f64> {
            if theta[0] < 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            Ok(-(theta[0] - self.center[0]).powi(2) - 2.0 * (theta[1] - self.center[1]).powi(2))
        }

        fn check(&self, theta: &Theta) -> OptResult<()> {
            if theta.len() != 2 {
                return Err(OptError::EmptyTheta);
            }
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // `maximize` finds the peak of a concave quadratic.
    //
    // Given
    // -----
    // - Peak at (1.5, -0.5), start at (0.2, 0).
    //
    // Expect
    // ------
    // - θ̂ within 1e-4 of the peak, ℓ(θ̂) ≈ 0, converged.
    fn maximize_recovers_quadratic_peak() {
        let model = Peak { center: [1.5, -0.5] };
        let out = maximize(&model, array![0.2, 0.0], &FitOptions::default()).unwrap();

        assert_abs_diff_eq!(out.theta_hat[0], 1.5, epsilon = 1e-4);
        assert_abs_diff_eq!(out.theta_hat[1], -0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(out.value, 0.0, epsilon = 1e-7);
        assert!(out.converged);
        assert!(out.iterations > 0);
    }

    #[test]
    // Purpose
    // -------
    // A peak next to a -∞ region is still found.
    //
    // Given
    // -----
    // - Peak at (0.1, 0); ℓ = -∞ for θ₀ < 0; start at (0.3, 0.2).
    //
    // Expect
    // ------
    // - θ̂[0] ≈ 0.1 and θ̂[0] ≥ 0.
    fn maximize_steps_around_infinite_cost() {
        let model = Peak { center: [0.1, 0.0] };
        let out = maximize(&model, array![0.3, 0.2], &FitOptions::default()).unwrap();

        assert!(out.theta_hat[0] >= 0.0);
        assert_abs_diff_eq!(out.theta_hat[0], 0.1, epsilon = 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // Invalid starting points and options are rejected before any iteration.
    //
    // Given
    // -----
    // - An empty θ₀, a NaN θ₀, a θ₀ rejected by `check`, and a zero step.
    //
    // Expect
    // ------
    // - `EmptyTheta`, `InvalidThetaInput`, `EmptyTheta` from `check`, and
    //   `InvalidSimplexStep`.
    fn maximize_rejects_bad_inputs() {
        let model = Peak { center: [0.0, 0.0] };
        let opts = FitOptions::default();

        assert_eq!(maximize(&model, array![], &opts).unwrap_err(), OptError::EmptyTheta);
        assert!(matches!(
            maximize(&model, array![f64::NAN, 0.0], &opts),
            Err(OptError::InvalidThetaInput { index: 0, .. })
        ));
        assert_eq!(maximize(&model, array![1.0], &opts).unwrap_err(), OptError::EmptyTheta);

        let bad = FitOptions { simplex_step: 0.0, ..FitOptions::default() };
        assert!(matches!(
            maximize(&model, array![1.0, 1.0], &bad),
            Err(OptError::InvalidSimplexStep { .. })
        ));
    }
}
