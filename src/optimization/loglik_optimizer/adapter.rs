//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. Nelder–Mead only needs cost
//! values, so no gradient is wired up.
use crate::optimization::loglik_optimizer::{
    traits::LogLikelihood,
    types::{Cost, Theta},
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)` (negative log-likelihood).
/// - A non-finite `ℓ(θ)` becomes an infinite cost, so the simplex treats the
///   point as the worst possible vertex instead of aborting the run.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta)?;
        if !output.is_finite() {
            return Ok(f64::INFINITY);
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood`.
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::{OptError, OptResult};
    use ndarray::array;

    struct Bowl;

    impl LogLikelihood for Bowl {
        fn value(&self, theta: &Theta) -> OptResult<f64> {
            if theta[0] < -10.0 {
                return Err(OptError::InvalidThetaInput { index: 0, value: theta[0] });
            }
            if theta[0] > 10.0 {
                return Ok(f64::NEG_INFINITY);
            }
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // The adapter flips the sign, maps non-finite values to +∞, and keeps
    // model errors as errors.
    //
    // Given
    // -----
    // - ℓ(θ) = -θ·θ with an error below -10 and -∞ above 10.
    //
    // Expect
    // ------
    // - cost([1, 2]) = 5, cost([11]) = +∞, cost([-11]) = Err.
    fn cost_is_negated_log_likelihood() {
        let adapter = ArgMinAdapter::new(&Bowl);

        assert_eq!(adapter.cost(&array![1.0, 2.0]).unwrap(), 5.0);
        assert_eq!(adapter.cost(&array![11.0]).unwrap(), f64::INFINITY);

        let err = adapter.cost(&array![-11.0]).unwrap_err();
        assert!(matches!(OptError::from(err), OptError::InvalidThetaInput { index: 0, .. }));
    }
}
