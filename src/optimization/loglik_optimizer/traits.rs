//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`FitOptions`]: configuration for the Nelder–Mead optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. Non-finite log-likelihood values are treated as infinitely
//! bad points rather than errors, which keeps the simplex away from them.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Cost, FnEvalMap, Theta,
        types::{DEFAULT_MAX_ITER, DEFAULT_SD_TOLERANCE, DEFAULT_SIMPLEX_STEP, DEFAULT_ZERO_STEP},
        validation::{
            validate_theta_hat, validate_value, verify_max_iter, verify_sd_tolerance,
            verify_simplex_step, verify_zero_step,
        },
    },
};
use argmin::core::TerminationStatus;

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
/// Implementors own their data; the optimizer only borrows `self`.
///
/// Required:
/// - `value(&Theta) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
///   - Errors: return a descriptive `OptError` for malformed inputs. Values
///     that are merely non-finite should be returned as `Ok`.
/// - `check(&Theta) -> OptResult<()>`: validation hook to reject obviously
///   invalid starting points. Called once before optimization.
pub trait LogLikelihood {
    fn value(&self, theta: &Theta) -> OptResult<Cost>;
    fn check(&self, theta: &Theta) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `simplex_step`: relative offset of each initial vertex,
///   `θ_i ← θ_i (1 + simplex_step)`.
/// - `zero_step`: absolute offset for coordinates that start at zero.
/// - `sd_tolerance`: stop once the standard deviation of the vertex costs
///   falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
/// - `verbose`: if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default:
/// - `simplex_step = 0.05`, `zero_step = 0.00025`, `sd_tolerance = 1e-10`,
///   `max_iter = 5000`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub simplex_step: f64,
    pub zero_step: f64,
    pub sd_tolerance: f64,
    pub max_iter: usize,
    pub verbose: bool,
}

impl FitOptions {
    /// Construct validated fit options.
    ///
    /// # Errors
    /// - [`OptError::InvalidSimplexStep`](crate::optimization::errors::OptError::InvalidSimplexStep),
    ///   [`OptError::InvalidZeroStep`](crate::optimization::errors::OptError::InvalidZeroStep),
    ///   [`OptError::InvalidSdTolerance`](crate::optimization::errors::OptError::InvalidSdTolerance)
    ///   for non-finite or non-positive values.
    /// - [`OptError::InvalidMaxIter`](crate::optimization::errors::OptError::InvalidMaxIter)
    ///   if `max_iter == 0`.
    pub fn new(
        simplex_step: f64, zero_step: f64, sd_tolerance: f64, max_iter: usize, verbose: bool,
    ) -> OptResult<Self> {
        verify_simplex_step(simplex_step)?;
        verify_zero_step(zero_step)?;
        verify_sd_tolerance(sd_tolerance)?;
        verify_max_iter(max_iter)?;
        Ok(Self { simplex_step, zero_step, sd_tolerance, max_iter, verbose })
    }

    /// Re-run the constructor checks on an existing value (fields are public).
    pub fn validate(&self) -> OptResult<()> {
        verify_simplex_step(self.simplex_step)?;
        verify_zero_step(self.zero_step)?;
        verify_sd_tolerance(self.sd_tolerance)?;
        verify_max_iter(self.max_iter)
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            simplex_step: DEFAULT_SIMPLEX_STEP,
            zero_step: DEFAULT_ZERO_STEP,
            sd_tolerance: DEFAULT_SD_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
            verbose: false,
        }
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` if the solver reported a terminating status other
///   than `NotTerminated`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            other => (true, format!("{other:?}")),
        };
        Ok(Self { theta_hat, value, converged, status, iterations: iterations as usize, fn_evals })
    }
}
