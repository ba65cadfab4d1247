//! Execution helper that runs Nelder–Mead on a log-likelihood problem and
//! returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        FitOptions, LogLikelihood, OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        types::{NelderMeadSolver, SimplexState},
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, State};

/// Run Nelder–Mead for a log-likelihood problem.
///
/// Wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the prepared simplex solver,
/// - optional observers (behind the `obs_slog` feature),
/// - the iteration cap from `opts.max_iter`,
///   then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Arguments
/// - `theta0`: Starting point; only used for the optional initial log line,
///   the simplex already contains it.
/// - `opts`: Fit options (iteration cap and verbosity are read here).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user's model.
/// - `solver`: A Nelder–Mead solver built from the initial simplex.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs ℓ(θ₀).
///
/// # Errors
/// - Propagates any `argmin` runtime error, including model errors raised by
///   the log-likelihood, via `From<argmin::core::Error>`.
/// - Propagates validation errors encountered when constructing
///   [`OptimOutcome`].
pub fn run_nelder_mead<'a, F>(
    theta0: &Theta, opts: &FitOptions, problem: ArgMinAdapter<'a, F>, solver: NelderMeadSolver,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(theta0, &problem)?;
    }
    #[cfg(not(feature = "obs_slog"))]
    let _ = theta0;

    let max_iter = opts.max_iter as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let mut result: SimplexState = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = -problem.cost(theta0)?;
    eprintln!("init: ell(theta0) = {:.6}", ll0);
    Ok(())
}
