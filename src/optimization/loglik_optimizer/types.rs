//! loglik_optimizer::types: shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and the solver alias used by the
//! log-likelihood optimizer so the rest of the optimization code stays
//! agnostic to `ndarray` and Argmin generics.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors and scalar costs
//!   (`Theta`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose the Nelder–Mead solver and its iteration state specialized to
//!   these shapes, plus the default fit settings.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray` containers over `f64`.
//! - Nelder–Mead is derivative-free, so the iteration state carries no
//!   gradient, Jacobian, Hessian, or residual slots.
//!
//! Testing notes
//! -------------
//! - Aliases and constants only; exercised through the optimizer tests.
use argmin::{core::IterState, solver::neldermead::NelderMead};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Nelder–Mead solver specialized to this crate’s numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;

/// Iteration state driven by [`NelderMeadSolver`].
pub type SimplexState = IterState<Theta, (), (), (), (), Cost>;

/// Relative offset of each simplex vertex from the initial guess.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.05;

/// Absolute offset used for coordinates that start at exactly zero.
pub const DEFAULT_ZERO_STEP: f64 = 0.00025;

/// Default standard-deviation tolerance on the simplex costs.
pub const DEFAULT_SD_TOLERANCE: f64 = 1e-10;

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 5_000;
