//! optimization: maximum-likelihood fitting and its error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer used to fit flex-knot parameters: an
//! Argmin-backed Nelder–Mead maximizer for log-likelihoods and a single
//! error/result surface. Callers implement a log-likelihood, choose fit
//! options, and obtain fitted parameters and diagnostics without touching
//! backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`).
//! - Normalize configuration issues, model failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - Solvers maximize `ℓ(θ)` by minimizing an internal cost `c(θ) = -ℓ(θ)`;
//!   user-facing APIs and outcomes are expressed in terms of `ℓ`.
//! - Public entrypoints that can fail return `OptResult<T>`; flex-knot errors
//!   arrive wrapped as `OptError::Model`, and raw Argmin errors never leak.
//! - Apart from the opt-in `obs_slog` observer, this module does no I/O.

pub mod errors;
pub mod loglik_optimizer;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
}
