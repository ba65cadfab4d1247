//! loglik_optimizer: argmin-powered Nelder–Mead log-likelihood maximizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)` from Rust or Python. Callers implement a single
//! trait, [`LogLikelihood`], and invoke [`maximize`] to run a derivative-free
//! Nelder–Mead search. Flex-knot likelihoods are piecewise in θ (node order,
//! adaptive node counts), so gradient-based solvers are not used.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates options and the initial guess (then [`LogLikelihood::check`]),
//!   - builds the starting simplex via [`simplex::initial_simplex`],
//!   - executes the solver via [`run::run_nelder_mead`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`FitOptions`]) and validation logic
//!   ([`validation`]) so downstream code can assume sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by minimizing
//!   a cost `c(θ) = -ℓ(θ)`; user code implements `ℓ(θ)`, never the cost.
//! - A non-finite `ℓ(θ)` is an infinitely bad point, not an error. Malformed
//!   inputs are reported as [`OptError`](crate::optimization::errors::OptError)
//!   values, not panics.
//!
//! Conventions
//! -----------
//! - Parameters are [`Theta`] (`Array1<f64>`). The optimizer does not know
//!   about flex-knot layouts; the likelihood interprets θ.
//! - All user-facing values (including [`OptimOutcome::value`]) are expressed
//!   in terms of `ℓ`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions in [`adapter`], simplex
//!   construction, configuration and outcome invariants in [`traits`], input
//!   checks in [`validation`], and end-to-end maximization of toy
//!   log-likelihoods in [`api`].

pub mod adapter;
pub mod api;
pub mod run;
pub mod simplex;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{FitOptions, LogLikelihood, OptimOutcome};
pub use self::types::{Cost, FnEvalMap, Theta};

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{FitOptions, LogLikelihood, OptimOutcome};
    pub use super::types::{Cost, Theta};
}
