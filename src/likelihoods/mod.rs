//! likelihoods: Gaussian data likelihoods for flex-knot curves.
//!
//! Purpose
//! -------
//! Turn a flex-knot parameter vector into a log-likelihood of observed data,
//! in the `(logL, derived)` form nested samplers call, and expose the same
//! engine to the optimizer for maximum-likelihood fits.
//!
//! Key behaviors
//! -------------
//! - [`sigma`] describes the measurement errors ([`ErrorModel`], [`Sigma`])
//!   and the array conventions used to build them.
//! - [`gaussian`] implements [`FlexKnotLikelihood`] for y-only and x/y
//!   errors and wires it into
//!   [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood).
//!
//! Conventions
//! -----------
//! - Construction validates everything; evaluation only fails on a
//!   malformed theta.

pub mod gaussian;
pub mod sigma;

pub use self::gaussian::FlexKnotLikelihood;
pub use self::sigma::{ErrorModel, Sigma};

pub mod prelude {
    pub use super::gaussian::FlexKnotLikelihood;
    pub use super::sigma::{ErrorModel, Sigma};
}
