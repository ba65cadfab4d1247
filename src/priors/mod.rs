//! priors: unit-hypercube transforms for nested sampling.
//!
//! Purpose
//! -------
//! Nested samplers draw points uniformly from `[0, 1]^d` and ask the model to
//! map them onto its prior. This module provides that map for flex-knots and
//! the scalar building blocks it is made of.
//!
//! Key behaviors
//! -------------
//! - [`PriorTransform`] is the single seam: hypercube in, parameters out.
//! - [`UniformPrior`] and [`SortedUniformPrior`] are the scalar and ordered
//!   building blocks.
//! - [`FlexKnotPrior`] and [`AdaptiveKnotPrior`] assemble flex-knot thetas.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every transform validates its hypercube (entries in `[0, 1]`, layout
//!   length) and its bounds at construction.
//! - Transforms are pure; priors are `Copy` and carry no state between calls.

pub mod knots;
pub mod uniform;

use crate::knots::errors::KnotResult;
use ndarray::{Array1, ArrayView1};

pub use self::knots::{AdaptiveKnotPrior, FlexKnotPrior};
pub use self::uniform::{SortedUniformPrior, UniformPrior, forced_identifiability_transform};

/// Map a unit-hypercube sample onto prior space.
pub trait PriorTransform {
    /// # Errors
    /// `KnotError` for a hypercube that is out of range or does not fit the
    /// prior's layout.
    fn transform(&self, hypercube: ArrayView1<f64>) -> KnotResult<Array1<f64>>;
}

pub mod prelude {
    pub use super::PriorTransform;
    pub use super::knots::{AdaptiveKnotPrior, FlexKnotPrior};
    pub use super::uniform::{SortedUniformPrior, UniformPrior};
}
