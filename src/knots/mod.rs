//! knots: flex-knot codec, evaluation, geometry, and errors.
//!
//! Purpose
//! -------
//! Bundle everything that describes a flex-knot curve independently of data
//! or priors: the theta codec and node lists in [`core`], the evaluator and
//! geometry helpers in [`models`], and the shared error types in [`errors`].
//! Likelihoods, priors, and the Python bindings are built on this layer.
//!
//! Key behaviors
//! -------------
//! - Encode/decode interleaved thetas, including the adaptive layout whose
//!   leading count selects the number of active nodes.
//! - Evaluate piecewise-linear curves with clamped, exact-at-node
//!   interpolation.
//! - Compare two curves through their crossings and the area between them.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x_min < x_max` for every [`Domain`]; end nodes sit on the domain bounds.
//! - Theta vectors are never mutated; each transform returns a new array.
//!
//! Conventions
//! -----------
//! - Errors are reported as [`KnotError`] / [`KnotResult`] with the narrow
//!   [`StructureError`] and [`ShapeError`] wrapped inside.
//! - This layer performs no I/O and no logging.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{AdaptiveTheta, Domain, KnotMode, Nodes, Segment};
pub use self::errors::{KnotError, KnotResult, ShapeError, StructureError};
pub use self::models::FlexKnot;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{KnotError, KnotResult, ShapeError, StructureError};
    pub use super::models::prelude::*;
}
