//! core: theta codec, node lists, domains, and numerical kernels.
//!
//! Purpose
//! -------
//! Collect the building blocks every flex-knot component depends on: the
//! interleaved theta codec, the adaptive sized buffer, decoded node lists,
//! the validated domain, the parameterization mode, and a handful of scalar
//! numerical kernels. Evaluation, geometry, likelihoods, and priors are
//! layered on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Validate and reduce theta vectors ([`validate_theta`], [`active_slice`],
//!   [`reduce`]) and convert between theta and node arrays
//!   ([`decode_x_nodes`], [`decode_y_nodes`], [`encode`]).
//! - Represent adaptive thetas as a sized buffer ([`AdaptiveTheta`]) whose
//!   accessors respect the active node count.
//! - Decode a theta into end-node-inclusive [`Nodes`] and iterate over
//!   [`Segment`]s.
//! - Provide interpolation, trapezoid integration, and weighted
//!   log-sum-exp ([`interp`], [`trapezoid`], [`log_sum_exp_weighted`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - A [`Domain`] always satisfies `x_min < x_max` with finite bounds.
//! - Every component works on the reduced, non-adaptive theta; the adaptive
//!   → non-adaptive reduction happens only in [`AdaptiveTheta::reduce`].
//! - The count parameter is re-read from theta on every decode and never
//!   cached across calls.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; node arrays are ordered left to right.
//! - This module performs no I/O and no logging. Structural problems are
//!   reported as `StructureError` / `ShapeError`, other configuration
//!   problems as `KnotError`.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule. Property tests for codec round
//!   trips and adaptive equivalence live in `tests/`.

pub mod adaptive;
pub mod domain;
pub mod mode;
pub mod nodes;
pub mod numerics;
pub mod theta;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adaptive::AdaptiveTheta;
pub use self::domain::Domain;
pub use self::mode::KnotMode;
pub use self::nodes::{EMPTY_THETA_VALUE, Nodes, Segment};
pub use self::numerics::{interp, log_sum_exp_weighted, trapezoid};
pub use self::theta::{active_slice, decode_x_nodes, decode_y_nodes, encode, reduce, validate_theta};
pub use self::validation::{
    validate_data, validate_domain, validate_hypercube, validate_node_range,
    validate_prior_bounds, validate_sigmas, verify_sigma,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use flexknot::knots::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::adaptive::AdaptiveTheta;
    pub use super::domain::Domain;
    pub use super::mode::KnotMode;
    pub use super::nodes::{Nodes, Segment};
    pub use super::theta::{active_slice, decode_x_nodes, decode_y_nodes, encode};
}
