//! models: flex-knot evaluation and geometric comparison.
//!
//! Purpose
//! -------
//! Expose the user-facing flex-knot curve type [`FlexKnot`] on top of
//! `knots::core`. Evaluation lives in [`flexknot`]; intersections, areas,
//! and mean absolute differences between two parameterizations live in
//! [`geometry`] as further methods on the same type.
//!
//! Conventions
//! -----------
//! - Adaptive thetas are reduced once per call, then every computation runs on
//!   the non-adaptive form.
//! - Methods borrow theta as `ArrayView1<f64>` and return owned arrays.

pub mod flexknot;
pub mod geometry;

pub use self::flexknot::FlexKnot;

pub mod prelude {
    pub use super::flexknot::FlexKnot;
}
