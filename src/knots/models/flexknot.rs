//! Flex-knot evaluator: piecewise-linear curves with free interior knots.
//!
//! A [`FlexKnot`] pairs a validated [`Domain`] with a [`KnotMode`]. Adaptive
//! evaluation reduces theta to its active sub-vector and then runs the same
//! code path as a fixed flex-knot, so
//! `adaptive.evaluate(x, θ) == fixed.evaluate(x, active_slice(θ))` holds
//! exactly.
//!
//! Evaluation rules:
//! - theta of length 0: −1 everywhere.
//! - theta of length 1: `theta[0]` everywhere.
//! - otherwise linear interpolation through
//!   `([x_min, x1, …, x_(N-2), x_max], [y0, …, y_(N-1)])`, clamped to the end
//!   values outside `[x_min, x_max]`; NaN inputs give NaN.
use crate::knots::{
    core::{
        domain::Domain,
        mode::KnotMode,
        nodes::{EMPTY_THETA_VALUE, Nodes},
        theta::reduce,
    },
    errors::{KnotResult, StructureError},
};
use ndarray::{Array1, ArrayView1};

/// Piecewise-linear curve with end nodes fixed at `x_min` and `x_max`.
///
/// # Notes
/// - Holds no per-call state; one instance can evaluate any number of thetas
///   concurrently.
/// - Interior x-nodes are assumed ascending (the priors guarantee it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexKnot {
    /// Fixed end-node abscissas.
    pub domain: Domain,
    /// Theta layout.
    pub mode: KnotMode,
}

impl FlexKnot {
    /// Construct a flex-knot over `domain` using the `mode` layout.
    pub fn new(domain: Domain, mode: KnotMode) -> Self {
        FlexKnot { domain, mode }
    }

    /// Fixed-layout flex-knot on `[x_min, x_max]`.
    ///
    /// # Errors
    /// [`KnotError::InvalidDomain`](crate::knots::errors::KnotError::InvalidDomain)
    /// for an invalid interval.
    pub fn fixed(x_min: f64, x_max: f64) -> KnotResult<Self> {
        Ok(FlexKnot::new(Domain::new(x_min, x_max)?, KnotMode::Fixed))
    }

    /// Adaptive-layout flex-knot on `[x_min, x_max]`.
    ///
    /// # Errors
    /// [`KnotError::InvalidDomain`](crate::knots::errors::KnotError::InvalidDomain)
    /// for an invalid interval.
    pub fn adaptive(x_min: f64, x_max: f64) -> KnotResult<Self> {
        Ok(FlexKnot::new(Domain::new(x_min, x_max)?, KnotMode::Adaptive))
    }

    /// Validate `theta` and return its non-adaptive form.
    ///
    /// # Errors
    /// [`StructureError`] for a malformed theta.
    pub fn reduce(&self, theta: ArrayView1<f64>) -> Result<Array1<f64>, StructureError> {
        reduce(theta, self.mode)
    }

    /// Full node list of `theta`, end nodes included.
    ///
    /// # Errors
    /// [`StructureError`] (as `KnotError::Structure`) for a malformed theta.
    pub fn nodes(&self, theta: ArrayView1<f64>) -> KnotResult<Nodes> {
        Nodes::from_theta(theta, self.domain, self.mode)
    }

    /// Evaluate the curve encoded by `theta` at every point of `xs`.
    ///
    /// Parameters
    /// ----------
    /// - `xs`: `ArrayView1<f64>`
    ///   Evaluation points; any order, values outside the domain allowed.
    /// - `theta`: `ArrayView1<f64>`
    ///   Parameter vector in this flex-knot's layout.
    ///
    /// Returns
    /// -------
    /// `KnotResult<Array1<f64>>`
    ///   - One value per entry of `xs`.
    ///
    /// Errors
    /// ------
    /// - `KnotError::Structure`
    ///   Malformed theta (wrong parity, bad adaptive count).
    pub fn evaluate(&self, xs: ArrayView1<f64>, theta: ArrayView1<f64>) -> KnotResult<Array1<f64>> {
        let reduced = self.reduce(theta)?;
        Ok(self.evaluate_reduced(xs, reduced.view()))
    }

    /// Scalar version of [`FlexKnot::evaluate`].
    ///
    /// # Errors
    /// `KnotError::Structure` for a malformed theta.
    pub fn evaluate_at(&self, x: f64, theta: ArrayView1<f64>) -> KnotResult<f64> {
        let reduced = self.reduce(theta)?;
        Ok(self.evaluate_reduced(ArrayView1::from(std::slice::from_ref(&x)), reduced.view())[0])
    }

    /// Evaluate an already reduced, validated theta.
    pub(crate) fn evaluate_reduced(&self, xs: ArrayView1<f64>, reduced: ArrayView1<f64>) -> Array1<f64> {
        match reduced.len() {
            0 => Array1::from_elem(xs.len(), EMPTY_THETA_VALUE),
            1 => Array1::from_elem(xs.len(), reduced[0]),
            _ => {
                let nodes = Nodes::from_reduced(reduced, self.domain);
                xs.mapv(|x| nodes.interpolate(x))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knots::{core::theta::active_slice, errors::KnotError};
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Degenerate constants, clamping, and exact node hits.
    // - Adaptive evaluation equivalence with the reduced fixed evaluation.
    // - Structure errors surfacing through `evaluate`.
    //
    // Randomized versions of these properties live in `tests/`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Empty and single-element thetas are constants.
    //
    // Given
    // -----
    // - xs spanning inside and outside [1, 2], including NaN.
    //
    // Expect
    // ------
    // - -1 and 3.5 everywhere, NaN inputs included.
    fn degenerate_thetas_are_constant() {
        let knot = FlexKnot::fixed(1.0, 2.0).unwrap();
        let xs = array![-10.0, 1.0, 1.5, 2.0, 7.0, f64::NAN];

        let empty = knot.evaluate(xs.view(), array![].view()).unwrap();
        assert!(empty.iter().all(|&v| v == -1.0));

        let constant = knot.evaluate(xs.view(), array![3.5].view()).unwrap();
        assert!(constant.iter().all(|&v| v == 3.5));
    }

    #[test]
    // Purpose
    // -------
    // Interpolation is exact at the end nodes and interior knots and clamps
    // outside the domain.
    //
    // Given
    // -----
    // - theta = [1, 0.25, 3, -2] on [0, 1].
    //
    // Expect
    // ------
    // - f(0) = 1, f(0.25) = 3, f(1) = -2, f(-1) = 1, f(2) = -2, and the
    //   midpoint of the first segment is 2.
    fn interpolation_hits_nodes_and_clamps() {
        let knot = FlexKnot::fixed(0.0, 1.0).unwrap();
        let theta = array![1.0, 0.25, 3.0, -2.0];

        assert_eq!(knot.evaluate_at(0.0, theta.view()).unwrap(), 1.0);
        assert_eq!(knot.evaluate_at(0.25, theta.view()).unwrap(), 3.0);
        assert_eq!(knot.evaluate_at(1.0, theta.view()).unwrap(), -2.0);
        assert_eq!(knot.evaluate_at(-1.0, theta.view()).unwrap(), 1.0);
        assert_eq!(knot.evaluate_at(2.0, theta.view()).unwrap(), -2.0);
        assert_relative_eq!(knot.evaluate_at(0.125, theta.view()).unwrap(), 2.0);
        assert!(knot.evaluate_at(f64::NAN, theta.view()).unwrap().is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Adaptive evaluation equals fixed evaluation of the active slice.
    //
    // Given
    // -----
    // - An adaptive theta with capacity 4 and counts 0.5, 1.5, 2.5, 3.5, 4.0.
    //
    // Expect
    // ------
    // - Bitwise-equal outputs on a grid.
    fn adaptive_matches_fixed_on_active_slice() {
        let adaptive = FlexKnot::adaptive(0.0, 1.0).unwrap();
        let fixed = FlexKnot::fixed(0.0, 1.0).unwrap();
        let xs = Array1::linspace(-0.5, 1.5, 41);

        for count in [0.5, 1.5, 2.5, 3.5, 4.0] {
            let theta = array![count, 0.1, 0.3, 0.8, 0.6, -0.4, 0.9];
            let active = active_slice(theta.view()).unwrap();

            let lhs = adaptive.evaluate(xs.view(), theta.view()).unwrap();
            let rhs = fixed.evaluate(xs.view(), active.view()).unwrap();

            assert_eq!(lhs, rhs, "count {count}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Malformed thetas are rejected before any numeric work.
    //
    // Given
    // -----
    // - A three-element fixed theta and an over-capacity adaptive theta.
    //
    // Expect
    // ------
    // - `KnotError::Structure(..)`.
    fn malformed_theta_is_a_structure_error() {
        let fixed = FlexKnot::fixed(0.0, 1.0).unwrap();
        let adaptive = FlexKnot::adaptive(0.0, 1.0).unwrap();

        assert!(matches!(
            fixed.evaluate_at(0.5, array![1.0, 0.5, 2.0].view()),
            Err(KnotError::Structure(StructureError::OddLength { len: 3 }))
        ));
        assert!(matches!(
            adaptive.evaluate_at(0.5, array![5.0, 0.0, 1.0].view()),
            Err(KnotError::Structure(StructureError::CountExceedsCapacity { .. }))
        ));
    }
}
