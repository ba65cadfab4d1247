//! Intersections and absolute-difference area between two flex-knots.
//!
//! Purpose
//! -------
//! Compare two parameterizations of the same [`FlexKnot`]: where their curves
//! cross, how much area lies between them, and the mean absolute difference
//! over the domain. These are convergence and goodness-of-fit diagnostics;
//! they sit outside any sampling loop.
//!
//! Key behaviors
//! -------------
//! - [`FlexKnot::intersections`] intersects every segment pair and keeps the
//!   crossings strictly inside both segments, sorted ascending.
//! - [`FlexKnot::area`] integrates `|f0 - f1|` with the trapezoid rule over
//!   the sorted union of crossings, domain endpoints, and both curves'
//!   interior x-nodes. On that grid the integrand is linear between
//!   neighbours, so the rule is exact.
//! - [`FlexKnot::mean_absolute_difference`] divides the area by the domain
//!   width.
//!
//! Invariants & assumptions
//! ------------------------
//! - Degenerate thetas are widened to flat two-point lines before
//!   intersecting (`[]` → −1, `[v]` → `v`).
//! - Parallel segment pairs and zero-width segments yield no crossing.
//! - Results are symmetric in the two thetas: the crossing numerator is
//!   grouped so that swapping the curves negates numerator and denominator
//!   exactly.
use crate::knots::{
    core::{
        nodes::{Nodes, Segment},
        numerics::trapezoid,
    },
    errors::KnotResult,
    models::flexknot::FlexKnot,
};
use ndarray::{Array1, ArrayView1};

impl FlexKnot {
    /// Sorted x-coordinates where the curves of `theta0` and `theta1` cross.
    ///
    /// Parameters
    /// ----------
    /// - `theta0`, `theta1`: `ArrayView1<f64>`
    ///   Parameter vectors in this flex-knot's layout.
    ///
    /// Returns
    /// -------
    /// `KnotResult<Array1<f64>>`
    ///   - Crossing abscissas strictly inside a segment of each curve,
    ///     ascending. Touching at a shared node is not reported.
    ///
    /// Errors
    /// ------
    /// - `KnotError::Structure` for a malformed theta.
    pub fn intersections(
        &self, theta0: ArrayView1<f64>, theta1: ArrayView1<f64>,
    ) -> KnotResult<Array1<f64>> {
        let nodes0 = self.nodes(theta0)?;
        let nodes1 = self.nodes(theta1)?;
        Ok(Array1::from(crossings(&nodes0, &nodes1)))
    }

    /// Area between the curves of `theta0` and `theta1` over the domain.
    ///
    /// Satisfies `area(a, b) == area(b, a)` and `area(a, a) == 0`.
    ///
    /// # Errors
    /// `KnotError::Structure` for a malformed theta.
    pub fn area(&self, theta0: ArrayView1<f64>, theta1: ArrayView1<f64>) -> KnotResult<f64> {
        let reduced0 = self.reduce(theta0)?;
        let reduced1 = self.reduce(theta1)?;
        let nodes0 = Nodes::from_reduced(reduced0.view(), self.domain);
        let nodes1 = Nodes::from_reduced(reduced1.view(), self.domain);

        let mut grid = crossings(&nodes0, &nodes1);
        grid.push(self.domain.x_min);
        grid.push(self.domain.x_max);
        grid.extend(nodes0.interior_x().iter().copied());
        grid.extend(nodes1.interior_x().iter().copied());
        grid.sort_by(f64::total_cmp);

        let points = ArrayView1::from(&grid[..]);
        let f0 = self.evaluate_reduced(points, reduced0.view());
        let f1 = self.evaluate_reduced(points, reduced1.view());
        let gap: Vec<f64> = f0.iter().zip(f1.iter()).map(|(a, b)| (a - b).abs()).collect();

        Ok(trapezoid(&grid, &gap))
    }

    /// [`FlexKnot::area`] divided by `x_max - x_min`.
    ///
    /// # Errors
    /// `KnotError::Structure` for a malformed theta.
    pub fn mean_absolute_difference(
        &self, theta0: ArrayView1<f64>, theta1: ArrayView1<f64>,
    ) -> KnotResult<f64> {
        Ok(self.area(theta0, theta1)? / self.domain.width())
    }
}

/// Every crossing of two node lists, sorted ascending.
fn crossings(nodes0: &Nodes, nodes1: &Nodes) -> Vec<f64> {
    let mut found = Vec::new();
    for q in nodes1.segments() {
        for p in nodes0.segments() {
            if let Some(x) = segment_crossing(&p, &q) {
                found.push(x);
            }
        }
    }
    found.sort_by(f64::total_cmp);
    found
}

/// Crossing of the lines through `p` and `q`, if it lies strictly inside both
/// segments.
fn segment_crossing(p: &Segment, q: &Segment) -> Option<f64> {
    if p.width() == 0.0 || q.width() == 0.0 {
        return None;
    }
    let mp = p.slope();
    let mq = q.slope();
    if mp == mq {
        return None;
    }
    let x = ((q.y0 - p.y0) + (p.x0 * mp - q.x0 * mq)) / (mp - mq);
    let inside = p.x0 < x && x < p.x1 && q.x0 < x && x < q.x1;
    inside.then_some(x)
}
