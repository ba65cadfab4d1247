//! Decoded node lists of a flex-knot.
//!
//! Purpose
//! -------
//! Hold the full node list of a curve, end nodes included, as two parallel
//! arrays. [`Nodes`] is produced from theta once at the boundary; geometry
//! and likelihood code then iterate over [`Segment`]s instead of indexing into
//! the interleaved layout.
//!
//! Key behaviors
//! -------------
//! - [`Nodes::from_theta`] validates, reduces (adaptive mode), and decodes.
//! - Degenerate constants are widened to a flat two-point line:
//!   `[]` → `y = [-1, -1]`, `[v]` → `y = [v, v]`.
//! - [`Nodes::segments`] yields consecutive node pairs with slope/intercept
//!   helpers; [`Nodes::interpolate`] evaluates the polyline.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == y.len() >= 2`, `x[0] == x_min`, `x[last] == x_max`.
//! - Interior x's are taken as given; the prior keeps them ascending.
use crate::knots::{
    core::{
        domain::Domain,
        mode::KnotMode,
        numerics::interp,
        theta::{all_y, interior_x, reduce},
    },
    errors::KnotResult,
};
use ndarray::{Array1, ArrayView1};

/// Value of the constant curve encoded by an empty theta.
pub const EMPTY_THETA_VALUE: f64 = -1.0;

/// Full node list `(x, y)` of a flex-knot, end nodes included.
#[derive(Debug, Clone, PartialEq)]
pub struct Nodes {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

/// One linear piece between two consecutive nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    /// `x1 - x0`.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Slope `(y1 - y0) / (x1 - x0)`; non-finite for zero-width segments.
    pub fn slope(&self) -> f64 {
        (self.y1 - self.y0) / (self.x1 - self.x0)
    }

    /// Intercept of the supporting line, `y0 - slope * x0`.
    pub fn intercept(&self) -> f64 {
        self.y0 - self.slope() * self.x0
    }
}

impl Nodes {
    /// Decode `theta` into the full node list on `domain`.
    ///
    /// # Errors
    /// Any [`StructureError`](crate::knots::errors::StructureError) raised by
    /// the codec, lifted into [`KnotError`](crate::knots::errors::KnotError).
    pub fn from_theta(theta: ArrayView1<f64>, domain: Domain, mode: KnotMode) -> KnotResult<Self> {
        let reduced = reduce(theta, mode)?;
        Ok(Nodes::from_reduced(reduced.view(), domain))
    }

    /// Node list of an already reduced (non-adaptive, validated) theta.
    pub(crate) fn from_reduced(reduced: ArrayView1<f64>, domain: Domain) -> Self {
        let y = match reduced.len() {
            0 => Array1::from(vec![EMPTY_THETA_VALUE; 2]),
            1 => Array1::from(vec![reduced[0]; 2]),
            _ => all_y(reduced),
        };
        let interior = interior_x(reduced);
        let mut x = Vec::with_capacity(interior.len() + 2);
        x.push(domain.x_min);
        x.extend(interior.iter().copied());
        x.push(domain.x_max);
        Nodes { x: Array1::from(x), y }
    }

    /// Number of nodes (at least two).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` when there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Interior x-nodes, end nodes excluded.
    pub fn interior_x(&self) -> ArrayView1<'_, f64> {
        self.x.slice(ndarray::s![1..self.x.len() - 1])
    }

    /// Consecutive node pairs, left to right.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.x.windows(2).into_iter().zip(self.y.windows(2)).map(|(x, y)| Segment {
            x0: x[0],
            y0: y[0],
            x1: x[1],
            y1: y[1],
        })
    }

    /// Linear interpolation of the polyline at `x`, clamped outside the
    /// domain.
    pub fn interpolate(&self, x: f64) -> f64 {
        // Owned node arrays are built from `Vec`s and stay contiguous.
        let (Some(xp), Some(fp)) = (self.x.as_slice(), self.y.as_slice()) else {
            return f64::NAN;
        };
        interp(x, xp, fp)
    }
}
