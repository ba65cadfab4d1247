//! Uniform and sorted-uniform prior transforms.
//!
//! [`SortedUniformPrior`] draws `k` ordered values without rejection: the
//! forced-identifiability transform maps `[0, 1]^k` onto the ordered simplex
//! with the density of sorted uniforms, then the result is scaled onto
//! `[lower, upper]`.
use crate::{
    knots::{
        core::validation::{validate_hypercube, validate_prior_bounds},
        errors::KnotResult,
    },
    priors::PriorTransform,
};
use ndarray::{Array1, ArrayView1};

/// Independent `Uniform(lower, upper)` on every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformPrior {
    lower: f64,
    upper: f64,
}

impl UniformPrior {
    /// # Errors
    /// `KnotError::InvalidPriorBounds` unless both bounds are finite and
    /// `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> KnotResult<Self> {
        validate_prior_bounds(lower, upper)?;
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Scale one unit-interval value; no range check.
    pub(crate) fn scale(&self, u: f64) -> f64 {
        self.lower + (self.upper - self.lower) * u
    }
}

impl PriorTransform for UniformPrior {
    fn transform(&self, hypercube: ArrayView1<f64>) -> KnotResult<Array1<f64>> {
        validate_hypercube(hypercube, None)?;
        Ok(hypercube.mapv(|u| self.scale(u)))
    }
}

/// `k` sorted draws from `Uniform(lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedUniformPrior {
    uniform: UniformPrior,
}

impl SortedUniformPrior {
    /// # Errors
    /// `KnotError::InvalidPriorBounds` for invalid bounds.
    pub fn new(lower: f64, upper: f64) -> KnotResult<Self> {
        Ok(Self { uniform: UniformPrior::new(lower, upper)? })
    }
}

impl PriorTransform for SortedUniformPrior {
    fn transform(&self, hypercube: ArrayView1<f64>) -> KnotResult<Array1<f64>> {
        validate_hypercube(hypercube, None)?;
        Ok(forced_identifiability_transform(hypercube).mapv(|t| self.uniform.scale(t)))
    }
}

/// Map `u ∈ [0, 1]^k` to a non-decreasing `t ∈ [0, 1]^k`.
///
/// `t[k-1] = u[k-1]^(1/k)` and, walking down, `t[n] = u[n]^(1/(n+1)) t[n+1]`.
pub fn forced_identifiability_transform(u: ArrayView1<f64>) -> Array1<f64> {
    let k = u.len();
    let mut t = Array1::<f64>::zeros(k);
    if k == 0 {
        return t;
    }
    t[k - 1] = u[k - 1].powf(1.0 / k as f64);
    for n in (0..k - 1).rev() {
        t[n] = u[n].powf(1.0 / (n + 1) as f64) * t[n + 1];
    }
    t
}
