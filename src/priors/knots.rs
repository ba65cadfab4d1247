//! Flex-knot priors: hypercube → theta.
//!
//! Purpose
//! -------
//! Map a unit-hypercube sample onto a flex-knot theta with uniform y-nodes
//! and sorted-uniform interior x-nodes, for fixed and adaptive layouts.
//!
//! Key behaviors
//! -------------
//! - [`FlexKnotPrior`] reads the hypercube in the fixed theta layout: the
//!   x slots become sorted uniforms on `[x_min, x_max]`, the y slots plain
//!   uniforms on `[y_min, y_max]`.
//! - [`AdaptiveKnotPrior`] first draws the count from
//!   `Uniform(n_min, n_max + 1)`, then transforms the remaining slots with
//!   [`AdaptiveKnotPrior::transform_tail`]: only the `floor(count) - 2`
//!   active interior x's are sorted; unused x's stay plain uniforms so that
//!   their prior does not depend on the count.
//!
//! Invariants & assumptions
//! ------------------------
//! - The drawn count is always strictly below `n_max + 1`, so
//!   `floor(count) <= n_max` and the theta decodes.
//! - Hypercube entries must lie in `[0, 1]`; lengths must match the layout.
//! - An empty hypercube gives an empty theta.
use crate::{
    knots::{
        core::{
            mode::KnotMode,
            theta::{decode_x_nodes, decode_y_nodes, encode},
            validation::{validate_hypercube, validate_node_range},
        },
        errors::KnotResult,
    },
    priors::{
        PriorTransform,
        uniform::{SortedUniformPrior, UniformPrior},
    },
};
use ndarray::{Array1, ArrayView1, s};

/// Prior of a fixed-layout flex-knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexKnotPrior {
    x_prior: SortedUniformPrior,
    y_prior: UniformPrior,
}

impl FlexKnotPrior {
    /// # Errors
    /// `KnotError::InvalidPriorBounds` for either pair of bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> KnotResult<Self> {
        Ok(Self {
            x_prior: SortedUniformPrior::new(x_min, x_max)?,
            y_prior: UniformPrior::new(y_min, y_max)?,
        })
    }
}

impl PriorTransform for FlexKnotPrior {
    /// Errors
    /// ------
    /// - `KnotError::HypercubeOutOfRange` for entries outside `[0, 1]`.
    /// - `KnotError::Structure` for an odd length above one.
    fn transform(&self, hypercube: ArrayView1<f64>) -> KnotResult<Array1<f64>> {
        validate_hypercube(hypercube, None)?;
        if hypercube.is_empty() {
            return Ok(Array1::zeros(0));
        }
        let x = decode_x_nodes(hypercube, KnotMode::Fixed)?;
        let y = decode_y_nodes(hypercube, KnotMode::Fixed)?;
        let x = self.x_prior.transform(x.view())?;
        let y = self.y_prior.transform(y.view())?;
        Ok(encode(x.view(), y.view())?)
    }
}

/// Prior of an adaptive-layout flex-knot with `n_min ..= n_max` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveKnotPrior {
    count_prior: UniformPrior,
    used_x_prior: SortedUniformPrior,
    unused_x_prior: UniformPrior,
    y_prior: UniformPrior,
    n_max: usize,
}

impl AdaptiveKnotPrior {
    /// # Errors
    /// - `KnotError::InvalidPriorBounds` for either pair of bounds.
    /// - `KnotError::InvalidNodeRange` unless `n_min <= n_max` and
    ///   `n_max >= 2`.
    pub fn new(
        x_min: f64, x_max: f64, y_min: f64, y_max: f64, n_min: usize, n_max: usize,
    ) -> KnotResult<Self> {
        validate_node_range(n_min, n_max)?;
        Ok(Self {
            count_prior: UniformPrior::new(n_min as f64, n_max as f64 + 1.0)?,
            used_x_prior: SortedUniformPrior::new(x_min, x_max)?,
            unused_x_prior: UniformPrior::new(x_min, x_max)?,
            y_prior: UniformPrior::new(y_min, y_max)?,
            n_max,
        })
    }

    /// Largest number of nodes a theta can activate.
    pub fn n_max(&self) -> usize {
        self.n_max
    }

    /// Required hypercube (and theta) length, `2 n_max - 1`.
    pub fn dimension(&self) -> usize {
        2 * self.n_max - 1
    }

    /// Node count drawn from one unit-interval value, kept below `n_max + 1`.
    pub fn count(&self, u: f64) -> f64 {
        let ceiling = self.count_prior.upper();
        let count = self.count_prior.scale(u);
        if count < ceiling { count } else { f64::from_bits(ceiling.to_bits() - 1) }
    }

    /// Transform the fixed-layout part of the hypercube for `active_nodes`
    /// active nodes.
    ///
    /// Parameters
    /// ----------
    /// - `active_nodes`: `usize`
    ///   `floor(count)`; the first `active_nodes - 2` interior x's are sorted.
    /// - `tail`: `ArrayView1<f64>`
    ///   Hypercube without its count slot, length `2 n_max - 2`.
    ///
    /// Errors
    /// ------
    /// - `KnotError::HypercubeLengthMismatch` / `HypercubeOutOfRange`.
    pub fn transform_tail(
        &self, active_nodes: usize, tail: ArrayView1<f64>,
    ) -> KnotResult<Array1<f64>> {
        validate_hypercube(tail, Some(self.dimension() - 1))?;
        let x_cube = decode_x_nodes(tail, KnotMode::Fixed)?;
        let y_cube = decode_y_nodes(tail, KnotMode::Fixed)?;

        let used = active_nodes.saturating_sub(2).min(x_cube.len());
        let mut x = Vec::with_capacity(x_cube.len());
        x.extend(self.used_x_prior.transform(x_cube.slice(s![..used]))?);
        x.extend(self.unused_x_prior.transform(x_cube.slice(s![used..]))?);

        let y = self.y_prior.transform(y_cube.view())?;
        Ok(encode(ArrayView1::from(&x[..]), y.view())?)
    }
}

impl PriorTransform for AdaptiveKnotPrior {
    /// Errors
    /// ------
    /// - `KnotError::HypercubeLengthMismatch` unless the length is
    ///   `2 n_max - 1`.
    /// - `KnotError::HypercubeOutOfRange` for entries outside `[0, 1]`.
    fn transform(&self, hypercube: ArrayView1<f64>) -> KnotResult<Array1<f64>> {
        validate_hypercube(hypercube, Some(self.dimension()))?;
        let count = self.count(hypercube[0]);
        let tail = self.transform_tail(count.floor() as usize, hypercube.slice(s![1..]))?;

        let mut theta = Vec::with_capacity(hypercube.len());
        theta.push(count);
        theta.extend(tail);
        Ok(Array1::from(theta))
    }
}
