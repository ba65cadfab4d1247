//! Sized buffer for adaptive thetas.
//!
//! [`AdaptiveTheta`] stores the full fixed-capacity adaptive vector together
//! with the number of active nodes decoded from its count parameter. The raw
//! count stays available as a continuous value; everything else goes through
//! accessors that respect the active length.
use crate::knots::errors::StructureError;
use ndarray::{Array1, ArrayView1, s};

/// Adaptive theta `[count, y0, x1, y1, …, y_(Nmax-1)]` with its active node
/// count resolved.
///
/// Construction validates the layout, so every instance satisfies
/// `active_nodes <= capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTheta {
    values: Array1<f64>,
    active_nodes: usize,
}

impl AdaptiveTheta {
    /// Validate an adaptive theta and resolve `floor(count)`.
    ///
    /// # Errors
    /// - [`StructureError::MissingCount`] for an empty vector.
    /// - [`StructureError::EvenLength`] for an even length.
    /// - [`StructureError::InvalidCount`] if the count is NaN, ±∞, or negative.
    /// - [`StructureError::CountExceedsCapacity`] if `floor(count)` exceeds
    ///   `(len + 1) / 2`.
    pub fn new(theta: ArrayView1<f64>) -> Result<Self, StructureError> {
        if theta.is_empty() {
            return Err(StructureError::MissingCount);
        }
        if theta.len() % 2 != 1 {
            return Err(StructureError::EvenLength { len: theta.len() });
        }
        let count = theta[0];
        if !count.is_finite() || count < 0.0 {
            return Err(StructureError::InvalidCount { count });
        }
        let capacity = (theta.len() + 1) / 2;
        let floored = count.floor();
        if floored > capacity as f64 {
            return Err(StructureError::CountExceedsCapacity {
                nodes: floored as usize,
                capacity,
            });
        }
        Ok(AdaptiveTheta { values: theta.to_owned(), active_nodes: floored as usize })
    }

    /// Continuous count parameter `theta[0]`.
    pub fn count(&self) -> f64 {
        self.values[0]
    }

    /// `floor(count)`.
    pub fn active_nodes(&self) -> usize {
        self.active_nodes
    }

    /// Maximum number of nodes the buffer can describe, `(len + 1) / 2`.
    pub fn capacity(&self) -> usize {
        (self.values.len() + 1) / 2
    }

    /// Number of active interior nodes, `max(floor(count) - 2, 0)`.
    pub fn active_interior(&self) -> usize {
        self.active_nodes.saturating_sub(2)
    }

    /// Final y-node `y_(Nmax-1)`, shared by every active length.
    pub fn last_y(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Non-adaptive theta of the active nodes.
    ///
    /// - 0 active nodes: `[]` (constant −1).
    /// - 1 active node: `[y_(Nmax-1)]`.
    /// - `k >= 2` active nodes: `[y0, x1, y1, …, x_(k-2), y_(k-2), y_(Nmax-1)]`.
    pub fn reduce(&self) -> Array1<f64> {
        match self.active_nodes {
            0 => Array1::zeros(0),
            1 => Array1::from(vec![self.last_y()]),
            k => {
                let end = 2 * k - 2;
                let mut reduced: Vec<f64> = self.values.slice(s![1..end]).to_vec();
                reduced.push(self.last_y());
                Array1::from(reduced)
            }
        }
    }

    /// Borrow the full underlying vector, count included.
    pub fn as_view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }
}
