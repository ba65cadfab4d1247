//! Fixed endpoints of a flex-knot.
//!
//! Every flex-knot lives on a closed interval `[x_min, x_max]`; the end nodes
//! sit exactly on these abscissas and only their y values are free.
use crate::knots::{core::validation::validate_domain, errors::KnotResult};

/// Closed interval `[x_min, x_max]` carrying the fixed end nodes.
///
/// Invariant: both bounds finite and `x_min < x_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
}

impl Domain {
    /// Construct a validated [`Domain`].
    ///
    /// # Errors
    /// - [`KnotError::InvalidDomain`](crate::knots::errors::KnotError::InvalidDomain)
    ///   if either bound is non-finite or `x_min >= x_max`.
    pub fn new(x_min: f64, x_max: f64) -> KnotResult<Self> {
        validate_domain(x_min, x_max)?;
        Ok(Domain { x_min, x_max })
    }

    /// Width `x_max - x_min` (strictly positive).
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}
