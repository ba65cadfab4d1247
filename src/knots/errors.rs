//! Errors for flex-knot models (theta structure, node shapes, domains, data,
//! error models, and prior configuration).
//!
//! This module defines two narrow error types, [`StructureError`] (malformed
//! theta vectors) and [`ShapeError`] (mismatched node arrays), plus the
//! umbrella [`KnotError`] that every public routine in the crate returns. All
//! three implement `Display`/`Error`; [`KnotError`] converts to `PyErr` when the
//! `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Structural problems are reported eagerly by the codec, before any numeric
//!   work happens, and are never repaired silently.
//! - Numerical degeneracies (parallel segments, zero-width segments) are not
//!   errors; they are handled by explicit policies in the geometry and
//!   likelihood code.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for everything in the flex-knot stack.
pub type KnotResult<T> = Result<T, KnotError>;

/// Malformed theta vector.
///
/// Raised by [`validate_theta`](crate::knots::core::theta::validate_theta)
/// and everything that decodes theta.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureError {
    /// Non-adaptive theta must have length 0, 1, or an even length.
    OddLength { len: usize },

    /// Adaptive theta must have an odd length.
    EvenLength { len: usize },

    /// Adaptive theta must at least carry the count parameter.
    MissingCount,

    /// The count parameter must be finite and non-negative.
    InvalidCount { count: f64 },

    /// `floor(count)` asks for more nodes than theta encodes.
    CountExceedsCapacity { nodes: usize, capacity: usize },
}

impl std::error::Error for StructureError {}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructureError::OddLength { len } => {
                write!(
                    f,
                    "theta must contain an even number of elements for a non-adaptive flex-knot; got {len}"
                )
            }
            StructureError::EvenLength { len } => {
                write!(
                    f,
                    "theta must contain an odd number of elements for an adaptive flex-knot; got {len}"
                )
            }
            StructureError::MissingCount => {
                write!(f, "Adaptive theta is empty; the leading node count is missing.")
            }
            StructureError::InvalidCount { count } => {
                write!(f, "Node count must be finite and non-negative; got {count}")
            }
            StructureError::CountExceedsCapacity { nodes, capacity } => {
                write!(
                    f,
                    "floor(theta[0]) = {nodes} exceeds the number of nodes encoded in theta ({capacity})"
                )
            }
        }
    }
}

/// Mismatched x/y node arrays passed to
/// [`encode`](crate::knots::core::theta::encode).
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// `y_nodes` must have exactly two more elements than `x_nodes`.
    NodeCountMismatch { x_nodes: usize, y_nodes: usize },
}

impl std::error::Error for ShapeError {}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NodeCountMismatch { x_nodes, y_nodes } => {
                write!(
                    f,
                    "y_nodes must have exactly two more elements than x_nodes; got {x_nodes} x nodes and {y_nodes} y nodes"
                )
            }
        }
    }
}

/// Unified error type for flex-knot modelling.
///
/// Covers theta structure, node shapes, domain configuration, observed data,
/// error models, and prior / hypercube validation.
#[derive(Debug, Clone, PartialEq)]
pub enum KnotError {
    // ---- Codec ----
    /// Malformed theta.
    Structure(StructureError),

    /// Mismatched node arrays.
    Shape(ShapeError),

    // ---- Domain ----
    /// `x_min` and `x_max` must be finite with `x_min < x_max`.
    InvalidDomain { x_min: f64, x_max: f64 },

    // ---- Data ----
    /// No observations were supplied.
    EmptyData,

    /// `xs` and `ys` have different lengths.
    DataLengthMismatch { xs: usize, ys: usize },

    /// An observation is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    // ---- Error model ----
    /// Sigma values must be finite and > 0.
    InvalidSigma { index: usize, value: f64 },

    /// Per-point sigma arrays must match the number of observations.
    SigmaLengthMismatch { expected: usize, actual: usize },

    // ---- Priors ----
    /// Prior bounds must be finite with `lower < upper`.
    InvalidPriorBounds { lower: f64, upper: f64 },

    /// Node-count range must satisfy `n_min <= n_max` and `n_max >= 2`.
    InvalidNodeRange { n_min: usize, n_max: usize },

    /// Hypercube has the wrong number of entries.
    HypercubeLengthMismatch { expected: usize, actual: usize },

    /// Hypercube entries must lie in `[0, 1]`.
    HypercubeOutOfRange { index: usize, value: f64 },
}

impl std::error::Error for KnotError {}

impl std::fmt::Display for KnotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Codec ----
            KnotError::Structure(err) => write!(f, "Invalid theta structure: {err}"),
            KnotError::Shape(err) => write!(f, "Invalid node shape: {err}"),
            // ---- Domain ----
            KnotError::InvalidDomain { x_min, x_max } => {
                write!(f, "Domain must be finite with x_min < x_max; got [{x_min}, {x_max}]")
            }
            // ---- Data ----
            KnotError::EmptyData => write!(f, "No data points were provided."),
            KnotError::DataLengthMismatch { xs, ys } => {
                write!(f, "xs and ys must have equal lengths; got {xs} and {ys}")
            }
            KnotError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            // ---- Error model ----
            KnotError::InvalidSigma { index, value } => {
                write!(f, "Sigma at index {index} must be finite and > 0; got {value}")
            }
            KnotError::SigmaLengthMismatch { expected, actual } => {
                write!(f, "Sigma length mismatch: expected {expected}, got {actual}")
            }
            // ---- Priors ----
            KnotError::InvalidPriorBounds { lower, upper } => {
                write!(f, "Prior bounds must be finite with lower < upper; got [{lower}, {upper}]")
            }
            KnotError::InvalidNodeRange { n_min, n_max } => {
                write!(f, "Node range must satisfy n_min <= n_max and n_max >= 2; got [{n_min}, {n_max}]")
            }
            KnotError::HypercubeLengthMismatch { expected, actual } => {
                write!(f, "Hypercube length mismatch: expected {expected}, got {actual}")
            }
            KnotError::HypercubeOutOfRange { index, value } => {
                write!(f, "Hypercube entry at index {index} must lie in [0, 1]; got {value}")
            }
        }
    }
}

impl From<StructureError> for KnotError {
    fn from(err: StructureError) -> KnotError {
        KnotError::Structure(err)
    }
}

impl From<ShapeError> for KnotError {
    fn from(err: ShapeError) -> KnotError {
        KnotError::Shape(err)
    }
}

/// Convert a [`KnotError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<KnotError> for PyErr {
    fn from(err: KnotError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` output embedding the offending payload.
    // - `From` conversions from the narrow errors into `KnotError`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Structure errors keep their payload when lifted into `KnotError`.
    //
    // Given
    // -----
    // - `StructureError::CountExceedsCapacity { nodes: 9, capacity: 7 }`.
    //
    // Expect
    // ------
    // - The converted error matches `KnotError::Structure(..)` and the message
    //   mentions both numbers.
    fn structure_error_converts_and_displays_payload() {
        let err: KnotError = StructureError::CountExceedsCapacity { nodes: 9, capacity: 7 }.into();

        assert!(matches!(err, KnotError::Structure(StructureError::CountExceedsCapacity { .. })));
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('7'));
    }

    #[test]
    // Purpose
    // -------
    // Shape errors convert into `KnotError::Shape`.
    //
    // Given
    // -----
    // - `ShapeError::NodeCountMismatch { x_nodes: 2, y_nodes: 3 }`.
    //
    // Expect
    // ------
    // - `KnotError::Shape(..)` with the same payload.
    fn shape_error_converts_into_knot_error() {
        let err: KnotError = ShapeError::NodeCountMismatch { x_nodes: 2, y_nodes: 3 }.into();

        assert_eq!(err, KnotError::Shape(ShapeError::NodeCountMismatch { x_nodes: 2, y_nodes: 3 }));
    }
}
