//! Gaussian error models for flex-knot likelihoods.
//!
//! Purpose
//! -------
//! Describe the measurement errors attached to observed data: either y-errors
//! only, or independent Gaussian errors in both coordinates. Each standard
//! deviation is a scalar shared by all points or a per-point array.
//!
//! Key behaviors
//! -------------
//! - [`Sigma`] stores one standard deviation or one per observation and
//!   answers `sigma(i)` / `variance(i)` uniformly.
//! - [`ErrorModel`] selects the y-only or the x/y likelihood branch.
//! - [`ErrorModel::from_flat`] and [`ErrorModel::from_rows`] implement the
//!   array conventions used at the Python boundary:
//!   - 1-D of length 2 → `[sigma_x, sigma_y]` scalars,
//!   - other 1-D → per-point `sigma_y`,
//!   - 2-D with two rows → per-point `sigma_x` and `sigma_y`.
//!
//! Invariants & assumptions
//! ------------------------
//! - After [`ErrorModel::validate`] every sigma is finite and strictly
//!   positive, and per-point arrays match the number of observations.
//! - A 1-D array of length 2 is always read as `[sigma_x, sigma_y]`, even
//!   for two observations.
use crate::knots::{
    core::validation::{validate_sigmas, verify_sigma},
    errors::{KnotError, KnotResult},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Standard deviation shared by all observations or given per observation.
#[derive(Debug, Clone, PartialEq)]
pub enum Sigma {
    Scalar(f64),
    PerPoint(Array1<f64>),
}

impl Sigma {
    /// Standard deviation of observation `i`.
    ///
    /// # Panics
    /// For `PerPoint` with `i` out of bounds; validated models never do this.
    pub fn sigma(&self, i: usize) -> f64 {
        match self {
            Sigma::Scalar(s) => *s,
            Sigma::PerPoint(values) => values[i],
        }
    }

    /// Variance of observation `i`.
    pub fn variance(&self, i: usize) -> f64 {
        let s = self.sigma(i);
        s * s
    }

    /// Check finiteness, positivity, and (per-point) length `n`.
    ///
    /// # Errors
    /// `KnotError::InvalidSigma` or `KnotError::SigmaLengthMismatch`.
    pub fn validate(&self, n: usize) -> KnotResult<()> {
        match self {
            Sigma::Scalar(s) => verify_sigma(*s, 0).map(|_| ()),
            Sigma::PerPoint(values) => validate_sigmas(values.view(), n),
        }
    }
}

impl From<f64> for Sigma {
    fn from(value: f64) -> Self {
        Sigma::Scalar(value)
    }
}

impl From<Array1<f64>> for Sigma {
    fn from(values: Array1<f64>) -> Self {
        Sigma::PerPoint(values)
    }
}

/// Measurement-error model of the observed data.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorModel {
    /// Gaussian errors on y only.
    YOnly { sigma_y: Sigma },
    /// Independent Gaussian errors on x and y.
    XY { sigma_x: Sigma, sigma_y: Sigma },
}

impl ErrorModel {
    /// y-only errors.
    pub fn y_only(sigma_y: impl Into<Sigma>) -> Self {
        ErrorModel::YOnly { sigma_y: sigma_y.into() }
    }

    /// Errors in both coordinates.
    pub fn xy(sigma_x: impl Into<Sigma>, sigma_y: impl Into<Sigma>) -> Self {
        ErrorModel::XY { sigma_x: sigma_x.into(), sigma_y: sigma_y.into() }
    }

    /// Interpret a 1-D sigma array.
    ///
    /// Length 2 means `[sigma_x, sigma_y]`; any other length is a per-point
    /// `sigma_y`.
    pub fn from_flat(sigma: ArrayView1<f64>) -> Self {
        if sigma.len() == 2 {
            ErrorModel::xy(sigma[0], sigma[1])
        } else {
            ErrorModel::y_only(sigma.to_owned())
        }
    }

    /// Interpret a 2-D sigma array `[[sigma_x...], [sigma_y...]]`.
    ///
    /// # Errors
    /// `KnotError::SigmaLengthMismatch` unless there are exactly two rows
    /// (`expected` is the required row count, `actual` the given one).
    pub fn from_rows(sigma: ArrayView2<f64>) -> KnotResult<Self> {
        if sigma.nrows() != 2 {
            return Err(KnotError::SigmaLengthMismatch { expected: 2, actual: sigma.nrows() });
        }
        Ok(ErrorModel::xy(sigma.row(0).to_owned(), sigma.row(1).to_owned()))
    }

    /// [`ErrorModel::from_rows`] over a row-major buffer of shape
    /// `(nrows, ncols)`.
    ///
    /// Used when the 2-D data comes from a container whose array type is not
    /// this crate's (numpy views, nested sequences).
    ///
    /// # Errors
    /// `KnotError::SigmaLengthMismatch` when `values` does not hold
    /// `nrows * ncols` entries or when there are not exactly two rows.
    pub fn from_row_major(shape: (usize, usize), values: Vec<f64>) -> KnotResult<Self> {
        let expected = shape.0 * shape.1;
        let actual = values.len();
        let rows = Array2::from_shape_vec(shape, values)
            .map_err(|_| KnotError::SigmaLengthMismatch { expected, actual })?;
        Self::from_rows(rows.view())
    }

    /// `true` when x-errors are modelled.
    pub fn has_x_errors(&self) -> bool {
        matches!(self, ErrorModel::XY { .. })
    }

    /// Validate every sigma against `n` observations.
    ///
    /// # Errors
    /// `KnotError::InvalidSigma` or `KnotError::SigmaLengthMismatch`.
    pub fn validate(&self, n: usize) -> KnotResult<()> {
        match self {
            ErrorModel::YOnly { sigma_y } => sigma_y.validate(n),
            ErrorModel::XY { sigma_x, sigma_y } => {
                sigma_x.validate(n)?;
                sigma_y.validate(n)
            }
        }
    }
}
