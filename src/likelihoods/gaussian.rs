//! Gaussian log-likelihood of observed data under a flex-knot curve.
//!
//! Purpose
//! -------
//! Score a flex-knot parameter vector against data points `(x_i, y_i)` with
//! Gaussian measurement errors. This is the callable a nested sampler (or
//! [`FlexKnotLikelihood::fit`]) evaluates millions of times, so all data
//! validation happens once, in the constructor.
//!
//! Key behaviors
//! -------------
//! - y-only errors: the usual Gaussian likelihood of the residuals
//!   `y_i - f(x_i)`.
//! - x and y errors: for every point, the Gaussian in `(x, y)` is
//!   marginalised along each segment of the curve in closed form, assuming
//!   a uniform prior on the true x over the domain. Per point the segment
//!   contributions are combined with a weighted log-sum-exp.
//! - Adaptive thetas are reduced to their active nodes first.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data are non-empty, of equal length, and finite; sigmas are finite and
//!   positive with per-point arrays matching the data length.
//! - Malformed theta is the only failure at evaluation time
//!   (`KnotError::Structure`). Other degeneracies show up numerically:
//!   zero-width segments carry zero weight, and unsorted interior x-nodes can
//!   produce NaN or `-∞`.
//! - The second element of the returned pair is the (always empty) list of
//!   derived parameters expected by nested samplers.
use crate::{
    knots::{
        core::{
            domain::Domain, mode::KnotMode, nodes::Nodes, numerics::log_sum_exp_weighted,
            validation::validate_data,
        },
        errors::{KnotError, KnotResult},
        models::flexknot::FlexKnot,
    },
    likelihoods::sigma::{ErrorModel, Sigma},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{FitOptions, LogLikelihood, OptimOutcome, Theta, maximize},
    },
};
use ndarray::{Array1, ArrayView1};
use statrs::function::erf::erf;
use std::f64::consts::PI;

/// Log-likelihood of data under a flex-knot with Gaussian errors.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexKnotLikelihood {
    knot: FlexKnot,
    xs: Array1<f64>,
    ys: Array1<f64>,
    errors: ErrorModel,
}

impl FlexKnotLikelihood {
    /// Validate and capture the data and error model.
    ///
    /// Parameters
    /// ----------
    /// - `domain`: `Domain`
    ///   Interval `[x_min, x_max]` of the flex-knot.
    /// - `xs`, `ys`: `Array1<f64>`
    ///   Observed data, same length, finite.
    /// - `errors`: `ErrorModel`
    ///   y-only or x/y Gaussian errors, scalar or per point.
    /// - `mode`: `KnotMode`
    ///   Layout of the thetas that will be scored.
    ///
    /// Errors
    /// ------
    /// - `KnotError::EmptyData`, `KnotError::DataLengthMismatch`,
    ///   `KnotError::NonFiniteData` for bad data.
    /// - `KnotError::InvalidSigma`, `KnotError::SigmaLengthMismatch` for a
    ///   bad error model.
    pub fn new(
        domain: Domain, xs: Array1<f64>, ys: Array1<f64>, errors: ErrorModel, mode: KnotMode,
    ) -> KnotResult<Self> {
        validate_data(xs.view(), ys.view())?;
        errors.validate(xs.len())?;
        Ok(Self { knot: FlexKnot::new(domain, mode), xs, ys, errors })
    }

    pub fn knot(&self) -> &FlexKnot {
        &self.knot
    }

    pub fn xs(&self) -> ArrayView1<'_, f64> {
        self.xs.view()
    }

    pub fn ys(&self) -> ArrayView1<'_, f64> {
        self.ys.view()
    }

    pub fn error_model(&self) -> &ErrorModel {
        &self.errors
    }

    /// `(log L(theta), [])`.
    ///
    /// # Errors
    /// `KnotError::Structure` for a malformed theta.
    pub fn log_likelihood(&self, theta: ArrayView1<f64>) -> KnotResult<(f64, Vec<f64>)> {
        let reduced = self.knot.reduce(theta)?;
        let value = match &self.errors {
            ErrorModel::YOnly { sigma_y } => self.y_only(reduced.view(), sigma_y),
            ErrorModel::XY { sigma_x, sigma_y } => self.xy(reduced.view(), sigma_x, sigma_y),
        };
        Ok((value, Vec::new()))
    }

    /// Maximum-likelihood fit starting from `theta0`.
    ///
    /// # Errors
    /// Option or starting-point validation errors, and `OptError::Model` for
    /// a malformed `theta0`.
    pub fn fit(&self, theta0: Theta, opts: &FitOptions) -> OptResult<OptimOutcome> {
        maximize(self, theta0, opts)
    }

    fn y_only(&self, reduced: ArrayView1<f64>, sigma_y: &Sigma) -> f64 {
        let n = self.xs.len();
        let normalisation = match sigma_y {
            Sigma::Scalar(s) => -0.5 * n as f64 * (2.0 * PI * s * s).ln(),
            Sigma::PerPoint(values) => -0.5 * values.iter().map(|s| (2.0 * PI * s * s).ln()).sum::<f64>(),
        };
        let fitted = self.knot.evaluate_reduced(self.xs.view(), reduced);
        let chi2: f64 = self
            .ys
            .iter()
            .zip(fitted.iter())
            .enumerate()
            .map(|(i, (y, f))| (y - f).powi(2) / 2.0 / sigma_y.variance(i))
            .sum();
        normalisation - chi2
    }

    fn xy(&self, reduced: ArrayView1<f64>, sigma_x: &Sigma, sigma_y: &Sigma) -> f64 {
        let domain = self.knot.domain;
        let log_norm = 2f64.ln() + 0.5 * (2.0 * PI * domain.width()).ln();

        // y at the node abscissas comes from the evaluator, which also covers
        // the degenerate constant thetas.
        let mut nodes = Nodes::from_reduced(reduced, domain);
        nodes.y = self.knot.evaluate_reduced(nodes.x.view(), reduced);
        let segments: Vec<_> = nodes.segments().collect();

        let mut exponents = Vec::with_capacity(segments.len());
        let mut weights = Vec::with_capacity(segments.len());
        let mut total = 0.0;
        for (i, (&x, &y)) in self.xs.iter().zip(self.ys.iter()).enumerate() {
            let (sx, sy) = (sigma_x.sigma(i), sigma_y.sigma(i));
            let (var_x, var_y) = (sx * sx, sy * sy);
            exponents.clear();
            weights.clear();
            for seg in &segments {
                if seg.width() == 0.0 {
                    exponents.push(f64::NEG_INFINITY);
                    weights.push(0.0);
                    continue;
                }
                let m = seg.slope();
                let q = var_x * m * m + var_y;
                let delta = y - seg.intercept();
                let beta = (x * var_y + delta * m * var_x) / q;
                let gamma = (x * m - delta).powi(2) / 2.0 / q;
                let scale = (q / 2.0).sqrt() / (sx * sy);
                let t_minus = scale * (seg.x0 - beta);
                let t_plus = scale * (seg.x1 - beta);
                exponents.push(-gamma);
                weights.push(q.powf(-0.5) * (erf(t_plus) - erf(t_minus)));
            }
            total += log_sum_exp_weighted(&exponents, &weights);
        }
        -(self.xs.len() as f64) * log_norm + total
    }
}

impl LogLikelihood for FlexKnotLikelihood {
    /// Malformed thetas score `-∞` so a search that wanders outside the
    /// valid layout (e.g. an adaptive count past capacity) keeps going.
    fn value(&self, theta: &Theta) -> OptResult<f64> {
        match self.log_likelihood(theta.view()) {
            Ok((value, _)) => Ok(value),
            Err(KnotError::Structure(_)) => Ok(f64::NEG_INFINITY),
            Err(err) => Err(err.into()),
        }
    }

    fn check(&self, theta: &Theta) -> OptResult<()> {
        self.knot.reduce(theta.view()).map_err(KnotError::from)?;
        Ok(())
    }
}
