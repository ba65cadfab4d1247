//! flexknot: flex-knot piecewise-linear models with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! flex-knot evaluation, likelihoods, and priors to Python via the
//! `_flexknot` extension module. A flex-knot is a piecewise-linear curve on
//! `[x_min, x_max]` whose node positions and values are free parameters, used
//! as a model-agnostic reconstruction in nested-sampling fits.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`knots`, `likelihoods`, `priors`,
//!   `optimization`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_flexknot` Python extension.
//! - Create and register Python submodules (`core`, `likelihoods`,
//!   `priors`) under `flexknot` so that dot-notation imports work as
//!   expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible classes mirror the call signatures of the inner types:
//!   curves are `knot(x, theta)`, likelihoods `likelihood(theta) -> (logL, [])`,
//!   priors `prior(hypercube) -> theta`.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_flexknot.<submodule>` and are
//!   re-exported by the pure-Python `flexknot` package.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration and property tests under `tests/`.

pub mod knots;
pub mod likelihoods;
pub mod optimization;
pub mod priors;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{IntoPyObjectExt, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    knots::{core::domain::Domain, core::mode::KnotMode, models::flexknot::FlexKnot},
    likelihoods::gaussian::FlexKnotLikelihood,
    optimization::loglik_optimizer::traits::OptimOutcome,
    priors::{AdaptiveKnotPrior, FlexKnotPrior, PriorTransform},
    utils::{extract_array1, extract_error_model, extract_fit_options},
};

/// Evaluate `knot` at a float or an array-like `x`, returning the same kind.
#[cfg(feature = "python-bindings")]
fn call_knot<'py>(
    py: Python<'py>, knot: &FlexKnot, x: &Bound<'py, PyAny>, theta: &Bound<'py, PyAny>,
) -> PyResult<PyObject> {
    let theta = extract_array1(py, theta, "theta")?;
    if let Ok(x) = x.extract::<f64>() {
        return knot.evaluate_at(x, theta.view())?.into_py_any(py);
    }
    let xs = extract_array1(py, x, "x")?;
    knot.evaluate(xs.view(), theta.view())?.to_vec().into_py_any(py)
}

#[cfg(feature = "python-bindings")]
fn knot_area<'py>(
    py: Python<'py>, knot: &FlexKnot, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    let theta0 = extract_array1(py, theta0, "theta0")?;
    let theta1 = extract_array1(py, theta1, "theta1")?;
    Ok(knot.area(theta0.view(), theta1.view())?)
}

#[cfg(feature = "python-bindings")]
fn knot_intersections<'py>(
    py: Python<'py>, knot: &FlexKnot, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    let theta0 = extract_array1(py, theta0, "theta0")?;
    let theta1 = extract_array1(py, theta1, "theta1")?;
    Ok(knot.intersections(theta0.view(), theta1.view())?.to_vec())
}

/// FlexKnot: Python-facing fixed-layout flex-knot.
///
/// Constructed from Python via `FlexKnot(x_min, x_max)` and called as
/// `knot(x, theta)` with `theta = [y0, x1, y1, …, x_(N-2), y_(N-2), y_(N-1)]`.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "FlexKnot", module = "flexknot.core")]
pub struct PyFlexKnot {
    pub inner: FlexKnot,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyFlexKnot {
    #[new]
    #[pyo3(text_signature = "(x_min, x_max, /)")]
    pub fn new(x_min: f64, x_max: f64) -> PyResult<Self> {
        Ok(PyFlexKnot { inner: FlexKnot::fixed(x_min, x_max)? })
    }

    pub fn __call__<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, theta: &Bound<'py, PyAny>,
    ) -> PyResult<PyObject> {
        call_knot(py, &self.inner, x, theta)
    }

    /// Area between the curves of `theta0` and `theta1`.
    pub fn area<'py>(
        &self, py: Python<'py>, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
    ) -> PyResult<f64> {
        knot_area(py, &self.inner, theta0, theta1)
    }

    /// Sorted x-coordinates where the two curves cross.
    pub fn intersections<'py>(
        &self, py: Python<'py>, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        knot_intersections(py, &self.inner, theta0, theta1)
    }

    #[getter]
    pub fn x_min(&self) -> f64 {
        self.inner.domain.x_min
    }

    #[getter]
    pub fn x_max(&self) -> f64 {
        self.inner.domain.x_max
    }
}

/// AdaptiveKnot: Python-facing adaptive flex-knot.
///
/// Same as `FlexKnot`, but `theta[0]` is the node count and only the first
/// `floor(theta[0])` nodes are used.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "AdaptiveKnot", module = "flexknot.core")]
pub struct PyAdaptiveKnot {
    pub inner: FlexKnot,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyAdaptiveKnot {
    #[new]
    #[pyo3(text_signature = "(x_min, x_max, /)")]
    pub fn new(x_min: f64, x_max: f64) -> PyResult<Self> {
        Ok(PyAdaptiveKnot { inner: FlexKnot::adaptive(x_min, x_max)? })
    }

    pub fn __call__<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, theta: &Bound<'py, PyAny>,
    ) -> PyResult<PyObject> {
        call_knot(py, &self.inner, x, theta)
    }

    pub fn area<'py>(
        &self, py: Python<'py>, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
    ) -> PyResult<f64> {
        knot_area(py, &self.inner, theta0, theta1)
    }

    pub fn intersections<'py>(
        &self, py: Python<'py>, theta0: &Bound<'py, PyAny>, theta1: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        knot_intersections(py, &self.inner, theta0, theta1)
    }
}

/// FlexKnotLikelihood: Python-facing Gaussian likelihood.
///
/// Purpose
/// -------
/// Score flex-knot thetas against data `(xs, ys)` with Gaussian errors, in
/// the `likelihood(theta) -> (logL, [])` form nested samplers call.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `FlexKnotLikelihood(x_min, x_max, xs, ys, sigma, adaptive=False)`:
/// - `sigma`: float (`sigma_y`), `[sigma_x, sigma_y]`, per-point
///   `[sigma_ys]`, or `[[sigma_xs], [sigma_ys]]`. A length-2 1-D sigma is
///   always read as `[sigma_x, sigma_y]`.
///
/// Notes
/// -----
/// - All validation happens in the constructor; calls only fail for a
///   malformed theta.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "FlexKnotLikelihood", module = "flexknot.likelihoods")]
pub struct PyFlexKnotLikelihood {
    pub inner: FlexKnotLikelihood,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyFlexKnotLikelihood {
    #[new]
    #[pyo3(
        signature = (x_min, x_max, xs, ys, sigma, adaptive = false),
        text_signature = "(x_min, x_max, xs, ys, sigma, /, adaptive=False)"
    )]
    pub fn new<'py>(
        py: Python<'py>, x_min: f64, x_max: f64, xs: &Bound<'py, PyAny>, ys: &Bound<'py, PyAny>,
        sigma: &Bound<'py, PyAny>, adaptive: bool,
    ) -> PyResult<Self> {
        let domain = Domain::new(x_min, x_max)?;
        let xs = extract_array1(py, xs, "xs")?;
        let ys = extract_array1(py, ys, "ys")?;
        let errors = extract_error_model(py, sigma)?;
        let inner =
            FlexKnotLikelihood::new(domain, xs, ys, errors, KnotMode::from_adaptive(adaptive))?;
        Ok(PyFlexKnotLikelihood { inner })
    }

    pub fn __call__<'py>(
        &self, py: Python<'py>, theta: &Bound<'py, PyAny>,
    ) -> PyResult<(f64, Vec<f64>)> {
        let theta = extract_array1(py, theta, "theta")?;
        Ok(self.inner.log_likelihood(theta.view())?)
    }

    /// Maximum-likelihood fit with Nelder–Mead.
    #[pyo3(
        signature = (
            theta0,
            simplex_step = None,
            zero_step = None,
            sd_tolerance = None,
            max_iter = None,
            verbose = None,
        ),
        text_signature = "(self, theta0, /, simplex_step=0.05, zero_step=0.00025, \
                          sd_tolerance=1e-10, max_iter=5000, verbose=False)"
    )]
    pub fn fit<'py>(
        &self, py: Python<'py>, theta0: &Bound<'py, PyAny>, simplex_step: Option<f64>,
        zero_step: Option<f64>, sd_tolerance: Option<f64>, max_iter: Option<usize>,
        verbose: Option<bool>,
    ) -> PyResult<PyOptimOutcome> {
        let theta0 = extract_array1(py, theta0, "theta0")?;
        let opts = extract_fit_options(simplex_step, zero_step, sd_tolerance, max_iter, verbose)?;
        let inner = self.inner.fit(theta0, &opts)?;
        Ok(PyOptimOutcome { inner })
    }
}

/// OptimOutcome: read-only fit diagnostics exposed to Python.
///
/// Instances are returned by `FlexKnotLikelihood.fit` and are not created
/// directly by user code.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "OptimOutcome", module = "flexknot.likelihoods")]
pub struct PyOptimOutcome {
    pub inner: OptimOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyOptimOutcome {
    #[getter]
    pub fn theta_hat(&self) -> Vec<f64> {
        self.inner.theta_hat.to_vec()
    }

    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// FlexKnotPrior: Python-facing fixed-layout prior,
/// `FlexKnotPrior(x_min, x_max, y_min, y_max)(hypercube) -> theta`.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "FlexKnotPrior", module = "flexknot.priors")]
pub struct PyFlexKnotPrior {
    pub inner: FlexKnotPrior,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyFlexKnotPrior {
    #[new]
    #[pyo3(text_signature = "(x_min, x_max, y_min, y_max, /)")]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PyResult<Self> {
        Ok(PyFlexKnotPrior { inner: FlexKnotPrior::new(x_min, x_max, y_min, y_max)? })
    }

    pub fn __call__<'py>(
        &self, py: Python<'py>, hypercube: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let hypercube = extract_array1(py, hypercube, "hypercube")?;
        Ok(self.inner.transform(hypercube.view())?.to_vec())
    }
}

/// AdaptiveKnotPrior: Python-facing adaptive prior,
/// `AdaptiveKnotPrior(x_min, x_max, y_min, y_max, N_min, N_max)`.
///
/// The hypercube has `2 N_max - 1` entries; the first becomes the node count.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "AdaptiveKnotPrior", module = "flexknot.priors")]
pub struct PyAdaptiveKnotPrior {
    pub inner: AdaptiveKnotPrior,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyAdaptiveKnotPrior {
    #[new]
    #[pyo3(text_signature = "(x_min, x_max, y_min, y_max, N_min, N_max, /)")]
    #[allow(non_snake_case)]
    pub fn new(
        x_min: f64, x_max: f64, y_min: f64, y_max: f64, N_min: usize, N_max: usize,
    ) -> PyResult<Self> {
        let inner = AdaptiveKnotPrior::new(x_min, x_max, y_min, y_max, N_min, N_max)?;
        Ok(PyAdaptiveKnotPrior { inner })
    }

    pub fn __call__<'py>(
        &self, py: Python<'py>, hypercube: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let hypercube = extract_array1(py, hypercube, "hypercube")?;
        Ok(self.inner.transform(hypercube.view())?.to_vec())
    }
}

/// _flexknot: PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `core`, `likelihoods`, and `priors` submodules.
/// - Attach those submodules to the parent `_flexknot` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _flexknot<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let core_mod = PyModule::new(_py, "core")?;
    let likelihoods_mod = PyModule::new(_py, "likelihoods")?;
    let priors_mod = PyModule::new(_py, "priors")?;
    core_submodule(_py, m, &core_mod)?;
    likelihoods_submodule(_py, m, &likelihoods_mod)?;
    priors_submodule(_py, m, &priors_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("flexknot.core", core_mod)?;
    modules.set_item("flexknot.likelihoods", likelihoods_mod)?;
    modules.set_item("flexknot.priors", priors_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn core_submodule<'py>(_py: Python, flexknot: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<PyFlexKnot>()?;
    m.add_class::<PyAdaptiveKnot>()?;
    flexknot.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn likelihoods_submodule<'py>(
    _py: Python, flexknot: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyFlexKnotLikelihood>()?;
    m.add_class::<PyOptimOutcome>()?;
    flexknot.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn priors_submodule<'py>(
    _py: Python, flexknot: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyFlexKnotPrior>()?;
    m.add_class::<PyAdaptiveKnotPrior>()?;
    flexknot.add_submodule(m)?;
    Ok(())
}
