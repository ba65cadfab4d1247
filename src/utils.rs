//! Conversion helpers for the Python boundary.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! turns Python objects (floats, sequences, numpy arrays, pandas Series) into
//! the crate's `ndarray`-based types.
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    likelihoods::sigma::ErrorModel,
    optimization::loglik_optimizer::{
        FitOptions,
        types::{DEFAULT_MAX_ITER, DEFAULT_SD_TOLERANCE, DEFAULT_SIMPLEX_STEP, DEFAULT_ZERO_STEP},
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a 1-D array-like into an owned `Array1<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_array1<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

/// Read `sigma` the way flex-knot likelihoods accept it.
///
/// - float → `sigma_y` for every point,
/// - 2-D array or nested sequence → rows `[sigma_xs, sigma_ys]`,
/// - 1-D of length 2 → `[sigma_x, sigma_y]`,
/// - other 1-D → per-point `sigma_y`.
#[cfg(feature = "python-bindings")]
pub fn extract_error_model<'py>(
    py: Python<'py>, sigma: &Bound<'py, PyAny>,
) -> PyResult<ErrorModel> {
    if let Ok(value) = sigma.extract::<f64>() {
        return Ok(ErrorModel::y_only(value));
    }
    if let Ok(rows) = sigma.extract::<PyReadonlyArray2<f64>>() {
        // numpy's view type comes from its own ndarray; copy into ours.
        let view = rows.as_array();
        let shape = (view.nrows(), view.ncols());
        return Ok(ErrorModel::from_row_major(shape, view.iter().copied().collect())?);
    }
    if let Ok(rows) = sigma.extract::<Vec<Vec<f64>>>() {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(PyValueError::new_err("sigma rows must all have the same length"));
        }
        let shape = (rows.len(), ncols);
        return Ok(ErrorModel::from_row_major(shape, rows.into_iter().flatten().collect())?);
    }
    let flat = extract_array1(py, sigma, "sigma")?;
    Ok(ErrorModel::from_flat(flat.view()))
}

/// Build validated fit options, falling back to the defaults.
#[cfg(feature = "python-bindings")]
pub fn extract_fit_options(
    simplex_step: Option<f64>, zero_step: Option<f64>, sd_tolerance: Option<f64>,
    max_iter: Option<usize>, verbose: Option<bool>,
) -> PyResult<FitOptions> {
    let opts = FitOptions::new(
        simplex_step.unwrap_or(DEFAULT_SIMPLEX_STEP),
        zero_step.unwrap_or(DEFAULT_ZERO_STEP),
        sd_tolerance.unwrap_or(DEFAULT_SD_TOLERANCE),
        max_iter.unwrap_or(DEFAULT_MAX_ITER),
        verbose.unwrap_or(false),
    )?;
    Ok(opts)
}
