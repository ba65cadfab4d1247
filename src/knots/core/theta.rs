//! Theta codec: interleaved parameter vectors ⇄ separate knot arrays.
//!
//! Purpose
//! -------
//! Convert between the flat theta layout consumed by samplers and the two
//! node arrays used everywhere else in the crate. This is the only module that
//! knows about the interleaved layout; downstream code works on decoded
//! [`Nodes`](crate::knots::core::nodes::Nodes) or on the reduced, non-adaptive
//! theta returned by [`reduce`].
//!
//! Key behaviors
//! -------------
//! - [`validate_theta`] checks parity and (adaptive) the count parameter.
//! - [`active_slice`] reduces an adaptive theta to its active non-adaptive
//!   sub-vector; [`reduce`] dispatches on [`KnotMode`].
//! - [`decode_x_nodes`] / [`decode_y_nodes`] split a theta into interior
//!   x-nodes and the full list of y-nodes.
//! - [`encode`] interleaves node arrays back into a theta.
//!
//! Invariants & assumptions
//! ------------------------
//! - Non-adaptive layout for N nodes:
//!   `[y0, x1, y1, …, x_(N-2), y_(N-2), y_(N-1)]`, length `2N - 2`.
//! - Adaptive layout: `[count, y0, x1, y1, …, y_(Nmax-1)]`, length
//!   `2 Nmax - 1`, with `floor(count)` active nodes.
//! - Length 0 is the constant −1 and length 1 is the constant `theta[0]`.
//! - Interior x-nodes are *not* checked for order or range here.
//!
//! Conventions
//! -----------
//! - Inputs are borrowed as `ArrayView1<f64>`; outputs are freshly allocated
//!   `Array1<f64>`. Theta vectors are never mutated in place.
use crate::knots::{
    core::{adaptive::AdaptiveTheta, mode::KnotMode},
    errors::{ShapeError, StructureError},
};
use ndarray::{Array1, ArrayView1, s};

/// Check that `theta` is structurally valid for `mode`.
///
/// Parameters
/// ----------
/// - `theta`: `ArrayView1<f64>`
///   Candidate parameter vector.
/// - `mode`: `KnotMode`
///   Layout to check against.
///
/// Returns
/// -------
/// `Result<(), StructureError>`
///   - `Ok(())` if the layout is consistent.
///
/// Errors
/// ------
/// - `StructureError::OddLength`
///   Fixed mode with a length greater than 1 that is odd.
/// - `StructureError::EvenLength`
///   Adaptive mode with an even, non-zero length.
/// - `StructureError::MissingCount`
///   Adaptive mode with an empty vector.
/// - `StructureError::InvalidCount`
///   Adaptive count is NaN, ±∞, or negative.
/// - `StructureError::CountExceedsCapacity`
///   `floor(count)` is larger than `(len + 1) / 2`.
///
/// Notes
/// -----
/// - Values other than the adaptive count are not inspected; non-finite
///   node coordinates propagate numerically.
pub fn validate_theta(theta: ArrayView1<f64>, mode: KnotMode) -> Result<(), StructureError> {
    match mode {
        KnotMode::Fixed => {
            if theta.len() > 1 && theta.len() % 2 != 0 {
                return Err(StructureError::OddLength { len: theta.len() });
            }
            Ok(())
        }
        KnotMode::Adaptive => AdaptiveTheta::new(theta).map(|_| ()),
    }
}

/// Reduce an adaptive theta to the non-adaptive theta of its active nodes.
///
/// With `n = floor(count) - 2` this returns
/// `concat(theta[1 .. 2n + 2], theta[-1..])`, the empty vector when
/// `floor(count) == 0`, and `[theta[-1]]` when `floor(count) == 1`.
///
/// # Errors
/// Any [`StructureError`] raised by [`validate_theta`] in adaptive mode.
///
/// # Examples
/// ```rust
/// # use flexknot::knots::core::theta::active_slice;
/// # use ndarray::array;
/// let theta = array![5.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0];
/// let active = active_slice(theta.view()).unwrap();
/// assert_eq!(active, array![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 6.0]);
/// ```
pub fn active_slice(theta: ArrayView1<f64>) -> Result<Array1<f64>, StructureError> {
    Ok(AdaptiveTheta::new(theta)?.reduce())
}

/// Validate `theta` and return its non-adaptive form.
///
/// Fixed mode returns an owned copy; adaptive mode returns [`active_slice`].
pub fn reduce(theta: ArrayView1<f64>, mode: KnotMode) -> Result<Array1<f64>, StructureError> {
    match mode {
        KnotMode::Fixed => {
            validate_theta(theta, mode)?;
            Ok(theta.to_owned())
        }
        KnotMode::Adaptive => active_slice(theta),
    }
}

/// Interior x-nodes `[x1, …, x_(N-2)]` of `theta`.
///
/// Degenerate thetas (length 0 or 1) have no interior nodes.
///
/// # Errors
/// Any [`StructureError`] from [`validate_theta`].
pub fn decode_x_nodes(theta: ArrayView1<f64>, mode: KnotMode) -> Result<Array1<f64>, StructureError> {
    let reduced = reduce(theta, mode)?;
    Ok(interior_x(reduced.view()))
}

/// Full y-node list `[y0, y1, …, y_(N-1)]` of `theta`.
///
/// Length 0 decodes to `[]`, length 1 to `[theta[0]]`.
///
/// # Errors
/// Any [`StructureError`] from [`validate_theta`].
pub fn decode_y_nodes(theta: ArrayView1<f64>, mode: KnotMode) -> Result<Array1<f64>, StructureError> {
    let reduced = reduce(theta, mode)?;
    Ok(all_y(reduced.view()))
}

/// Interleave node arrays into a non-adaptive theta.
///
/// Parameters
/// ----------
/// - `x_nodes`: `ArrayView1<f64>`
///   Interior x-nodes `[x1, …, x_(N-2)]`.
/// - `y_nodes`: `ArrayView1<f64>`
///   All y-nodes `[y0, …, y_(N-1)]`.
///
/// Returns
/// -------
/// `Result<Array1<f64>, ShapeError>`
///   - `[y0, x1, y1, …, x_(N-2), y_(N-2), y_(N-1)]`.
///   - `y_nodes` unchanged when it has exactly one element (constant curve),
///     whatever `x_nodes` holds.
///
/// Errors
/// ------
/// - `ShapeError::NodeCountMismatch`
///   `len(y_nodes) != len(x_nodes) + 2` outside the single-y case.
pub fn encode(x_nodes: ArrayView1<f64>, y_nodes: ArrayView1<f64>) -> Result<Array1<f64>, ShapeError> {
    if y_nodes.len() == 1 {
        return Ok(y_nodes.to_owned());
    }
    if x_nodes.len() + 2 != y_nodes.len() {
        return Err(ShapeError::NodeCountMismatch {
            x_nodes: x_nodes.len(),
            y_nodes: y_nodes.len(),
        });
    }
    let n = x_nodes.len();
    let mut theta = Array1::<f64>::zeros(2 * n + 2);
    for i in 0..=n {
        theta[2 * i] = y_nodes[i];
    }
    for (i, &x) in x_nodes.iter().enumerate() {
        theta[2 * i + 1] = x;
    }
    theta[2 * n + 1] = y_nodes[n + 1];
    Ok(theta)
}

/// Interior x's of an already reduced, non-adaptive theta.
pub(crate) fn interior_x(reduced: ArrayView1<f64>) -> Array1<f64> {
    match interior_count(reduced.len()) {
        Some(n) if n > 0 => reduced.slice(s![1..(2 * n + 1);2]).to_owned(),
        _ => Array1::zeros(0),
    }
}

/// All y's of an already reduced, non-adaptive theta.
pub(crate) fn all_y(reduced: ArrayView1<f64>) -> Array1<f64> {
    match interior_count(reduced.len()) {
        Some(n) => {
            let mut ys: Vec<f64> = reduced.slice(s![0..(2 * n + 2);2]).to_vec();
            ys.push(reduced[reduced.len() - 1]);
            Array1::from(ys)
        }
        None => reduced.to_owned(),
    }
}

// `len / 2 - 1` for lengths of at least 2; `None` for the degenerate lengths.
fn interior_count(len: usize) -> Option<usize> {
    if len < 2 { None } else { Some(len / 2 - 1) }
}
