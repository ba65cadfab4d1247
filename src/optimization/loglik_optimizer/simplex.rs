//! Initial simplex construction for Nelder–Mead.
//!
//! The simplex has `d + 1` vertices for a `d`-dimensional `θ₀`: the starting
//! point itself plus one vertex per coordinate, where that coordinate is
//! perturbed relative to its magnitude (`θ_i (1 + simplex_step)`) or, when it
//! is exactly zero, by the absolute `zero_step`.
use crate::optimization::loglik_optimizer::{traits::FitOptions, types::Theta};

/// Build the `d + 1` starting vertices around `theta0`.
pub fn initial_simplex(theta0: &Theta, opts: &FitOptions) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[i] = if vertex[i] != 0.0 {
            vertex[i] * (1.0 + opts.simplex_step)
        } else {
            opts.zero_step
        };
        vertices.push(vertex);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Each non-origin vertex perturbs exactly one coordinate.
    //
    // Given
    // -----
    // - θ₀ = [2, 0] with default options.
    //
    // Expect
    // ------
    // - Three vertices: θ₀, [2.1, 0], [2, 0.00025].
    fn simplex_perturbs_one_coordinate_per_vertex() {
        let opts = FitOptions::default();
        let simplex = initial_simplex(&array![2.0, 0.0], &opts);

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex[0], array![2.0, 0.0]);
        assert_relative_eq!(simplex[1][0], 2.1);
        assert_eq!(simplex[1][1], 0.0);
        assert_eq!(simplex[2][0], 2.0);
        assert_relative_eq!(simplex[2][1], 0.00025);
    }
}
