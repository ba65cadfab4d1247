//! Integration tests for the flex-knot pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path a nested-sampling run takes: hypercube →
//!   prior → theta → likelihood, plus evaluation, geometry diagnostics, and a
//!   maximum-likelihood fit on the same thetas.
//! - Exercise fixed and adaptive layouts side by side.
//!
//! Coverage
//! --------
//! - `knots`: codec helpers, evaluation, intersections, and area on
//!   reference curves.
//! - `priors`: fixed and adaptive priors feeding valid thetas to the
//!   likelihood.
//! - `likelihoods`: y-only and x/y reference values through the public API.
//! - `optimization::loglik_optimizer`: fitting a noiseless three-node curve.
//!
//! Exclusions
//! ----------
//! - Python bindings; they are thin wrappers over the APIs used here.
//! - Randomized invariants; those live in `proptest_invariants.rs`.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use flexknot::{
    knots::{
        core::{
            domain::Domain,
            mode::KnotMode,
            theta::{active_slice, decode_x_nodes, decode_y_nodes, encode},
        },
        errors::{KnotError, StructureError},
        models::flexknot::FlexKnot,
    },
    likelihoods::{ErrorModel, FlexKnotLikelihood},
    optimization::{errors::OptError, loglik_optimizer::FitOptions},
    priors::{AdaptiveKnotPrior, FlexKnotPrior, PriorTransform},
};
use ndarray::{Array1, array};
use statrs::function::erf::erf;
use std::f64::consts::PI;

/// Noiseless samples of the tent `0 → 1 → 0` on `[0, 1]`, peak at 0.4.
fn tent_data(n: usize) -> (Array1<f64>, Array1<f64>) {
    let xs = Array1::linspace(0.0, 1.0, n);
    let ys = xs.mapv(|x| if x <= 0.4 { x / 0.4 } else { (1.0 - x) / 0.6 });
    (xs, ys)
}

#[test]
// Purpose
// -------
// The documented codec example decodes, reduces, and re-encodes.
//
// Given
// -----
// - Adaptive theta [5, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6].
//
// Expect
// ------
// - Active slice [0, 1, 1, 2, 2, 3, 3, 6]; x nodes [1, 2, 3];
//   y nodes [0, 1, 2, 3, 6]; `encode` gives back the active slice.
fn codec_reference_example() {
    let theta = array![5.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0];
    let active = active_slice(theta.view()).unwrap();
    assert_eq!(active, array![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 6.0]);

    let xs = decode_x_nodes(theta.view(), KnotMode::Adaptive).unwrap();
    let ys = decode_y_nodes(theta.view(), KnotMode::Adaptive).unwrap();
    assert_eq!(xs, array![1.0, 2.0, 3.0]);
    assert_eq!(ys, array![0.0, 1.0, 2.0, 3.0, 6.0]);
    assert_eq!(encode(xs.view(), ys.view()).unwrap(), active);
}

#[test]
// Purpose
// -------
// Evaluation and geometry agree on reference curves.
//
// Given
// -----
// - Lines [0, 1] and [1, 0] on [1, 2], evaluated at the domain edges and
//   outside it.
//
// Expect
// ------
// - Exact boundary values, clamping outside the domain, one crossing at
//   1.5, area 0.5, mean absolute difference 0.5.
fn evaluation_and_geometry_reference_curves() {
    let knot = FlexKnot::fixed(1.0, 2.0).unwrap();
    let up = array![0.0, 1.0];
    let down = array![1.0, 0.0];

    let values = knot.evaluate(array![0.0, 1.0, 1.25, 2.0, 3.0].view(), up.view()).unwrap();
    assert_eq!(values, array![0.0, 0.0, 0.25, 1.0, 1.0]);

    assert_eq!(knot.intersections(up.view(), down.view()).unwrap(), array![1.5]);
    assert_relative_eq!(knot.area(up.view(), down.view()).unwrap(), 0.5);
    assert_relative_eq!(knot.mean_absolute_difference(up.view(), down.view()).unwrap(), 0.5);
}

#[test]
// Purpose
// -------
// Prior samples are valid likelihood inputs in both layouts.
//
// Given
// -----
// - A grid of hypercubes for a fixed prior with three interior nodes and
//   an adaptive prior with 2..=5 nodes; tent data with y errors.
//
// Expect
// ------
// - Every theta decodes, has sorted active x-nodes inside the domain, and
//   yields a finite log-likelihood.
fn prior_samples_feed_likelihood() {
    let (xs, ys) = tent_data(15);
    let domain = Domain::new(0.0, 1.0).unwrap();
    let fixed = FlexKnotLikelihood::new(
        domain,
        xs.clone(),
        ys.clone(),
        ErrorModel::y_only(0.05),
        KnotMode::Fixed,
    )
    .unwrap();
    let adaptive =
        FlexKnotLikelihood::new(domain, xs, ys, ErrorModel::y_only(0.05), KnotMode::Adaptive)
            .unwrap();

    let fixed_prior = FlexKnotPrior::new(0.0, 1.0, -2.0, 2.0).unwrap();
    let adaptive_prior = AdaptiveKnotPrior::new(0.0, 1.0, -2.0, 2.0, 2, 5).unwrap();

    for step in 0..=10 {
        let u = step as f64 / 10.0;
        let cube: Array1<f64> = (0..9).map(|i| ((i as f64 * 0.37 + u) % 1.0)).collect();

        let theta = fixed_prior.transform(cube.slice(ndarray::s![..8])).unwrap();
        let x_nodes = decode_x_nodes(theta.view(), KnotMode::Fixed).unwrap();
        assert!(x_nodes.windows(2).into_iter().all(|w| w[0] <= w[1]));
        assert!(fixed.log_likelihood(theta.view()).unwrap().0.is_finite());

        let theta = adaptive_prior.transform(cube.view()).unwrap();
        assert!(theta[0] >= 2.0 && theta[0] < 6.0);
        let x_nodes = decode_x_nodes(theta.view(), KnotMode::Adaptive).unwrap();
        assert_eq!(x_nodes.len(), theta[0].floor() as usize - 2);
        assert!(x_nodes.windows(2).into_iter().all(|w| w[0] <= w[1]));
        assert!(x_nodes.iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert!(adaptive.log_likelihood(theta.view()).unwrap().0.is_finite());
    }
}

#[test]
// Purpose
// -------
// Reference likelihood values through the public API, including the
// array conventions for sigma.
//
// Given
// -----
// - Data (0, 0), (1, 1) on [0, 1], theta [0, 1]; sigma 1.0 and the flat
//   array [1, 1].
//
// Expect
// ------
// - `-ln(2π)` for y-only errors and
//   `ln((erf 1 - erf 0)(erf 0 - erf(-1)) / (16π))` for x/y errors.
fn likelihood_reference_values() {
    let domain = Domain::new(0.0, 1.0).unwrap();
    let theta = array![0.0, 1.0];

    let y_only = FlexKnotLikelihood::new(
        domain,
        array![0.0, 1.0],
        array![0.0, 1.0],
        ErrorModel::y_only(1.0),
        KnotMode::Fixed,
    )
    .unwrap();
    assert_relative_eq!(y_only.log_likelihood(theta.view()).unwrap().0, -(2.0 * PI).ln());

    let xy = FlexKnotLikelihood::new(
        domain,
        array![0.0, 1.0],
        array![0.0, 1.0],
        ErrorModel::from_flat(array![1.0, 1.0].view()),
        KnotMode::Fixed,
    )
    .unwrap();
    let expected = ((erf(1.0) - erf(0.0)) * (erf(0.0) - erf(-1.0)) / (16.0 * PI)).ln();
    assert_relative_eq!(xy.log_likelihood(theta.view()).unwrap().0, expected, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// A three-node flex-knot fit recovers a noiseless tent.
//
// Given
// -----
// - 21 tent samples with sigma_y = 0.05; start [0.05, 0.45, 0.9, 0.05].
//
// Expect
// ------
// - Fitted nodes within 1e-2 of (0, 0), (0.4, 1), (1, 0); the fitted
//   curve has near-zero area to the truth.
fn fit_recovers_tent() {
    let (xs, ys) = tent_data(21);
    let likelihood = FlexKnotLikelihood::new(
        Domain::new(0.0, 1.0).unwrap(),
        xs,
        ys,
        ErrorModel::y_only(0.05),
        KnotMode::Fixed,
    )
    .unwrap();

    let opts = FitOptions { max_iter: 20_000, ..FitOptions::default() };
    let out = likelihood.fit(array![0.05, 0.45, 0.9, 0.05], &opts).unwrap();

    let truth = array![0.0, 0.4, 1.0, 0.0];
    for (fitted, expected) in out.theta_hat.iter().zip(truth.iter()) {
        assert_abs_diff_eq!(*fitted, *expected, epsilon = 1e-2);
    }
    let area = likelihood.knot().area(out.theta_hat.view(), truth.view()).unwrap();
    assert!(area < 1e-2);
    assert!(out.value.is_finite());
}

#[test]
// Purpose
// -------
// Structure errors propagate unchanged through evaluation, likelihood, and
// fit.
//
// Given
// -----
// - An adaptive theta whose count exceeds its capacity.
//
// Expect
// ------
// - `CountExceedsCapacity` from `evaluate` and `log_likelihood`, and the
//   same error wrapped in `OptError::Model` from `fit`.
fn structure_errors_propagate() {
    let domain = Domain::new(0.0, 1.0).unwrap();
    let likelihood = FlexKnotLikelihood::new(
        domain,
        array![0.5],
        array![0.5],
        ErrorModel::y_only(1.0),
        KnotMode::Adaptive,
    )
    .unwrap();
    let theta = array![7.0, 0.0, 0.5, 0.5, 1.0];
    let expected =
        KnotError::Structure(StructureError::CountExceedsCapacity { nodes: 7, capacity: 3 });

    assert_eq!(
        likelihood.knot().evaluate(array![0.5].view(), theta.view()).unwrap_err(),
        expected
    );
    assert_eq!(likelihood.log_likelihood(theta.view()).unwrap_err(), expected);
    assert_eq!(
        likelihood.fit(theta, &FitOptions::default()).unwrap_err(),
        OptError::Model(expected)
    );
}
