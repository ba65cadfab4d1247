//! Property tests for flex-knot invariants.
//!
//! Purpose
//! -------
//! - Check the structural guarantees that every caller relies on over
//!   randomly generated thetas and hypercubes, rather than a handful of
//!   hand-picked cases.
//!
//! Coverage
//! --------
//! - Codec: `encode` followed by `decode_*` returns the inputs.
//! - Adaptive mode: evaluation equals evaluation of the active slice.
//! - Evaluation: exact end-node values at the domain boundaries.
//! - Geometry: symmetry, self-distance zero, non-negative area.
//! - Priors: sorted-uniform output is ordered and inside its bounds; fixed
//!   and adaptive knot priors decode to ordered x-nodes inside the domain.
use flexknot::{
    knots::{
        core::{
            mode::KnotMode,
            theta::{active_slice, decode_x_nodes, decode_y_nodes, encode},
        },
        models::flexknot::FlexKnot,
    },
    priors::{AdaptiveKnotPrior, FlexKnotPrior, PriorTransform, SortedUniformPrior},
};
use ndarray::Array1;
use proptest::{collection::vec, prelude::*};

const X_MIN: f64 = -1.0;
const X_MAX: f64 = 3.0;

/// Sorted interior x-nodes inside the domain plus matching y-nodes.
fn nodes() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..6).prop_flat_map(|n| (vec(X_MIN..X_MAX, n), vec(-5.0f64..5.0, n + 2))).prop_map(
        |(mut xs, ys)| {
            xs.sort_by(f64::total_cmp);
            (xs, ys)
        },
    )
}

/// Fixed-layout theta built from sorted nodes.
fn fixed_theta() -> impl Strategy<Value = Array1<f64>> {
    nodes().prop_map(|(xs, ys)| {
        encode(Array1::from(xs).view(), Array1::from(ys).view()).unwrap_or_else(|_| Array1::zeros(0))
    })
}

/// Adaptive theta with `n_max` slots and a count in `[0, n_max + 1)`.
fn adaptive_theta() -> impl Strategy<Value = Array1<f64>> {
    (2usize..6).prop_flat_map(|n_max| {
        (0.0..(n_max as f64 + 1.0), vec(-5.0f64..5.0, 2 * n_max - 2)).prop_map(|(count, tail)| {
            let mut theta = vec![count];
            theta.extend(tail);
            Array1::from(theta)
        })
    })
}

/// Unit hypercube for a fixed prior with `n` interior nodes.
fn fixed_cube() -> impl Strategy<Value = Vec<f64>> {
    (0usize..6).prop_flat_map(|n| vec(0.0f64..=1.0, 2 * n + 2))
}

/// `n_max` together with a unit hypercube of length `2 n_max - 1`.
fn adaptive_cube() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (2usize..7).prop_flat_map(|n_max| (Just(n_max), vec(0.0f64..=1.0, 2 * n_max - 1)))
}

proptest! {
    #[test]
    fn encode_then_decode_returns_nodes((xs, ys) in nodes()) {
        let theta = encode(Array1::from(xs.clone()).view(), Array1::from(ys.clone()).view()).unwrap();
        prop_assert_eq!(theta.len(), xs.len() + ys.len());
        prop_assert_eq!(decode_x_nodes(theta.view(), KnotMode::Fixed).unwrap().to_vec(), xs);
        prop_assert_eq!(decode_y_nodes(theta.view(), KnotMode::Fixed).unwrap().to_vec(), ys);
    }

    #[test]
    fn adaptive_evaluation_matches_active_slice(
        theta in adaptive_theta(),
        points in vec(-2.0f64..4.0, 1..20),
    ) {
        let adaptive = FlexKnot::adaptive(X_MIN, X_MAX).unwrap();
        let fixed = FlexKnot::fixed(X_MIN, X_MAX).unwrap();
        let points = Array1::from(points);
        let active = active_slice(theta.view()).unwrap();

        let a = adaptive.evaluate(points.view(), theta.view()).unwrap();
        let f = fixed.evaluate(points.view(), active.view()).unwrap();
        for (x, y) in a.iter().zip(f.iter()) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn boundaries_hit_end_nodes_exactly((xs, ys) in nodes()) {
        prop_assume!(ys.len() >= 2);
        let knot = FlexKnot::fixed(X_MIN, X_MAX).unwrap();
        let theta = encode(Array1::from(xs).view(), Array1::from(ys.clone()).view()).unwrap();

        prop_assert_eq!(knot.evaluate_at(X_MIN, theta.view()).unwrap(), ys[0]);
        prop_assert_eq!(knot.evaluate_at(X_MAX, theta.view()).unwrap(), ys[ys.len() - 1]);
    }

    #[test]
    fn area_is_symmetric_and_non_negative(a in fixed_theta(), b in fixed_theta()) {
        let knot = FlexKnot::fixed(X_MIN, X_MAX).unwrap();

        let ab = knot.area(a.view(), b.view()).unwrap();
        let ba = knot.area(b.view(), a.view()).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(knot.area(a.view(), a.view()).unwrap(), 0.0);

        let crossings = knot.intersections(a.view(), b.view()).unwrap();
        prop_assert_eq!(&crossings, &knot.intersections(b.view(), a.view()).unwrap());
        prop_assert!(crossings.iter().all(|&x| X_MIN < x && x < X_MAX));
    }

    #[test]
    fn sorted_uniform_prior_is_ordered(cube in vec(0.0f64..=1.0, 0..12)) {
        let prior = SortedUniformPrior::new(-2.0, 7.0).unwrap();
        let out = prior.transform(Array1::from(cube).view()).unwrap();

        prop_assert!(out.windows(2).into_iter().all(|w| w[0] <= w[1]));
        prop_assert!(out.iter().all(|&v| (-2.0..=7.0).contains(&v)));
    }

    #[test]
    fn flex_knot_prior_orders_x_nodes(cube in fixed_cube()) {
        let prior = FlexKnotPrior::new(X_MIN, X_MAX, -5.0, 5.0).unwrap();
        let theta = prior.transform(Array1::from(cube.clone()).view()).unwrap();
        prop_assert_eq!(theta.len(), cube.len());

        let xs = decode_x_nodes(theta.view(), KnotMode::Fixed).unwrap();
        prop_assert!(xs.windows(2).into_iter().all(|w| w[0] <= w[1]));
        prop_assert!(xs.iter().all(|&x| (X_MIN..=X_MAX).contains(&x)));
        let ys = decode_y_nodes(theta.view(), KnotMode::Fixed).unwrap();
        prop_assert!(ys.iter().all(|&y| (-5.0..=5.0).contains(&y)));
    }

    #[test]
    fn adaptive_knot_prior_orders_active_x_nodes((n_max, cube) in adaptive_cube()) {
        let prior = AdaptiveKnotPrior::new(X_MIN, X_MAX, -5.0, 5.0, 0, n_max).unwrap();
        let theta = prior.transform(Array1::from(cube).view()).unwrap();
        prop_assert_eq!(theta.len(), 2 * n_max - 1);
        prop_assert!(theta[0] >= 0.0 && theta[0] < (n_max + 1) as f64);

        let xs = decode_x_nodes(theta.view(), KnotMode::Adaptive).unwrap();
        prop_assert!(xs.windows(2).into_iter().all(|w| w[0] <= w[1]));
        prop_assert!(xs.iter().all(|&x| (X_MIN..=X_MAX).contains(&x)));
    }
}
