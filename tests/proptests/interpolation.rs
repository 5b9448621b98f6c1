//! Property tests for exact interpolation

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamvote::Point;
use shamvote::interpolate::evaluate_at_zero;

use crate::support::{Polynomial, distinct_xs};

/// Exactly `threshold` shares of a random polynomial
#[derive(Clone, Debug)]
struct MinimalShares {
    polynomial: Polynomial,
    points: Vec<Point>,
}

impl Arbitrary for MinimalShares {
    fn arbitrary(g: &mut Gen) -> Self {
        let polynomial = Polynomial::arbitrary(g);
        let xs = distinct_xs(g, polynomial.threshold());
        let points = polynomial.shares(&xs);
        MinimalShares { polynomial, points }
    }
}

/// k shares recover the constant term exactly
#[quickcheck]
fn prop_interpolation_recovers_constant(shares: MinimalShares) -> bool {
    evaluate_at_zero(&shares.points).unwrap() == *shares.polynomial.secret()
}

/// The result is independent of share order
#[quickcheck]
fn prop_interpolation_order_invariant(shares: MinimalShares, rotation: usize) -> bool {
    let expected = evaluate_at_zero(&shares.points).unwrap();

    let mut reversed = shares.points.clone();
    reversed.reverse();

    let mut rotated = shares.points.clone();
    let len = rotated.len();
    rotated.rotate_left(rotation % len);

    evaluate_at_zero(&reversed).unwrap() == expected
        && evaluate_at_zero(&rotated).unwrap() == expected
}

/// Repeating any x coordinate is always rejected
#[quickcheck]
fn prop_duplicate_abscissa_rejected(shares: MinimalShares, pick: usize) -> bool {
    let mut points = shares.points.clone();
    let copied = points[pick % points.len()].clone();
    points.push(Point::new(copied.x().clone(), copied.y() + BigInt::from(1)));

    evaluate_at_zero(&points).is_err()
}
