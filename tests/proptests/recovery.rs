//! Property tests for majority-vote recovery

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamvote::recover::{SecretRecoverer, recover};
use shamvote::subsets::{binomial, subsets};
use shamvote::{Point, Threshold};

use crate::support::{Polynomial, ShareSet, distinct_xs};

/// A line sampled at 4..=8 positions with exactly one corrupted share
#[derive(Clone, Debug)]
struct LineWithCorruption {
    polynomial: Polynomial,
    points: Vec<Point>,
}

impl Arbitrary for LineWithCorruption {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut polynomial = Polynomial::arbitrary(g);
        polynomial.coefficients.truncate(2);
        while polynomial.coefficients.len() < 2 {
            polynomial.coefficients.push(1.into());
        }

        let count = usize::arbitrary(g) % 5 + 4;
        let xs = distinct_xs(g, count);
        let mut points = polynomial.shares(&xs);

        let victim = usize::arbitrary(g) % count;
        let delta = i64::from(i16::arbitrary(g)).max(1);
        let bad = &points[victim];
        let corrupted = Point::new(bad.x().clone(), bad.y() + BigInt::from(delta));
        points[victim] = corrupted;

        LineWithCorruption { polynomial, points }
    }
}

/// Without corruption every combination agrees on the secret
#[quickcheck]
fn prop_clean_shares_unanimous(set: ShareSet) -> bool {
    let k = set.polynomial.threshold();
    let points = set.polynomial.shares(&set.xs);
    let result = recover(&points, Threshold::new(k).unwrap())
        .unwrap()
        .into_result()
        .unwrap();

    result.secret == *set.polynomial.secret()
        && result.supporting_combinations == result.total_combinations
        && BigUint::from(result.total_combinations) == binomial(points.len(), k)
}

/// One corrupted share among at least four cannot outvote a line
#[quickcheck]
fn prop_single_corruption_outvoted(set: LineWithCorruption) -> bool {
    let n = set.points.len();
    let result = recover(&set.points, Threshold::new(2).unwrap())
        .unwrap()
        .into_result()
        .unwrap();

    result.secret == *set.polynomial.secret()
        && BigUint::from(result.supporting_combinations) == binomial(n - 1, 2)
}

/// Parallel evaluation reaches the same verdict as sequential evaluation
#[quickcheck]
fn prop_parallel_matches_sequential(set: LineWithCorruption, k_seed: u8) -> bool {
    let k = usize::from(k_seed) % set.points.len() + 1;
    let recoverer = SecretRecoverer::new(Threshold::new(k).unwrap());

    recoverer.recover(&set.points) == recoverer.clone().parallel(true).recover(&set.points)
}

/// Enumeration yields C(n, k) distinct, order-preserving subsets
#[quickcheck]
fn prop_subsets_complete(n_seed: u8, k_seed: u8) -> bool {
    let n = usize::from(n_seed % 12);
    let k = usize::from(k_seed % 14);
    let items: Vec<usize> = (0..n).collect();

    let all: Vec<Vec<usize>> = subsets(&items, k)
        .map(|subset| subset.into_iter().copied().collect())
        .collect();

    let increasing = all
        .iter()
        .all(|subset| subset.len() == k && subset.windows(2).all(|w| w[0] < w[1]));
    let mut unique = all.clone();
    unique.dedup();

    increasing && unique.len() == all.len() && BigUint::from(all.len()) == binomial(n, k)
}
