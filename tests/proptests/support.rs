//! Shared generators for property tests

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use shamvote::Point;

/// Random polynomial with small integer coefficients, degree 0..=3
#[derive(Clone, Debug)]
pub struct Polynomial {
    pub coefficients: Vec<BigInt>,
}

impl Polynomial {
    pub fn secret(&self) -> &BigInt {
        &self.coefficients[0]
    }

    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Horner evaluation
    pub fn eval(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    pub fn shares(&self, xs: &[i64]) -> Vec<Point> {
        xs.iter()
            .map(|&x| {
                let x = BigInt::from(x);
                let y = self.eval(&x);
                Point::new(x, y)
            })
            .collect()
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let degree = usize::arbitrary(g) % 4;
        let coefficients = (0..=degree)
            .map(|_| BigInt::from(i32::arbitrary(g)))
            .collect();
        Polynomial { coefficients }
    }
}

/// `count` distinct non-zero x coordinates
pub fn distinct_xs(g: &mut Gen, count: usize) -> Vec<i64> {
    let mut xs = BTreeSet::new();
    while xs.len() < count {
        let x = i64::from(i16::arbitrary(g));
        if x != 0 {
            xs.insert(x);
        }
    }
    xs.into_iter().collect()
}

/// A polynomial together with `threshold + extra` share positions
#[derive(Clone, Debug)]
pub struct ShareSet {
    pub polynomial: Polynomial,
    pub xs: Vec<i64>,
}

impl Arbitrary for ShareSet {
    fn arbitrary(g: &mut Gen) -> Self {
        let polynomial = Polynomial::arbitrary(g);
        let extra = usize::arbitrary(g) % 4;
        let xs = distinct_xs(g, polynomial.threshold() + extra);
        ShareSet { polynomial, xs }
    }
}
