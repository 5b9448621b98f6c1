//! Lagrange interpolation at x = 0 in exact rational arithmetic
//!
//! For points `(x_i, y_i)` the constant term of the unique interpolating
//! polynomial is
//!
//! ```text
//! f(0) = Σ_i y_i · L_i(0),   L_i(0) = Π_{j ≠ i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Each basis value is accumulated as an integer numerator and denominator
//! and reduced once, then summed into a running [`Fraction`].

use std::borrow::Borrow;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::domain::Point;
use crate::error::{RecoveryError, Result};
use crate::rational::Fraction;

/// Evaluates the interpolating polynomial at zero and returns the exact fraction
///
/// The result does not depend on the order of `points`.
///
/// # Errors
/// Returns [`RecoveryError::DuplicateAbscissa`] if two points share an x coordinate
pub fn constant_term<P: Borrow<Point>>(points: &[P]) -> Result<Fraction> {
    let mut total = Fraction::zero();

    for (i, point_i) in points.iter().enumerate() {
        let point_i = point_i.borrow();
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, point_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let point_j = point_j.borrow();

            let difference = point_i.x() - point_j.x();
            if difference.is_zero() {
                return Err(RecoveryError::DuplicateAbscissa {
                    x: point_i.x().clone(),
                });
            }

            numerator *= -point_j.x();
            denominator *= difference;
        }

        let basis = Fraction::new(numerator, denominator)?;
        let term = basis.multiply(&Fraction::from_integer(point_i.y().clone()));
        total = total.add(&term);
    }

    Ok(total)
}

/// Evaluates the interpolating polynomial at zero as an integer
///
/// # Errors
/// Returns [`RecoveryError::DuplicateAbscissa`] if two points share an x coordinate,
/// or [`RecoveryError::NonIntegerResult`] if the constant term is not whole
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamvote::domain::Point;
/// use shamvote::interpolate::evaluate_at_zero;
///
/// // f(x) = 2x + 3
/// let points = [Point::new(1, 5), Point::new(2, 7), Point::new(3, 9)];
/// assert_eq!(evaluate_at_zero(&points).unwrap(), BigInt::from(3));
/// ```
pub fn evaluate_at_zero<P: Borrow<Point>>(points: &[P]) -> Result<BigInt> {
    constant_term(points)?.to_integer_if_whole()
}
