//! Exact rational arithmetic over arbitrary-precision integers
//!
//! [`Fraction`] is kept in canonical form after every operation: the
//! denominator is strictly positive and shares no factor with the numerator.
//! Zero is always `0/1`. Two fractions are equal iff their canonical
//! numerators and denominators are identical, so the derived `PartialEq`
//! and `Hash` are exact.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RecoveryError, Result};

/// Canonical fraction `numerator / denominator`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds a fraction and reduces it to canonical form
    ///
    /// # Errors
    /// Returns [`RecoveryError::DivisionByZero`] if `denominator` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamvote::rational::Fraction;
    ///
    /// let half = Fraction::new(BigInt::from(4), BigInt::from(-8)).unwrap();
    /// assert_eq!(*half.numerator(), BigInt::from(-1));
    /// assert_eq!(*half.denominator(), BigInt::from(2));
    ///
    /// assert!(Fraction::new(BigInt::from(1), BigInt::from(0)).is_err());
    /// ```
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RecoveryError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Canonicalizes a pair whose denominator is already known to be non-zero
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let divisor = numerator.abs().gcd(&denominator);
        if divisor.is_one() {
            Self {
                numerator,
                denominator,
            }
        } else {
            Self {
                numerator: numerator / &divisor,
                denominator: denominator / &divisor,
            }
        }
    }

    /// The fraction `0/1`
    #[must_use]
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// The fraction `1/1`
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the canonical denominator is 1
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    #[must_use]
    #[allow(
        clippy::should_implement_trait,
        reason = "operator traits are implemented on references and delegate here"
    )]
    pub fn add(&self, rhs: &Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::reduced(&self.numerator + &rhs.numerator, self.denominator.clone());
        }
        Self::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Swaps numerator and denominator
    ///
    /// # Errors
    /// Returns [`RecoveryError::DivisionByZero`] for the zero fraction
    pub fn reciprocal(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    #[must_use]
    pub fn subtract(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }

    /// # Errors
    /// Returns [`RecoveryError::DivisionByZero`] if `rhs` is zero
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.reciprocal()?))
    }

    /// Returns the value as an integer when the fraction is whole
    ///
    /// # Errors
    /// Returns [`RecoveryError::NonIntegerResult`] if the denominator is not 1
    pub fn to_integer_if_whole(&self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.numerator.clone())
        } else {
            Err(RecoveryError::NonIntegerResult(self.clone()))
        }
    }

    /// Consuming variant of [`Fraction::to_integer_if_whole`]
    ///
    /// # Errors
    /// Returns the fraction itself when it is not whole
    pub fn into_integer(self) -> std::result::Result<BigInt, Self> {
        if self.is_integer() {
            Ok(self.numerator)
        } else {
            Err(self)
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::add(self, rhs)
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        self.subtract(rhs)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        self.multiply(rhs)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}
