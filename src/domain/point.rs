//! A decoded share

use std::fmt;

use num_bigint::BigInt;

/// One share `(x, y)` purportedly lying on the secret polynomial
///
/// Both coordinates are arbitrary precision. Points are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
