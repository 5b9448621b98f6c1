//! Threshold newtype for secret reconstruction

use crate::error::{RecoveryError, Result};

/// Number of shares needed to fix the polynomial (degree = k - 1)
///
/// Invariant: threshold >= 1 (enforced at construction)
/// A threshold of 0 would describe a polynomial with no coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamvote::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(RecoveryError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
