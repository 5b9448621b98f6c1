//! `Radix` newtype for positional share encodings

use crate::error::{RecoveryError, Result};

/// Base of a positional digit string (2..=36)
///
/// Digits are `0-9` followed by case-insensitive `a-z`, so 36 is the
/// largest base that can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidBase`] if `value` is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamvote::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RecoveryError::InvalidBase(u64::from(value)));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
