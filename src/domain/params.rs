//! Threshold checked against the shares available for recovery

use super::Threshold;
use crate::error::{RecoveryError, Result};

/// Validated pair of threshold `k` and available share count `n`
///
/// Enforces k <= n: with fewer shares than the threshold no combination
/// can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeParams {
    threshold: Threshold,
    share_count: usize,
}

impl SchemeParams {
    /// Creates a new threshold descriptor
    ///
    /// # Errors
    /// Returns [`RecoveryError::InsufficientShares`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamvote::domain::{SchemeParams, Threshold};
    ///
    /// let params = SchemeParams::new(Threshold::new(3).unwrap(), 5).unwrap();
    /// assert_eq!(*params.threshold(), 3);
    /// assert_eq!(params.share_count(), 5);
    ///
    /// assert!(SchemeParams::new(Threshold::new(5).unwrap(), 3).is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: usize) -> Result<Self> {
        if *threshold > share_count {
            return Err(RecoveryError::InsufficientShares {
                threshold: *threshold,
                available: share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> usize {
        self.share_count
    }
}
