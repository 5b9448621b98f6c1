//! Fault-tolerant secret recovery by majority vote
//!
//! Every size-`k` combination of the shares is interpolated at zero and the
//! resulting constant terms are tallied. The value reproduced by the most
//! combinations is trusted as the secret.
//!
//! # Limitations
//!
//! This is a best-effort heuristic, not a guarantee against adversarial
//! corruption. With `b` corrupted shares the true secret is reproduced by
//! `C(n - b, k)` combinations; it wins as long as no wrong value happens to
//! be reproduced as often. Corrupted combinations usually scatter across
//! distinct values, but a crafted set of shares can outvote the truth.
//!
//! The number of combinations is `C(n, k)`, each costing `O(k²)` big-integer
//! operations, so recovery is exponential in the worst case. The
//! [`SecretRecoverer`] refuses sets above a configurable combination limit.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use num_bigint::{BigInt, BigUint};
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::domain::{Point, SchemeParams, Threshold};
use crate::error::{RecoveryError, Result};
use crate::interpolate::constant_term;
use crate::rational::Fraction;
use crate::subsets::{binomial, subsets};

/// Default ceiling on the number of combinations examined in one recovery
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;

/// A secret backed by a unique plurality of combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryResult {
    /// The recovered constant term
    pub secret: BigInt,
    /// Combinations that reproduced `secret`
    pub supporting_combinations: usize,
    /// Combinations examined, `C(n, k)`
    pub total_combinations: usize,
    /// Combinations whose constant term was not an integer
    pub rejected_combinations: usize,
}

impl RecoveryResult {
    /// Share of combinations that agreed on the secret, for display only
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "ratio is informational, exact counts are kept alongside"
    )]
    pub fn confidence(&self) -> f64 {
        if self.total_combinations == 0 {
            return 0.0;
        }
        self.supporting_combinations as f64 / self.total_combinations as f64
    }
}

/// Several candidates reached the highest vote count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tie {
    /// Tied candidates in ascending order
    pub candidates: Vec<BigInt>,
    /// Votes received by each tied candidate
    pub support: usize,
    pub total_combinations: usize,
    pub rejected_combinations: usize,
}

/// Outcome of a completed vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Majority(RecoveryResult),
    Tied(Tie),
}

impl Verdict {
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Tied(_))
    }

    /// Treats a tie as a hard failure
    ///
    /// # Errors
    /// Returns [`RecoveryError::NoMajority`] when the vote is tied
    pub fn into_result(self) -> Result<RecoveryResult> {
        match self {
            Self::Majority(result) => Ok(result),
            Self::Tied(tie) => Err(RecoveryError::NoMajority {
                candidates: tie.candidates,
                support: tie.support,
                total: tie.total_combinations,
            }),
        }
    }
}

/// Vote counts for one recovery call
///
/// Integer constant terms are candidates. Fractional constant terms cannot be
/// the secret; they are counted as rejected and cast no vote.
#[derive(Debug, Default)]
pub struct VoteTally {
    votes: HashMap<BigInt, usize>,
    total: usize,
    rejected: usize,
    smallest_rejected: Option<Fraction>,
}

impl VoteTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the constant term produced by one combination
    pub fn cast(&mut self, term: Fraction) {
        self.total += 1;
        match term.into_integer() {
            Ok(candidate) => *self.votes.entry(candidate).or_insert(0) += 1,
            Err(fraction) => {
                self.rejected += 1;
                self.keep_smallest_rejected(fraction);
            }
        }
    }

    fn keep_smallest_rejected(&mut self, fraction: Fraction) {
        let smaller = self
            .smallest_rejected
            .as_ref()
            .is_none_or(|current| fraction < *current);
        if smaller {
            self.smallest_rejected = Some(fraction);
        }
    }

    /// Combines two partial tallies
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (candidate, count) in other.votes {
            *self.votes.entry(candidate).or_insert(0) += count;
        }
        self.total += other.total;
        self.rejected += other.rejected;
        if let Some(fraction) = other.smallest_rejected {
            self.keep_smallest_rejected(fraction);
        }
        self
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn votes_for(&self, candidate: &BigInt) -> usize {
        self.votes.get(candidate).copied().unwrap_or(0)
    }

    /// Selects the candidate with the strictly highest count
    ///
    /// # Errors
    /// Returns [`RecoveryError::NonIntegerResult`] if every combination was rejected
    pub fn into_verdict(self) -> Result<Verdict> {
        let Some(support) = self.votes.values().copied().max() else {
            return Err(match self.smallest_rejected {
                Some(fraction) => RecoveryError::NonIntegerResult(fraction),
                None => RecoveryError::NoMajority {
                    candidates: Vec::new(),
                    support: 0,
                    total: self.total,
                },
            });
        };

        let mut leaders: Vec<BigInt> = self
            .votes
            .into_iter()
            .filter(|(_, count)| *count == support)
            .map(|(candidate, _)| candidate)
            .collect();

        if leaders.len() == 1 {
            let secret = leaders.swap_remove(0);
            return Ok(Verdict::Majority(RecoveryResult {
                secret,
                supporting_combinations: support,
                total_combinations: self.total,
                rejected_combinations: self.rejected,
            }));
        }

        leaders.sort();
        Ok(Verdict::Tied(Tie {
            candidates: leaders,
            support,
            total_combinations: self.total,
            rejected_combinations: self.rejected,
        }))
    }
}

/// Majority-vote recovery over all size-`k` combinations
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamvote::domain::{Point, Threshold};
/// use shamvote::recover::SecretRecoverer;
///
/// // f(x) = 2x + 3, with the fourth share corrupted
/// let points = [Point::new(1, 5), Point::new(2, 7), Point::new(3, 9), Point::new(4, 99)];
///
/// let result = SecretRecoverer::new(Threshold::new(2).unwrap())
///     .recover(&points)
///     .unwrap()
///     .into_result()
///     .unwrap();
///
/// assert_eq!(result.secret, BigInt::from(3));
/// assert_eq!(result.supporting_combinations, 3);
/// assert_eq!(result.total_combinations, 6);
/// ```
#[derive(Debug, Clone)]
pub struct SecretRecoverer {
    threshold: Threshold,
    parallel: bool,
    max_combinations: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SecretRecoverer {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            parallel: false,
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
            cancel: None,
        }
    }

    /// Spreads combinations across the rayon thread pool
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Caps the number of combinations, `None` removes the cap
    #[must_use]
    pub fn max_combinations(mut self, limit: Option<u64>) -> Self {
        self.max_combinations = limit;
        self
    }

    /// Flag polled once per combination; setting it stops the recovery
    #[must_use]
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Interpolates every combination and returns the vote outcome
    ///
    /// # Errors
    /// Returns an error if there are fewer shares than the threshold, if two
    /// shares share an x coordinate, if the combination count exceeds the
    /// configured limit, if the recovery is cancelled, or if no combination
    /// yields an integer constant term
    pub fn recover(&self, points: &[Point]) -> Result<Verdict> {
        let params = SchemeParams::new(self.threshold, points.len())?;
        let k = *params.threshold();
        check_distinct(points)?;

        let combinations = binomial(params.share_count(), k);
        match self.max_combinations {
            Some(limit) if combinations > BigUint::from(limit) => {
                return Err(RecoveryError::TooManyCombinations {
                    total: combinations,
                    limit,
                });
            }
            _ => {}
        }

        debug!(
            shares = points.len(),
            threshold = k,
            %combinations,
            parallel = self.parallel,
            "starting majority-vote recovery"
        );

        let tally = if self.parallel {
            self.tally_parallel(points)?
        } else {
            self.tally_sequential(points)?
        };

        let verdict = tally.into_verdict()?;
        match &verdict {
            Verdict::Majority(result) => info!(
                secret = %result.secret,
                supporting = result.supporting_combinations,
                total = result.total_combinations,
                "recovered secret"
            ),
            Verdict::Tied(tie) => warn!(
                candidates = tie.candidates.len(),
                support = tie.support,
                total = tie.total_combinations,
                "vote is tied, no unique majority"
            ),
        }
        Ok(verdict)
    }

    fn tally_sequential(&self, points: &[Point]) -> Result<VoteTally> {
        let mut tally = VoteTally::new();
        for combination in subsets(points, *self.threshold) {
            self.check_cancelled()?;
            tally.cast(evaluate(&combination)?);
        }
        Ok(tally)
    }

    fn tally_parallel(&self, points: &[Point]) -> Result<VoteTally> {
        subsets(points, *self.threshold)
            .par_bridge()
            .try_fold(VoteTally::new, |mut tally, combination| -> Result<VoteTally> {
                self.check_cancelled()?;
                tally.cast(evaluate(&combination)?);
                Ok(tally)
            })
            .try_reduce(VoteTally::new, |left, right| Ok(left.merge(right)))
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(RecoveryError::Cancelled),
            _ => Ok(()),
        }
    }
}

fn evaluate(combination: &[&Point]) -> Result<Fraction> {
    let term = constant_term(combination)?;
    trace!(
        xs = ?combination.iter().map(|p| p.x().to_string()).collect::<Vec<_>>(),
        constant_term = %term,
        "evaluated combination"
    );
    Ok(term)
}

fn check_distinct(points: &[Point]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x()) {
            return Err(RecoveryError::DuplicateAbscissa {
                x: point.x().clone(),
            });
        }
    }
    Ok(())
}

/// Recovers the secret from `points` with no combination limit
///
/// # Errors
/// See [`SecretRecoverer::recover`]
pub fn recover(points: &[Point], threshold: Threshold) -> Result<Verdict> {
    SecretRecoverer::new(threshold)
        .max_combinations(None)
        .recover(points)
}
