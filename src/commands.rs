use std::fmt;
use std::io::Read;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::Serialize;
use tracing::debug;

use crate::codec::{self, FragmentSet};
use crate::domain::{Radix, Threshold};
use crate::recover::{DEFAULT_MAX_COMBINATIONS, SecretRecoverer, Verdict};

/// Settings for recovering fragment sets
#[derive(Debug, Clone, Copy)]
pub struct RecoverOptions {
    /// Overrides the threshold declared by the set
    pub threshold: Option<Threshold>,
    /// Treat a tied vote as a failure
    pub strict: bool,
    pub parallel: bool,
    pub max_combinations: Option<u64>,
}

impl Default for RecoverOptions {
    fn default() -> Self {
        Self {
            threshold: None,
            strict: false,
            parallel: false,
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
        }
    }
}

/// Whether the vote produced a unique winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Majority,
    Tied,
}

/// Outcome of one fragment set, ready for display or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoveryReport {
    pub source: String,
    pub status: Status,
    /// Decimal secret, absent when the vote is tied
    pub secret: Option<String>,
    /// Tied candidates, empty when a majority exists
    pub candidates: Vec<String>,
    pub supporting_combinations: usize,
    pub total_combinations: usize,
    pub rejected_combinations: usize,
    /// Fraction of combinations backing the secret, absent when the vote is tied
    pub confidence: Option<f64>,
}

impl RecoveryReport {
    #[must_use]
    pub fn from_verdict(source: &str, verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Majority(result) => Self {
                source: source.to_string(),
                status: Status::Majority,
                secret: Some(result.secret.to_string()),
                candidates: Vec::new(),
                supporting_combinations: result.supporting_combinations,
                total_combinations: result.total_combinations,
                rejected_combinations: result.rejected_combinations,
                confidence: Some(result.confidence()),
            },
            Verdict::Tied(tie) => Self {
                source: source.to_string(),
                status: Status::Tied,
                secret: None,
                candidates: tie.candidates.iter().map(ToString::to_string).collect(),
                supporting_combinations: tie.support,
                total_combinations: tie.total_combinations,
                rejected_combinations: tie.rejected_combinations,
                confidence: None,
            },
        }
    }
}

impl fmt::Display for RecoveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secret {
            Some(secret) => write!(
                f,
                "{}: secret = {} ({}/{} combinations agree",
                self.source, secret, self.supporting_combinations, self.total_combinations
            )?,
            None => write!(
                f,
                "{}: no majority, tied between {} ({}/{} combinations each",
                self.source,
                self.candidates.join(", "),
                self.supporting_combinations,
                self.total_combinations
            )?,
        }
        if let Some(confidence) = self.confidence {
            write!(f, ", {:.1}%", confidence * 100.0)?;
        }
        if self.rejected_combinations > 0 {
            write!(f, ", {} non-integer", self.rejected_combinations)?;
        }
        write!(f, ")")
    }
}

/// Recover the secret of a decoded fragment set by majority vote
///
/// Uses the set's declared threshold unless `options` overrides it.
///
/// # Errors
/// Returns an error if recovery fails, or if the vote is tied and
/// `options.strict` is set
pub fn recover_fragment_set(set: &FragmentSet, options: &RecoverOptions) -> Result<Verdict> {
    let threshold = options
        .threshold
        .unwrap_or_else(|| set.threshold());

    debug!(
        threshold = *threshold,
        declared_threshold = *set.threshold(),
        declared_shares = set.declared_share_count(),
        "recovering fragment set"
    );

    let verdict = SecretRecoverer::new(threshold)
        .parallel(options.parallel)
        .max_combinations(options.max_combinations)
        .recover(set.points())
        .context("Failed to recover secret")?;

    if options.strict {
        let result = verdict
            .into_result()
            .context("Vote is tied and strict mode is enabled")?;
        return Ok(Verdict::Majority(result));
    }

    Ok(verdict)
}

/// Read a fragment set as JSON from `reader` and recover its secret
///
/// Returns a report labelled with `source`.
///
/// # Errors
/// Returns an error if reading, parsing or recovery fails
pub fn recover_reader<R: Read>(
    source: &str,
    reader: R,
    options: &RecoverOptions,
) -> Result<RecoveryReport> {
    let set = FragmentSet::from_reader(reader)
        .with_context(|| format!("Failed to read fragment set from {source}"))?;
    let verdict = recover_fragment_set(&set, options)
        .with_context(|| format!("Failed to recover fragment set from {source}"))?;
    Ok(RecoveryReport::from_verdict(source, &verdict))
}

/// Decode one share value to an exact integer
///
/// # Errors
/// Returns an error if `value` contains a digit invalid for `base`
pub fn decode_share(base: Radix, value: &str) -> Result<BigInt> {
    codec::decode_value(base, value)
        .with_context(|| format!("Failed to decode '{value}' in base {}", *base))
}
