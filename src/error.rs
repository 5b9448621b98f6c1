//! Error kinds for secret reconstruction
//!
//! Every failure the numeric core can report is a variant of [`RecoveryError`],
//! so callers can match on the specific kind instead of inspecting messages.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

use crate::rational::Fraction;

/// Failures raised while decoding, interpolating or voting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// A character is not a digit of the stated base
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u64),

    /// Fraction construction or reciprocal with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Two points share an x coordinate, the polynomial is undefined
    #[error("duplicate abscissa: more than one share has x = {x}")]
    DuplicateAbscissa { x: BigInt },

    #[error("insufficient shares: need at least {threshold}, but only {available} provided")]
    InsufficientShares { threshold: usize, available: usize },

    #[error("threshold must be at least 1 (got {0})")]
    InvalidThreshold(usize),

    /// The constant term of an interpolation is not a whole number
    #[error("interpolation produced a non-integer constant term {0}")]
    NonIntegerResult(Fraction),

    /// Several candidates share the highest vote count
    #[error(
        "no majority: {} candidates tied with {support} of {total} combinations each",
        .candidates.len()
    )]
    NoMajority {
        candidates: Vec<BigInt>,
        support: usize,
        total: usize,
    },

    #[error("{total} combinations exceed the configured limit of {limit}")]
    TooManyCombinations { total: BigUint, limit: u64 },

    #[error("recovery cancelled")]
    Cancelled,
}

/// Result alias used throughout the numeric core
pub type Result<T, E = RecoveryError> = std::result::Result<T, E>;
