//! Share value encoding and the fragment-set file format
//!
//! # Overview
//!
//! Each share is published as an x coordinate plus its y value written as a
//! digit string in some positional base between 2 and 36. Digits are `0-9`
//! followed by case-insensitive `a-z`. A fragment set groups the shares of one
//! secret together with its threshold descriptor:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! # Examples
//!
//! ## Decoding a single value
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamvote::codec::decode;
//!
//! assert_eq!(decode(16, "ff").unwrap(), BigInt::from(255));
//! assert_eq!(decode(2, "101").unwrap(), BigInt::from(5));
//! assert!(decode(2, "2").is_err());
//! ```
//!
//! ## Parsing a fragment set
//!
//! ```rust
//! use shamvote::codec::FragmentSet;
//!
//! # fn main() -> anyhow::Result<()> {
//! let json = r#"{ "keys": { "n": 2, "k": 2 },
//!                  "1": { "base": "10", "value": "5" },
//!                  "2": { "base": "16", "value": "7" } }"#;
//! let set = FragmentSet::from_reader(json.as_bytes())?;
//!
//! assert_eq!(*set.threshold(), 2);
//! assert_eq!(set.points().len(), 2);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result, anyhow};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::Deserialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::domain::{Point, Radix, Threshold};
use crate::error::{self, RecoveryError};

/// Decodes a digit string in the given base into an exact integer
///
/// Evaluates the digits left to right as `value = value * base + digit`.
/// An empty string decodes to zero.
///
/// # Errors
/// Returns [`RecoveryError::InvalidDigit`] for a character that is not a digit
/// of `radix`
pub fn decode_value(radix: Radix, digits: &str) -> error::Result<BigInt> {
    let base = *radix;
    digits
        .chars()
        .enumerate()
        .try_fold(BigInt::zero(), |value, (position, digit)| {
            let digit_value = digit
                .to_digit(Radix::MAX)
                .filter(|&d| d < base)
                .ok_or(RecoveryError::InvalidDigit {
                    digit,
                    position,
                    base,
                })?;
            Ok(value * base + digit_value)
        })
}

/// Decodes a digit string, validating the base first
///
/// # Errors
/// Returns [`RecoveryError::InvalidBase`] if `base` is outside 2..=36, or
/// [`RecoveryError::InvalidDigit`] for a character that is not a digit of `base`
pub fn decode(base: u32, digits: &str) -> error::Result<BigInt> {
    decode_value(Radix::new(base)?, digits)
}

/// Writes an integer as a lowercase digit string in the given base
#[must_use]
pub fn encode_value(radix: Radix, value: &BigInt) -> String {
    value.to_str_radix(*radix)
}

/// A number written either as a JSON number or as a decimal string
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberField {
    Number(u64),
    Text(String),
}

impl NumberField {
    fn parse(&self, field: &str) -> Result<u64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("Field '{field}' is not a valid number: '{s}'")),
        }
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: NumberField,
    k: NumberField,
}

#[derive(Deserialize)]
struct RawFragment {
    base: NumberField,
    value: Zeroizing<String>,
}

#[derive(Deserialize)]
struct RawFragmentSet {
    keys: RawKeys,
    #[serde(flatten)]
    fragments: BTreeMap<String, RawFragment>,
}

/// A decoded fragment set: its threshold descriptor and shares
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSet {
    threshold: Threshold,
    declared_share_count: usize,
    points: Vec<Point>,
}

impl FragmentSet {
    /// Reads and decodes a fragment set from JSON
    ///
    /// Shares are returned sorted by x. A declared share count that differs
    /// from the number of shares present is only logged: the shares present
    /// are what recovery uses, and the threshold is checked against them at
    /// recovery time.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, the threshold is 0, a share
    /// identifier is not an integer, a base is out of range, a value contains
    /// an invalid digit, or two shares have the same x
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawFragmentSet =
            serde_json::from_reader(reader).context("Failed to parse fragment set JSON")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawFragmentSet) -> Result<Self> {
        let declared_n = usize::try_from(raw.keys.n.parse("keys.n")?)
            .context("Declared share count does not fit in usize")?;
        let k = usize::try_from(raw.keys.k.parse("keys.k")?)
            .context("Declared threshold does not fit in usize")?;

        let threshold = Threshold::new(k).context("Invalid threshold descriptor")?;

        let mut points = Vec::with_capacity(raw.fragments.len());
        for (id, fragment) in &raw.fragments {
            points.push(decode_fragment(id, fragment)?);
        }
        points.sort_by(|a, b| a.x().cmp(b.x()));

        if let Some(pair) = points.windows(2).find(|pair| pair[0].x() == pair[1].x()) {
            return Err(anyhow!(RecoveryError::DuplicateAbscissa {
                x: pair[0].x().clone(),
            }));
        }

        if points.len() != declared_n {
            warn!(
                declared = declared_n,
                present = points.len(),
                "declared share count does not match the shares present"
            );
        }
        debug!(
            shares = points.len(),
            threshold = k,
            "decoded fragment set"
        );

        Ok(Self {
            threshold,
            declared_share_count: declared_n,
            points,
        })
    }

    /// Threshold `k` as declared by the set
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Share count `n` as declared by the set, which may differ from `points().len()`
    #[must_use]
    pub fn declared_share_count(&self) -> usize {
        self.declared_share_count
    }

    /// Decoded shares, sorted by x
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

fn decode_fragment(id: &str, fragment: &RawFragment) -> Result<Point> {
    let x: BigInt = id
        .trim()
        .parse()
        .map_err(|_| anyhow!("Share identifier '{id}' is not an integer"))?;

    let base = fragment.base.parse("base")?;
    let radix = u32::try_from(base)
        .map_err(|_| RecoveryError::InvalidBase(base))
        .and_then(Radix::new)
        .with_context(|| format!("Share {id} has an invalid base"))?;

    let y = decode_value(radix, &fragment.value)
        .with_context(|| format!("Failed to decode value of share {id}"))?;

    Ok(Point::new(x, y))
}
