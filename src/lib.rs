//! Threshold secret recovery that tolerates corrupted shares
//!
//! Shares are points on an unknown polynomial of degree `k - 1`; the secret is
//! its value at zero. Every size-`k` combination of shares is interpolated in
//! exact rational arithmetic and the most frequently reproduced constant term
//! wins the vote.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod rational;
pub mod recover;
pub mod subsets;

pub use domain::{Point, Radix, SchemeParams, Threshold};
pub use error::RecoveryError;
pub use recover::{RecoveryResult, SecretRecoverer, Verdict, recover};
