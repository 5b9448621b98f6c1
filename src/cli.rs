use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{Radix, Threshold};
use crate::recover::DEFAULT_MAX_COMBINATIONS;

/// Validates that threshold is at least 1
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that base is between 2 and 36
fn validate_radix(s: &str) -> Result<Radix, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Radix::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamvote")]
#[command(
    about = "Recover a secret from threshold shares, tolerating corrupted shares by majority vote"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret of one or more fragment sets (JSON files, or stdin)
    Recover {
        /// Fragment set files, each recovered independently
        files: Vec<PathBuf>,

        /// Override the threshold declared in each set (must be >= 1)
        #[arg(short = 'k', long, value_parser = validate_threshold)]
        threshold: Option<Threshold>,

        /// Fail when the vote is tied instead of reporting the candidates
        #[arg(long)]
        strict: bool,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,

        /// Evaluate combinations on all CPU cores
        #[arg(long)]
        parallel: bool,

        /// Refuse sets with more combinations than this (0 disables the limit)
        #[arg(long, default_value_t = DEFAULT_MAX_COMBINATIONS)]
        max_combinations: u64,
    },
    /// Decode a single share value to decimal
    Decode {
        /// Base of the value (2-36)
        #[arg(short, long, value_parser = validate_radix)]
        base: Radix,

        /// Digits to decode
        value: String,
    },
}
