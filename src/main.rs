use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shamvote::cli::{Cli, Commands};
use shamvote::commands::{RecoverOptions, RecoveryReport, decode_share, recover_reader};

/// Install the stderr log subscriber, preferring `RUST_LOG` over `-v` flags
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Recover one fragment set from stdin (prompting when a TTY is attached)
fn recover_stdin(options: &RecoverOptions) -> Result<RecoveryReport> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste the fragment set JSON, then press Ctrl-D:");
    }
    recover_reader("stdin", io::stdin().lock(), options)
}

fn recover_file(path: &Path, options: &RecoverOptions) -> Result<RecoveryReport> {
    let source = path.display().to_string();
    let file = File::open(path).with_context(|| format!("Failed to open {source}"))?;
    recover_reader(&source, BufReader::new(file), options)
}

fn print_reports(reports: &[RecoveryReport], json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(reports).context("Failed to serialize reports")?;
        println!("{output}");
    } else {
        for report in reports {
            println!("{report}");
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Recover {
            files,
            threshold,
            strict,
            json,
            parallel,
            max_combinations,
        } => {
            let options = RecoverOptions {
                threshold,
                strict,
                parallel,
                max_combinations: (max_combinations > 0).then_some(max_combinations),
            };

            let outcomes = if files.is_empty() {
                vec![("stdin".to_string(), recover_stdin(&options))]
            } else {
                files
                    .iter()
                    .map(|path| (path.display().to_string(), recover_file(path, &options)))
                    .collect()
            };

            // Each set is independent: a failure is reported and the rest still run
            let mut reports = Vec::with_capacity(outcomes.len());
            let mut failures = 0usize;
            for (source, outcome) in outcomes {
                match outcome {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        failures += 1;
                        eprintln!("{source}: error: {e:#}");
                    }
                }
            }

            print_reports(&reports, json)?;

            if failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode { base, value } => {
            let decoded = decode_share(base, &value)?;
            println!("{decoded}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
