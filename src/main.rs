// SPDX-License-Identifier: MIT
//
// huekit — derive colors, schemes and scales from hex colors.
//
// This is the command-line binary that wires the crates together:
//
//   huekit-color   → Color value, hex codec, HSL conversion
//   huekit-palette → tonal operators, schemes, scales
//
// One invocation performs exactly one operation:
//
//   flags → Operation::from_args → Operation::run → output::render → stdout
//
// Diagnostics and errors go to stderr; stdout carries a single JSON line
// (or `true` / `false` for Warm and Cool).

mod config;
mod logging;
mod operation;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::config::Config;
use crate::operation::{Operation, OperationArgs, Outcome};

#[derive(Debug, Parser)]
#[command(name = "huekit")]
#[command(about = "Derive colors, schemes and scales from hex colors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    operation: OperationArgs,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH", env = "HUEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("huekit: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log, cli.verbose)?;

    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let operation = Operation::from_args(&cli.operation)?;
    tracing::debug!(operation = operation.name(), "selected operation");

    let outcome = operation.run()?;
    if let Outcome::Sequence(colors) = &outcome {
        tracing::debug!(count = colors.len(), "generated colors");
    }

    output::render(&outcome, config.output.hex_case()).context("failed to encode result as JSON")
}
