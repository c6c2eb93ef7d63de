use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use thaitax_core::models::TaxpayerInput;
use thaitax_core::{calculate_maximize_benefit, calculate_tax};
use thaitax_rules::{available_years, latest_year, load_rules};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Thai personal income tax calculator.
///
/// Reads a taxpayer profile from a JSON file, applies the ruleset for the
/// requested tax year, and prints the full calculation breakdown as JSON.
#[derive(Debug, Parser)]
#[command(name = "thaitax", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the tax years with a bundled ruleset.
    Years,

    /// Calculate the tax position for one taxpayer profile.
    Calculate {
        /// Buddhist-calendar tax year (e.g. 2567). Defaults to the latest
        /// bundled year.
        #[arg(long)]
        year: Option<i32>,

        /// Path to the taxpayer profile JSON file.
        #[arg(long)]
        input: PathBuf,

        /// Also print the retirement allocation that would maximize the
        /// deduction, with the tax it would save.
        #[arg(long, default_value_t = false)]
        maximize: bool,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_years() {
    for year in available_years() {
        println!("{year}");
    }
}

fn run_calculate(
    year: Option<i32>,
    input_path: &PathBuf,
    maximize: bool,
) -> Result<()> {
    let year = year.unwrap_or_else(latest_year);
    let rules = load_rules(year)?;

    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read input file: {}", input_path.display()))?;
    let input: TaxpayerInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse taxpayer profile: {}", input_path.display()))?;

    debug!(year, "calculating tax position");
    let result = calculate_tax(&input, &rules);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if maximize {
        let benefit = calculate_maximize_benefit(&input, &rules);
        println!("{}", serde_json::to_string_pretty(&benefit)?);
    }

    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Years => run_years(),
        Command::Calculate {
            year,
            input,
            maximize,
        } => run_calculate(year, &input, maximize)?,
    }

    Ok(())
}
