//! fx-forwards CLI - enrich forward-point feeds from the command line
//!
//! Loads a JSON array of forward-point quotes and a JSON array of hedge
//! exposures, runs the enrichment pipeline, and prints the enriched rows
//! as JSON.
//!
//! ## Example usage
//!
//! ```bash
//! fx-forwards --forward-points points.json --exposures exposures.json --pretty
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use fx_forwards::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// fx-forwards: FX forward-point aggregation and exposure enrichment
#[derive(Parser)]
#[command(name = "fx-forwards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Enrich FX forward-point quotes with hedge-exposure metrics", long_about = None)]
struct Cli {
    /// Path to a JSON array of forward-point quotes
    #[arg(short = 'f', long, value_name = "FILE")]
    forward_points: PathBuf,

    /// Path to a JSON array of hedge exposures
    #[arg(short = 'e', long, value_name = "FILE")]
    exposures: PathBuf,

    /// Pretty-print the output JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let points: Vec<ForwardPointQuote> = load_json(&cli.forward_points)
        .with_context(|| format!("loading forward points from {}", cli.forward_points.display()))?;
    let exposures: Vec<HedgeExposure> = load_json(&cli.exposures)
        .with_context(|| format!("loading exposures from {}", cli.exposures.display()))?;

    let rows = enrich(&points, &exposures);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    println!("{}", output);

    eprintln!(
        "{} {} quotes, {} exposures -> {} enriched rows",
        "done:".green().bold(),
        points.len(),
        exposures.len(),
        rows.len()
    );

    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
