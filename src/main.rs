// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: decode random or supplied bitstrings into
//! rectangle layouts and optionally score them.
//!
//! # Usage
//!
//! ```bash
//! # One random layout with the default 14 labels
//! rectnet --seed 3
//!
//! # Decode a given bitstring for N=2 (14 bits)
//! rectnet --labels 2 --bits 10110_01001_0110
//!
//! # Score 1000 layouts in parallel and print statistics
//! rectnet --labels 8 --count 1000 --solve
//! ```

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rectnet::batch::evaluate_batch;
use rectnet::report::{outcome_line, sample_report};
use rectnet::solver::score_outcome;
use rectnet::{
    extract_conflicts, DecisionBits, GeneratorConfig, GeneratorContext, MicroLpSolver,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rectnet")]
#[command(about = "Decode bitstrings into colored rectangle layouts")]
struct Args {
    /// Number of rectangles (N)
    #[arg(long, default_value_t = rectnet::geometry::DEFAULT_LABELS)]
    labels: usize,

    /// Random seed (first seed of a batch)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Decode this bitstring instead of random bits
    #[arg(long, conflicts_with = "count")]
    bits: Option<String>,

    /// Number of random layouts to generate
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Solve the LP and ILP packing programs for each layout
    #[arg(long)]
    solve: bool,

    /// Print layouts as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    ensure!(args.count > 0, "--count must be at least 1");

    let config = GeneratorConfig::new(args.labels)?;
    let ctx = GeneratorContext::new(config);
    info!(
        labels = config.labels(),
        comparators = ctx.network().len(),
        bits = ctx.bit_budget(),
        "configured generator"
    );

    if let Some(text) = &args.bits {
        let bits: DecisionBits = text.parse().context("parsing --bits")?;
        let sample = ctx.sample(&bits)?;
        let outcome = extract_conflicts(&sample.corrected);
        let score = args
            .solve
            .then(|| score_outcome(sample.corrected.len(), &outcome, &MicroLpSolver));
        if args.json {
            let value = serde_json::json!({
                "sample": sample,
                "outcome": outcome,
                "score": score,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", sample_report(&sample));
            println!("{}", outcome_line(&outcome, score.as_ref()));
        }
        return Ok(());
    }

    let solver = args.solve.then_some(MicroLpSolver);
    let (evaluated, stats) = evaluate_batch(&ctx, args.seed, args.count, solver.as_ref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluated)?);
    } else {
        for item in &evaluated {
            println!("--- seed {} ---", item.seed);
            println!("{}", sample_report(&item.sample));
            println!("{}", outcome_line(&item.outcome, item.score.as_ref()));
        }
        println!("{}", stats);
    }
    Ok(())
}
