//! Traffic analyzer CLI
//!
//! Reads a CSV of half-hourly traffic counts and prints the analysis
//! report: total cars, daily totals, the top half-hour periods, and
//! the 1.5-hour period with the least traffic.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analyzer::AnalysisEngine;
use report::{ConsoleSink, ReportWriter};

#[derive(Parser)]
#[command(
    name = "traffic-analyzer",
    version,
    about = "Batch analytics over half-hourly traffic counts",
    long_about = "Reads a timestamp,cars_count CSV and reports the total vehicle count,\n\
                  per-day totals, the top half-hour periods, and the contiguous\n\
                  1.5-hour period with the least traffic."
)]
struct Cli {
    /// Path to the traffic-count CSV file
    #[arg(env = "TRAFFIC_INPUT", value_name = "FILE")]
    input: PathBuf,

    /// Number of top half-hour periods to report
    #[arg(long, default_value_t = 3, value_name = "N")]
    top: usize,

    /// Rejected rows tolerated before the run aborts
    #[arg(long, default_value_t = ingest::DEFAULT_SKIP_LIMIT, value_name = "N")]
    skip_limit: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = ingest::read_from_path(&cli.input, cli.skip_limit)
        .with_context(|| format!("failed to ingest {}", cli.input.display()))?;
    info!(
        observations = outcome.observations.len(),
        skipped = outcome.skipped,
        "ingestion complete"
    );

    let engine = AnalysisEngine::new();
    for observation in outcome.observations {
        engine
            .process(observation)
            .context("failed to process observation")?;
    }
    engine.finalize();

    let writer = ReportWriter::with_top_limit(ConsoleSink::new(), cli.top);
    writer
        .write_report(&engine)
        .context("failed to write report")?;

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
