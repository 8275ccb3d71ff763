//! goldrate CLI: fetch the gold price and fed funds series, render four charts.
//!
//! With no arguments, downloads both public datasets and writes
//! `images/gold_interest_*.png`. Flags only relocate inputs and output.

use anyhow::{Context, Result};
use clap::Parser;
use goldrate_core::data::{SourceLocation, StandardFetcher};
use goldrate_core::PipelineConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "goldrate",
    about = "goldrate: gold prices against US interest rates, as charts"
)]
struct Cli {
    /// TOML file overriding the built-in sources and output directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write the PNG charts into. Defaults to ./images.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Fed funds CSV: URL or local path.
    #[arg(long)]
    rates_source: Option<String>,

    /// Gold price CSV (MacroTrends layout): URL or local path.
    #[arg(long)]
    gold_source: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    tracing::info!(
        rates = %config.rates.location,
        gold = %config.gold.location,
        output_dir = %config.output_dir.display(),
        "starting run"
    );

    let fetcher = StandardFetcher::new().context("failed to set up HTTP client")?;
    let summary = goldrate_report::run(&config, &fetcher).context("pipeline failed")?;

    println!(
        "Merged {} rows ({} years, {} months); wrote {} charts:",
        summary.merged_rows,
        summary.yearly_rows,
        summary.monthly_rows,
        summary.charts.len()
    );
    for path in &summary.charts {
        println!("  {}", path.display());
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(loc) = &cli.rates_source {
        config.rates.location = SourceLocation::from(loc.as_str());
    }
    if let Some(loc) = &cli.gold_source {
        config.gold.location = SourceLocation::from(loc.as_str());
    }
    Ok(config)
}
