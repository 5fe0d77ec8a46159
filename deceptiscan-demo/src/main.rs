//! DeceptiScan demo
//!
//! Scores a batch of product reviews and prints the analysis report as JSON.
//!
//! Usage:
//!   deceptiscan-demo [OPTIONS]
//!
//! Options:
//!   --config <PATH>    TOML config (seed, lexicon), default: deceptiscan.toml
//!   --reviews <PATH>   JSON array of review records, default: built-in samples
//!   --seed <N>         Seed for the placeholder style scorer, overrides config
//!   --url <URL>        Product URL recorded in the report
//!   --product <NAME>   Product name recorded in the report

mod samples;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use deceptiscan::ScanConfig;
use deceptiscan_report::{records_from_json, ReviewPipeline};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deceptiscan-demo")]
#[command(about = "Score product reviews for fake likelihood and print a JSON report")]
struct Args {
    /// Path to the TOML config. A missing file means defaults.
    #[arg(long, default_value = "deceptiscan.toml")]
    config: PathBuf,

    /// JSON array of review records. Built-in samples when omitted.
    #[arg(long)]
    reviews: Option<PathBuf>,

    /// Seed for the placeholder style scorer.
    #[arg(long)]
    seed: Option<u64>,

    /// Product URL recorded in the report.
    #[arg(long, default_value = samples::SAMPLE_URL)]
    url: String,

    /// Product name recorded in the report.
    #[arg(long, default_value = samples::SAMPLE_PRODUCT)]
    product: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ScanConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let records = match &args.reviews {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            records_from_json(&json)?
        }
        None => samples::sample_records()?,
    };
    tracing::info!(reviews = records.len(), seed = ?config.seed, "analyzing reviews");

    let mut pipeline = ReviewPipeline::from_config(&config)?;
    let report = pipeline.report(args.url, args.product, &records);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
