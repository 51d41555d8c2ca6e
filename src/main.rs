//! aligndiff - alignment-free directory comparison.
//!
//! Usage:
//!   aligndiff DIR1 DIR2 THRESHOLD            Compare two directories
//!   aligndiff DIR1 DIR2 0.5 --format json    Machine-readable output
//!   aligndiff --help                         Show help
//!
//! Every file in DIR1 is compared against every file in DIR2 by sliding
//! one against the other and counting the best position-wise character
//! agreement. Pairs are reported as identical, similar (at or above
//! THRESHOLD), or contribute to the unique listings.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use aligndiff_analyze::{ClassificationResult, Classifier, ClassifyConfig};
use aligndiff_scan::DirectoryListing;

#[derive(Parser)]
#[command(
    name = "aligndiff",
    version,
    about = "Compare two directories by alignment-free file similarity",
    long_about = "aligndiff scores every file pair across two directories by the \
                  maximum number of character positions that can be made to agree \
                  by sliding one file against the other, then reports identical, \
                  similar, and unique files."
)]
struct Cli {
    /// First directory
    first: PathBuf,

    /// Second directory
    second: PathBuf,

    /// Similarity threshold as a fraction in [0, 1]
    #[arg(value_parser = parse_threshold)]
    threshold: f64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Compare pairs on a single thread instead of the rayon pool
    #[arg(long)]
    sequential: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("not a number: {e}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("threshold must be in [0, 1], got {value}"));
    }
    Ok(value)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let first = DirectoryListing::load(&cli.first)
        .with_context(|| format!("Cannot list {}", cli.first.display()))?;
    let second = DirectoryListing::load(&cli.second)
        .with_context(|| format!("Cannot list {}", cli.second.display()))?;

    tracing::info!(
        first = first.len(),
        second = second.len(),
        threshold = cli.threshold,
        "comparing directories"
    );

    let first_data = first.read_contents().context("Reading first directory")?;
    let second_data = second.read_contents().context("Reading second directory")?;

    let config = ClassifyConfig::builder()
        .threshold(cli.threshold)
        .parallel(!cli.sequential)
        .build()
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;

    let result = Classifier::with_config(config).classify(&first_data, &second_data);

    match cli.format {
        OutputFormat::Text => print_report(&result, &first, &second),
        OutputFormat::Json => print_json(&result, &first, &second)?,
    }

    Ok(())
}

/// Render the four report sections in their fixed order.
fn print_report(result: &ClassificationResult, first: &DirectoryListing, second: &DirectoryListing) {
    println!("Identical files:");
    for pair in &result.identical {
        println!(
            "{} - {}",
            first.paths()[pair.first].display(),
            second.paths()[pair.second].display()
        );
    }
    println!();

    println!("Similar files:");
    for pair in &result.similar {
        println!(
            "{} - {} - {:.1}%",
            first.paths()[pair.first].display(),
            second.paths()[pair.second].display(),
            pair.similarity
        );
    }
    println!();

    println!("Unique files from the first directory:");
    for i in result.unique_first(first.len()) {
        println!("{}", first.paths()[i].display());
    }
    println!();

    println!("Unique files from the second directory:");
    for j in result.unique_second(second.len()) {
        println!("{}", second.paths()[j].display());
    }
    println!();
}

fn print_json(
    result: &ClassificationResult,
    first: &DirectoryListing,
    second: &DirectoryListing,
) -> Result<()> {
    let pair_json = |pair: &aligndiff_analyze::PairScore| {
        serde_json::json!({
            "first": first.paths()[pair.first],
            "second": second.paths()[pair.second],
            "similarity": pair.similarity,
        })
    };

    let report = serde_json::json!({
        "identical": result.identical.iter().map(pair_json).collect::<Vec<_>>(),
        "similar": result.similar.iter().map(pair_json).collect::<Vec<_>>(),
        "unique_first": result
            .unique_first(first.len())
            .into_iter()
            .map(|i| &first.paths()[i])
            .collect::<Vec<_>>(),
        "unique_second": result
            .unique_second(second.len())
            .into_iter()
            .map(|j| &second.paths()[j])
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
