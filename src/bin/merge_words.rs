//! Merge the curated word tables into one CSV file
//!
//! Usage:
//!   cargo run --bin merge_words
//!
//! Environment:
//!   WORD_DATA_OUTPUT  output path (default: combined_word_data.csv)
//!   WORD_DATA_VERIFY  set to 0 to skip reading the file back
//!   RUST_LOG          log filter (default: word_data_merger=info,merge_words=info,warn)

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_data_merger::config::DEFAULT_LOG_FILTER;
use word_data_merger::{
    merge, verify_written, write_csv, ExportConfig, MergeSummary, SourceTables,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ExportConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  Output: {}", config.output_path.display());
    tracing::info!("  Verify: {}", config.verify);

    let sources = SourceTables::embedded().context("Failed to load embedded word tables")?;
    tracing::info!(
        "Sources: {} secondary definitions, {} examples, {} etymology/origin entries",
        sources.secondary_definitions.len(),
        sources.examples.len(),
        sources.etymology_origin.len()
    );

    let records = merge(sources);
    write_csv(&records, &config.output_path)?;

    if config.verify {
        verify_written(&records, &config.output_path)?;
    }

    let summary = MergeSummary::from_records(&records);
    tracing::info!("Words: {}", summary.total_words);
    tracing::info!("  Secondary definitions: {}", summary.with_secondary_definition);
    tracing::info!("  Examples: {}", summary.with_example);
    tracing::info!("  Etymology: {}", summary.with_etymology);
    tracing::info!("  Origin: {}", summary.with_origin);
    tracing::info!("  Complete: {}", summary.complete);
    for (origin, count) in summary.top_origins(5) {
        tracing::debug!("  {}: {}", origin, count);
    }

    println!("CSV file '{}' created.", config.output_path.display());

    Ok(())
}
