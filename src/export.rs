//! Tabular Export
//!
//! Serializes merged word records as CSV through a Polars DataFrame:
//! - Header: `word,secondary_definition,example,etymology,origin`
//! - Standard minimal quoting (separator, quote, line breaks)
//! - UTF-8, CRLF line terminator on every platform
//!
//! Also reads an exported file back into records so a run can verify
//! what it wrote.

use crate::merge::WordRecord;
use crate::utils::{require_columns, string_values};
use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output columns, in header order
pub const COLUMNS: [&str; 5] = [
    "word",
    "secondary_definition",
    "example",
    "etymology",
    "origin",
];

/// Row terminator, independent of the host platform
pub const LINE_TERMINATOR: &str = "\r\n";

/// Build a five-column String DataFrame from records
///
/// Empty fields become nulls so the CSV writer leaves them as bare empty
/// cells rather than quoted empty strings.
pub fn records_to_dataframe(records: &[WordRecord]) -> Result<DataFrame> {
    let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();

    df![
        "word" => words,
        "secondary_definition" => optional_column(records, |r| r.secondary_definition.as_str()),
        "example" => optional_column(records, |r| r.example.as_str()),
        "etymology" => optional_column(records, |r| r.etymology.as_str()),
        "origin" => optional_column(records, |r| r.origin.as_str()),
    ]
    .context("Failed to build word record DataFrame")
}

fn optional_column<'a>(
    records: &'a [WordRecord],
    field: fn(&WordRecord) -> &str,
) -> Vec<Option<&'a str>> {
    records
        .iter()
        .map(|r| Some(field(r)).filter(|value| !value.is_empty()))
        .collect()
}

/// Write records as CSV to any writer
pub fn write_csv_to<W: Write>(records: &[WordRecord], mut writer: W) -> Result<()> {
    let mut df = records_to_dataframe(records)?;

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .with_quote_style(QuoteStyle::Necessary)
        .with_line_terminator(LINE_TERMINATOR.to_string())
        .finish(&mut df)
        .context("Failed to serialize word records as CSV")?;

    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}

/// Create (or truncate) `path` and write records as CSV
///
/// A failed write may leave a partial file behind.
pub fn write_csv(records: &[WordRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    write_csv_to(records, BufWriter::new(file))
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

    tracing::info!(rows = records.len(), path = %path.display(), "Wrote word records");

    Ok(())
}

/// Read an exported CSV back into records
///
/// All columns are read as strings; empty cells come back as "".
pub fn read_csv(path: &Path) -> Result<Vec<WordRecord>> {
    let context = path.display().to_string();

    // Schema inference length 0: every column is read as String
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", context))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {}", context))?;

    require_columns(&df, &COLUMNS, &context)?;

    let [words, secondary_definitions, examples, etymologies, origins]: [Vec<String>; 5] =
        COLUMNS
            .iter()
            .map(|name| string_values(&df, name, &context))
            .collect::<Result<Vec<_>>>()?
            .try_into()
            .map_err(|_| anyhow!("{}: Column count mismatch", context))?;

    // Rows are split on '\n'; a CRLF terminator can leave '\r' on the last cell
    let origins = origins
        .into_iter()
        .map(|origin| match origin.strip_suffix('\r') {
            Some(trimmed) => trimmed.to_string(),
            None => origin,
        });

    let records = words
        .into_iter()
        .zip(secondary_definitions)
        .zip(examples)
        .zip(etymologies)
        .zip(origins)
        .map(
            |((((word, secondary_definition), example), etymology), origin)| WordRecord {
                word,
                secondary_definition,
                example,
                etymology,
                origin,
            },
        )
        .collect();

    Ok(records)
}

/// Read `path` back and check it holds exactly `records`, in order
///
/// # Errors
/// Returns error if the file cannot be read, the row count differs, or a
/// row differs (the error names the first mismatching word).
pub fn verify_written(records: &[WordRecord], path: &Path) -> Result<()> {
    let written = read_csv(path)?;

    if written.len() != records.len() {
        bail!(
            "Verification failed for {}: wrote {} rows, read back {}",
            path.display(),
            records.len(),
            written.len()
        );
    }

    if let Some((expected, _)) = records
        .iter()
        .zip(&written)
        .find(|(expected, actual)| expected != actual)
    {
        bail!(
            "Verification failed for {}: row for '{}' differs after read-back",
            path.display(),
            expected.word
        );
    }

    tracing::info!(rows = written.len(), "Verified read-back");

    Ok(())
}
