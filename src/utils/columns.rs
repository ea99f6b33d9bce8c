//! DataFrame column helpers with validation
//!
//! Explicit column checks so a missing or renamed column fails with the
//! column name and the available columns, instead of a bare Polars error.

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;

/// Check that every column in `columns` is present in `df`
///
/// # Arguments
/// * `df` - DataFrame to check
/// * `columns` - Required column names
/// * `context` - Context for error messages (e.g., the file being read)
///
/// # Errors
/// Returns error naming the first missing column and listing the
/// available ones.
pub fn require_columns(df: &DataFrame, columns: &[&str], context: &str) -> Result<()> {
    let actual: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for &expected in columns {
        if !actual.iter().any(|name| name == expected) {
            return Err(anyhow!(
                "{}: Missing expected column '{}'. Available columns: {:?}",
                context, expected, actual
            ));
        }
    }

    Ok(())
}

/// Read a String column as owned values, nulls mapped to ""
pub fn string_values(df: &DataFrame, name: &str, context: &str) -> Result<Vec<String>> {
    let values = df
        .column(name)
        .with_context(|| format!("{}: Missing {} column", context, name))?
        .str()
        .with_context(|| format!("{}: Column '{}' is not a string column", context, name))?
        .into_iter()
        .map(|opt| opt.unwrap_or("").to_string())
        .collect();

    Ok(values)
}
