//! Utility modules shared by export and read-back
//!
//! - Columns: DataFrame column validation and extraction

pub mod columns;

pub use columns::{require_columns, string_values};
