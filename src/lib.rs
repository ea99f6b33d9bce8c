//! Word Data Merger
//!
//! Consolidates curated vocabulary-word metadata into one CSV table.
//!
//! - `sources/`: Embedded word-keyed source tables with lookup-or-default access
//! - `merge/`: Key union and fixed-shape `WordRecord` construction
//! - `export/`: CSV serialization (and read-back) with Polars
//! - `config/`: Output path and verification settings

pub mod config;
pub mod export;
pub mod merge;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use config::ExportConfig;
pub use export::{
    read_csv, records_to_dataframe, verify_written, write_csv, write_csv_to, COLUMNS,
    LINE_TERMINATOR,
};
pub use merge::{merge, MergeSummary, WordRecord};
pub use sources::{EtymologyOrigin, SourceError, SourceTables};
