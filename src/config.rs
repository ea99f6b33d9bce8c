//! Export configuration
//!
//! Defaults reproduce the plain invocation: write `combined_word_data.csv`
//! in the working directory and read it back afterwards. Environment
//! variables can override both.

use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "combined_word_data.csv";

/// Output path override
pub const OUTPUT_ENV: &str = "WORD_DATA_OUTPUT";

/// Set to 0/false/no/off to skip the read-back check
pub const VERIFY_ENV: &str = "WORD_DATA_VERIFY";

/// `RUST_LOG` fallback: library and binary targets at info
pub const DEFAULT_LOG_FILTER: &str = "word_data_merger=info,merge_words=info,warn";

/// Where to write the merged table and whether to read it back
///
/// `ExportConfig::default()` (and `from_env()` with neither variable set)
/// reproduces the plain no-argument run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_path: PathBuf,
    pub verify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            verify: true,
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_path = lookup(OUTPUT_ENV)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        let verify = lookup(VERIFY_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.verify);

        Self { output_path, verify }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
