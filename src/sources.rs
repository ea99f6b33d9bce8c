//! Word Metadata Source Tables
//!
//! Three independent word-keyed tables, each describing a subset of the
//! metadata known for a vocabulary word:
//! - Secondary definitions: word → alternate dictionary sense
//! - Examples: word → usage sentence
//! - Etymology/origin: word → derivation note + language tag
//!
//! The curated tables ship with the crate as JSON under `data/` and are
//! parsed at most once per process.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;

const SECONDARY_DEFINITIONS_JSON: &str = include_str!("../data/secondary_definitions.json");
const EXAMPLES_JSON: &str = include_str!("../data/examples.json");
const ETYMOLOGY_ORIGIN_JSON: &str = include_str!("../data/etymology_origin.json");

static EMBEDDED: OnceLock<SourceTables> = OnceLock::new();

/// Errors raised while decoding a source table
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to parse source table '{table}': {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Etymology note and origin tag for one word
///
/// Either key may be missing from the source data; both default to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyOrigin {
    #[serde(default)]
    pub etymology: String,
    #[serde(default)]
    pub origin: String,
}

impl EtymologyOrigin {
    pub fn new(etymology: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            etymology: etymology.into(),
            origin: origin.into(),
        }
    }
}

/// The three immutable word-keyed source tables
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    /// Word → secondary definition
    pub secondary_definitions: FxHashMap<String, String>,

    /// Word → example sentence
    pub examples: FxHashMap<String, String>,

    /// Word → etymology note and origin tag
    pub etymology_origin: FxHashMap<String, EtymologyOrigin>,
}

impl SourceTables {
    pub fn new(
        secondary_definitions: FxHashMap<String, String>,
        examples: FxHashMap<String, String>,
        etymology_origin: FxHashMap<String, EtymologyOrigin>,
    ) -> Self {
        Self {
            secondary_definitions,
            examples,
            etymology_origin,
        }
    }

    /// Decode all three tables from JSON objects
    ///
    /// Duplicate keys inside one object resolve last-wins.
    pub fn from_json(
        secondary_definitions: &str,
        examples: &str,
        etymology_origin: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            secondary_definitions: parse_table("secondary_definitions", secondary_definitions)?,
            examples: parse_table("examples", examples)?,
            etymology_origin: parse_table("etymology_origin", etymology_origin)?,
        })
    }

    /// Curated tables bundled with the crate, decoded once per process
    pub fn embedded() -> Result<&'static SourceTables, SourceError> {
        if let Some(tables) = EMBEDDED.get() {
            return Ok(tables);
        }

        let tables = Self::from_json(
            SECONDARY_DEFINITIONS_JSON,
            EXAMPLES_JSON,
            ETYMOLOGY_ORIGIN_JSON,
        )?;

        tracing::debug!(
            secondary_definitions = tables.secondary_definitions.len(),
            examples = tables.examples.len(),
            etymology_origin = tables.etymology_origin.len(),
            "Decoded embedded source tables"
        );

        Ok(EMBEDDED.get_or_init(|| tables))
    }

    /// Sorted union of the keys of all three tables
    pub fn word_keys(&self) -> BTreeSet<&str> {
        self.secondary_definitions
            .keys()
            .chain(self.examples.keys())
            .chain(self.etymology_origin.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn secondary_definition(&self, word: &str) -> &str {
        self.secondary_definitions
            .get(word)
            .map_or("", String::as_str)
    }

    pub fn example(&self, word: &str) -> &str {
        self.examples.get(word).map_or("", String::as_str)
    }

    pub fn etymology(&self, word: &str) -> &str {
        self.etymology_origin
            .get(word)
            .map_or("", |entry| entry.etymology.as_str())
    }

    pub fn origin(&self, word: &str) -> &str {
        self.etymology_origin
            .get(word)
            .map_or("", |entry| entry.origin.as_str())
    }
}

fn parse_table<T>(table: &'static str, json: &str) -> Result<FxHashMap<String, T>, SourceError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(json).map_err(|source| SourceError::Parse { table, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> SourceTables {
        let mut secondary = FxHashMap::default();
        secondary.insert("aporia".to_string(), "A logical impasse.".to_string());

        let mut examples = FxHashMap::default();
        examples.insert("aporia".to_string(), "The aporia left them puzzled.".to_string());
        examples.insert("zest".to_string(), "She approached life with zest.".to_string());

        let mut etymology = FxHashMap::default();
        etymology.insert(
            "cusp".to_string(),
            EtymologyOrigin::new("From Latin cuspis 'point, apex'.", "Latin"),
        );

        SourceTables::new(secondary, examples, etymology)
    }

    #[test]
    fn test_word_keys_is_sorted_union() {
        let tables = sample_tables();
        let keys: Vec<&str> = tables.word_keys().into_iter().collect();

        // "aporia" appears twice across sources but only once in the union
        assert_eq!(keys, vec!["aporia", "cusp", "zest"]);
    }

    #[test]
    fn test_word_keys_case_sensitive() {
        let mut tables = sample_tables();
        tables
            .secondary_definitions
            .insert("Zeal".to_string(), "Capitalised".to_string());

        let keys: Vec<&str> = tables.word_keys().into_iter().collect();

        // Uppercase sorts before lowercase
        assert_eq!(keys, vec!["Zeal", "aporia", "cusp", "zest"]);
    }

    #[test]
    fn test_lookup_or_default() {
        let tables = sample_tables();

        assert_eq!(tables.secondary_definition("aporia"), "A logical impasse.");
        assert_eq!(tables.secondary_definition("cusp"), "");
        assert_eq!(tables.example("zest"), "She approached life with zest.");
        assert_eq!(tables.example("cusp"), "");
        assert_eq!(tables.etymology("cusp"), "From Latin cuspis 'point, apex'.");
        assert_eq!(tables.origin("cusp"), "Latin");
        assert_eq!(tables.etymology("aporia"), "");
        assert_eq!(tables.origin("unknown"), "");
    }

    #[test]
    fn test_from_json_missing_fields_default() {
        let tables = SourceTables::from_json(
            r#"{"lore": "Traditional knowledge."}"#,
            "{}",
            r#"{"lore": {"etymology": "From Old English lār."}}"#,
        )
        .unwrap();

        assert_eq!(tables.etymology("lore"), "From Old English lār.");
        assert_eq!(tables.origin("lore"), "");
    }

    #[test]
    fn test_from_json_duplicate_key_last_wins() {
        let tables = SourceTables::from_json(
            r#"{"staid": "first", "staid": "second"}"#,
            "{}",
            "{}",
        )
        .unwrap();

        assert_eq!(tables.secondary_definitions.len(), 1);
        assert_eq!(tables.secondary_definition("staid"), "second");
    }

    #[test]
    fn test_from_json_reports_table_name() {
        let err = SourceTables::from_json("{}", r#"["not", "a", "map"]"#, "{}").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("examples"));
    }

    #[test]
    fn test_embedded_tables_load_once() {
        let first = SourceTables::embedded().unwrap();
        let second = SourceTables::embedded().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.secondary_definitions.len(), 382);
        assert_eq!(first.examples.len(), 162);
        assert_eq!(first.etymology_origin.len(), 98);
    }
}
