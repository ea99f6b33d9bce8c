//! Word-Record Merger
//!
//! Combines the three source tables into one fixed-shape record per word.
//! The key space is the union of all source keys; every field of every
//! record is present, empty when its source has no entry for the word.

use crate::sources::SourceTables;
use std::collections::BTreeMap;

/// All known metadata for one vocabulary word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub secondary_definition: String,
    pub example: String,
    pub etymology: String,
    pub origin: String,
}

impl WordRecord {
    /// Build the record for `word`, pulling each field from its source
    pub fn from_sources(word: &str, sources: &SourceTables) -> Self {
        Self {
            word: word.to_string(),
            secondary_definition: sources.secondary_definition(word).to_string(),
            example: sources.example(word).to_string(),
            etymology: sources.etymology(word).to_string(),
            origin: sources.origin(word).to_string(),
        }
    }

    /// True when all four metadata fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.secondary_definition.is_empty()
            && !self.example.is_empty()
            && !self.etymology.is_empty()
            && !self.origin.is_empty()
    }
}

/// Merge the three source tables into records sorted by word
///
/// One record per distinct key across all sources, ordered by
/// case-sensitive byte comparison of `word`.
pub fn merge(sources: &SourceTables) -> Vec<WordRecord> {
    let records: Vec<WordRecord> = sources
        .word_keys()
        .into_iter()
        .map(|word| WordRecord::from_sources(word, sources))
        .collect();

    tracing::debug!(records = records.len(), "Merged source tables");

    records
}

/// Per-field coverage over a set of merged records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub total_words: usize,
    pub with_secondary_definition: usize,
    pub with_example: usize,
    pub with_etymology: usize,
    pub with_origin: usize,
    pub complete: usize,

    /// Origin tag → number of words (empty origins excluded)
    pub origins: BTreeMap<String, usize>,
}

impl MergeSummary {
    pub fn from_records(records: &[WordRecord]) -> Self {
        let mut summary = MergeSummary {
            total_words: records.len(),
            ..Default::default()
        };

        for record in records {
            if !record.secondary_definition.is_empty() {
                summary.with_secondary_definition += 1;
            }
            if !record.example.is_empty() {
                summary.with_example += 1;
            }
            if !record.etymology.is_empty() {
                summary.with_etymology += 1;
            }
            if !record.origin.is_empty() {
                summary.with_origin += 1;
                *summary.origins.entry(record.origin.clone()).or_insert(0) += 1;
            }
            if record.is_complete() {
                summary.complete += 1;
            }
        }

        summary
    }

    /// Origin tags ordered by descending count, ties by name
    pub fn top_origins(&self, n: usize) -> Vec<(&str, usize)> {
        let mut origins: Vec<(&str, usize)> = self
            .origins
            .iter()
            .map(|(origin, count)| (origin.as_str(), *count))
            .collect();

        origins.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        origins.truncate(n);
        origins
    }
}
