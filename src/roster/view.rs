//! # View Projection
//!
//! Derives the sequence a user should currently see from the store contents
//! and a search term. Projection never fails and never touches the source:
//! it returns a fresh `Vec`, in source order.
//!
//! Matching is a case-insensitive substring test on the record name. The query
//! is trimmed first, so a blank query matches everything.

use crate::model::Record;

/// A normalized search predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// True when the query filters nothing out.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.is_empty() || record.name.to_lowercase().contains(&self.needle)
    }
}

/// Returns the records visible under `query`, preserving their order.
pub fn project(records: &[Record], query: &str) -> Vec<Record> {
    project_with(records, &SearchQuery::new(query))
}

pub fn project_with(records: &[Record], query: &SearchQuery) -> Vec<Record> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
