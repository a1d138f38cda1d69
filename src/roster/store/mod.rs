//! # Storage Layer
//!
//! The [`DataStore`] trait is the record store contract: the single owner of
//! the canonical, insertion-ordered record sequence. Everything above it
//! (commands, API, CLI) works against the trait.
//!
//! ## Guarantees
//!
//! - Ids are pairwise distinct at every point in time and never reissued.
//! - New records are appended; nothing reorders existing records.
//! - Every call either commits fully or rejects with no change. Validation
//!   happens before the sequence is touched.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store. Records do not outlive
//!   the process.
//!
//! ## Identity
//!
//! Ids come from an [`IdGenerator`]. The default, [`SequentialIds`], is a
//! monotonic counter. A custom generator can be injected, but it must never
//! hand out an id twice during the store's lifetime; the store refuses an id
//! that collides with a live record.

use crate::error::Result;
use crate::model::{Record, RecordId};

pub mod memory;

/// Source of record ids.
pub trait IdGenerator {
    /// The next unused id, or `None` once the source is exhausted.
    fn next_id(&mut self) -> Option<RecordId>;
}

/// Monotonic counter. The first id issued is `#1` unless started elsewhere.
///
/// After `u64::MAX` has been issued the counter is exhausted and stays so.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<RecordId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(RecordId::new(current))
    }
}

/// The record store contract.
pub trait DataStore {
    /// Append a new record with the trimmed `name`.
    ///
    /// Fails with `InvalidInput` when the name is blank.
    fn add(&mut self, name: &str) -> Result<Record>;

    /// Rename a record in place, keeping its position.
    ///
    /// Fails with `NotFound` for an unknown id, or `InvalidInput` when the new
    /// name is blank (the old name is kept).
    fn update(&mut self, id: RecordId, new_name: &str) -> Result<Record>;

    /// Erase a record permanently. Fails with `NotFound` for an unknown id.
    fn remove(&mut self, id: RecordId) -> Result<Record>;

    /// All records in insertion order.
    fn list(&self) -> &[Record];

    fn find(&self, id: RecordId) -> Option<&Record>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
