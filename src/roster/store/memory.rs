use super::{DataStore, IdGenerator, SequentialIds};
use crate::error::{Result, RosterError};
use crate::model::{normalize_name, Record, RecordId};
use tracing::debug;

/// `Vec`-backed record store.
///
/// Records live only as long as the store does.
#[derive(Debug, Clone)]
pub struct InMemoryStore<G: IdGenerator = SequentialIds> {
    records: Vec<Record>,
    ids: G,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl<G: IdGenerator> InMemoryStore<G> {
    pub fn with_ids(ids: G) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl<G: IdGenerator> DataStore for InMemoryStore<G> {
    fn add(&mut self, name: &str) -> Result<Record> {
        let Some(name) = normalize_name(name) else {
            debug!(kind = "invalid_input", "add rejected");
            return Err(RosterError::InvalidInput("name cannot be empty".into()));
        };

        let Some(id) = self.ids.next_id() else {
            debug!(kind = "ids_exhausted", "add rejected");
            return Err(RosterError::IdsExhausted);
        };
        if self.position(id).is_some() {
            debug!(%id, kind = "duplicate_id", "add rejected");
            return Err(RosterError::DuplicateId(id));
        }

        let record = Record::new(id, name);
        self.records.push(record.clone());
        debug!(%id, name_len = record.name.len(), total = self.records.len(), "record added");
        Ok(record)
    }

    fn update(&mut self, id: RecordId, new_name: &str) -> Result<Record> {
        let Some(pos) = self.position(id) else {
            debug!(%id, kind = "not_found", "update rejected");
            return Err(RosterError::NotFound(id));
        };
        let Some(name) = normalize_name(new_name) else {
            debug!(%id, kind = "invalid_input", "update rejected");
            return Err(RosterError::InvalidInput("name cannot be empty".into()));
        };

        let record = &mut self.records[pos];
        record.name = name;
        debug!(%id, name_len = record.name.len(), "record renamed");
        Ok(record.clone())
    }

    fn remove(&mut self, id: RecordId) -> Result<Record> {
        let Some(pos) = self.position(id) else {
            debug!(%id, kind = "not_found", "remove rejected");
            return Err(RosterError::NotFound(id));
        };
        let record = self.records.remove(pos);
        debug!(%id, total = self.records.len(), "record removed");
        Ok(record)
    }

    fn list(&self) -> &[Record] {
        &self.records
    }

    fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Record {}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_named(mut self, names: &[&str]) -> Self {
            for name in names {
                self.store.add(name).unwrap();
            }
            self
        }

        /// Looks up a record id by exact name. Panics if absent.
        pub fn id_of(&self, name: &str) -> RecordId {
            self.store
                .list()
                .iter()
                .find(|r| r.name == name)
                .map(|r| r.id)
                .unwrap_or_else(|| panic!("no record named {name:?}"))
        }
    }
}
