//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whichever UI is driving it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (display index strings → [`DisplayIndex`] → record ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no search state. Callers pass the search term their user is
//! looking at, so index resolution happens against the same view that was
//! rendered.
//!
//! `RosterApi<S: DataStore>` is generic over the store, so tests can drive it
//! with their own store or id generator.

use crate::commands;
use crate::error::{Result, RosterError};
use crate::index::{parse_indexes, DisplayIndex, DisplayRecord};
use crate::model::{Record, RecordId};
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_record(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name)
    }

    /// Renames the record shown at `index` in the view for `query`.
    pub fn rename_record(
        &mut self,
        query: &str,
        index: &str,
        new_name: &str,
    ) -> Result<commands::CmdResult> {
        let index = DisplayIndex::from_str(index).map_err(RosterError::Api)?;
        commands::rename::run(&mut self.store, query, index, new_name)
    }

    /// Resolves then removes every record named by `indexes` in the view for
    /// `query`. Nothing is removed if any index fails to resolve.
    pub fn remove_records<I: AsRef<str>>(
        &mut self,
        query: &str,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_indexes(indexes).map_err(RosterError::Api)?;
        let indexes = commands::helpers::expand_in_view(&self.store, query, &selectors)?;
        let targets = commands::helpers::resolve_indexes(&self.store, query, &indexes)?;
        commands::remove::run(&mut self.store, &targets)
    }

    /// Removes rows previously obtained from [`RosterApi::resolve`].
    pub fn remove_resolved(&mut self, rows: &[DisplayRecord]) -> Result<commands::CmdResult> {
        let targets: Vec<(DisplayIndex, RecordId)> =
            rows.iter().map(|dr| (dr.index, dr.record.id)).collect();
        commands::remove::run(&mut self.store, &targets)
    }

    /// Looks up the rows `indexes` refer to in the view for `query`.
    pub fn resolve<I: AsRef<str>>(&self, query: &str, indexes: &[I]) -> Result<Vec<DisplayRecord>> {
        let selectors = parse_indexes(indexes).map_err(RosterError::Api)?;
        let indexes = commands::helpers::expand_in_view(&self.store, query, &selectors)?;
        commands::helpers::records_by_indexes(&self.store, query, &indexes)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_records(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn find_record(&self, id: RecordId) -> Option<&Record> {
        self.store.find(id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(names: &[&str]) -> RosterApi<InMemoryStore> {
        let store = StoreFixture::new().with_named(names).store;
        RosterApi::new(store, PathBuf::from(".roster"))
    }

    fn names<S: DataStore>(api: &RosterApi<S>) -> Vec<String> {
        api.store().list().iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn add_dispatches_to_store() {
        let mut api = api_with(&[]);
        let result = api.add_record("Alice").unwrap();
        let id = result.affected_records[0].id;
        assert_eq!(api.find_record(id).unwrap().name, "Alice");
    }

    #[test]
    fn rename_parses_index() {
        let mut api = api_with(&["Harry Potter", "Edward"]);
        api.rename_record("", "2", "Ed").unwrap();
        assert_eq!(names(&api), vec!["Harry Potter", "Ed"]);

        let err = api.rename_record("", "two", "Ed").unwrap_err();
        assert!(matches!(err, RosterError::Api(_)));
    }

    #[test]
    fn remove_accepts_ranges() {
        let mut api = api_with(&["A", "B", "C", "D"]);
        let result = api.remove_records("", &["2-3"]).unwrap();
        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(names(&api), vec!["A", "D"]);
    }

    #[test]
    fn remove_with_unknown_index_changes_nothing() {
        let mut api = api_with(&["A", "B"]);
        assert!(api.remove_records("", &["1", "9"]).is_err());
        assert_eq!(names(&api), vec!["A", "B"]);
    }

    #[test]
    fn range_past_the_view_changes_nothing() {
        let mut api = api_with(&["A", "B", "C"]);
        match api.remove_records("", &["2-9"]) {
            Err(RosterError::Api(msg)) => assert!(msg.contains("Index 9 not found")),
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert_eq!(names(&api), vec!["A", "B", "C"]);
    }

    #[test]
    fn huge_range_is_rejected_not_expanded() {
        let mut api = api_with(&["A", "B", "C"]);
        assert!(matches!(
            api.remove_records("", &["1-18446744073709551615"]),
            Err(RosterError::Api(_))
        ));
        assert!(matches!(
            api.resolve("", &["1-99999999999"]),
            Err(RosterError::Api(_))
        ));
        assert_eq!(names(&api), vec!["A", "B", "C"]);
    }

    #[test]
    fn resolve_then_remove() {
        let mut api = api_with(&["Harry Potter", "Edward", "Noname"]);
        let rows = api.resolve("ed", &["1"]).unwrap();
        assert_eq!(rows[0].record.name, "Edward");

        api.remove_resolved(&rows).unwrap();
        assert_eq!(names(&api), vec!["Harry Potter", "Noname"]);
    }

    #[test]
    fn search_and_list_return_numbered_rows() {
        let api = api_with(&["Harry Potter", "Edward", "Noname"]);
        assert_eq!(api.list_records().unwrap().listed_records.len(), 3);

        let found = api.search_records("HA").unwrap().listed_records;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.name, "Harry Potter");
    }

    #[test]
    fn config_uses_config_dir() {
        let temp = tempfile::tempdir().unwrap();
        let api = RosterApi::new(InMemoryStore::new(), temp.path().to_path_buf());
        api.config(ConfigAction::Set("name-width".into(), "30".into()))
            .unwrap();
        assert!(temp.path().join("config.json").exists());
        assert_eq!(api.config_dir(), temp.path());
    }
}
