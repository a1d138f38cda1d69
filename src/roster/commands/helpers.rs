use crate::error::{Result, RosterError};
use crate::index::{expand_indexes, index_records, DisplayIndex, DisplayRecord, IndexSelector};
use crate::model::RecordId;
use crate::store::DataStore;
use crate::view::project;

/// The numbered view a user sees for `query`.
pub fn visible_records<S: DataStore>(store: &S, query: &str) -> Vec<DisplayRecord> {
    index_records(project(store.list(), query))
}

/// Maps display indexes in the view for `query` onto record ids.
///
/// All indexes must resolve; otherwise nothing is returned.
pub fn resolve_indexes<S: DataStore>(
    store: &S,
    query: &str,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, RecordId)>> {
    let visible = visible_records(store, query);

    indexes
        .iter()
        .map(|idx| {
            visible
                .iter()
                .find(|dr| &dr.index == idx)
                .map(|dr| (*idx, dr.record.id))
                .ok_or_else(|| RosterError::Api(format!("Index {} not found in current view", idx)))
        })
        .collect()
}

/// Expands parsed selectors against the view for `query`.
///
/// A position past the last visible row is reported before any range is
/// expanded.
pub fn expand_in_view<S: DataStore>(
    store: &S,
    query: &str,
    selectors: &[IndexSelector],
) -> Result<Vec<DisplayIndex>> {
    let view_len = visible_records(store, query).len();
    expand_indexes(selectors, view_len)
        .map_err(|idx| RosterError::Api(format!("Index {} not found in current view", idx)))
}

/// Like [`resolve_indexes`], returning the full rows.
pub fn records_by_indexes<S: DataStore>(
    store: &S,
    query: &str,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayRecord>> {
    let visible = visible_records(store, query);

    indexes
        .iter()
        .map(|idx| {
            visible
                .iter()
                .find(|dr| &dr.index == idx)
                .cloned()
                .ok_or_else(|| RosterError::Api(format!("Index {} not found in current view", idx)))
        })
        .collect()
}
