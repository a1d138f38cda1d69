use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::records_by_indexes;

/// Renames the record at `index` in the view for `query`.
pub fn run<S: DataStore>(
    store: &mut S,
    query: &str,
    index: DisplayIndex,
    new_name: &str,
) -> Result<CmdResult> {
    let target = records_by_indexes(store, query, &[index])?.remove(0);
    let mut result = CmdResult::default();

    match store.update(target.record.id, new_name) {
        Ok(record) => {
            result.add_message(CmdMessage::success(format!(
                "Record renamed ({}): {} -> {}",
                index, target.record.name, record.name
            )));
            result.affected_records.push(record);
        }
        Err(RosterError::InvalidInput(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "Name cannot be empty; kept {}",
                target.record.name
            )));
        }
        Err(RosterError::NotFound(id)) => {
            result.add_message(CmdMessage::warning(format!("Record {} no longer exists", id)));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
