use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::DisplayIndex;
use crate::model::RecordId;
use crate::store::DataStore;

/// Removes already-resolved targets. The display index is only used for
/// messages.
///
/// A target that is already gone (e.g. listed twice) is reported and skipped.
pub fn run<S: DataStore>(store: &mut S, targets: &[(DisplayIndex, RecordId)]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (display_index, id) in targets {
        match store.remove(*id) {
            Ok(record) => {
                result.add_message(CmdMessage::success(format!(
                    "Record removed ({}): {}",
                    display_index, record.name
                )));
                result.affected_records.push(record);
            }
            Err(RosterError::NotFound(id)) => {
                result.add_message(CmdMessage::info(format!(
                    "Record {} was already removed",
                    id
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
