use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.add(name) {
        Ok(record) => {
            result.add_message(CmdMessage::success(format!("Record added: {}", record.name)));
            result.affected_records.push(record);
        }
        Err(RosterError::InvalidInput(_)) => {
            result.add_message(CmdMessage::error("Name cannot be empty"));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
