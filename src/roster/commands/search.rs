use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::visible_records;

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(visible_records(store, query)))
}
