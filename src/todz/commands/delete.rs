use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{coerce_id, id_label};

pub fn run<S: DataStore>(store: &mut S, raw_id: &str) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let mut result = CmdResult::default();

    let before = todos.len();
    if let Some(id) = coerce_id(raw_id) {
        todos.retain(|t| t.id != id);
    }

    if todos.len() == before {
        result.add_message(CmdMessage::warning(format!(
            "Todo #{} not found.",
            id_label(raw_id)
        )));
        return Ok(result);
    }

    store.save(&todos)?;
    result.add_message(CmdMessage::success(format!(
        "Deleted todo #{}.",
        id_label(raw_id)
    )));
    Ok(result)
}
