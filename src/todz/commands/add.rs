use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{next_id, Todo};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, text: String) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let id = next_id(&todos);
    let todo = Todo::new(id, text);
    todos.push(todo.clone());
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added todo #{}: \"{}\"",
        id, todo.text
    )));
    result.affected.push(todo);
    Ok(result)
}
