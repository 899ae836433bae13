use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{coerce_id, id_label};

pub fn run<S: DataStore>(store: &mut S, raw_id: &str) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let mut result = CmdResult::default();

    let target = coerce_id(raw_id);
    match target.and_then(|id| todos.iter_mut().find(|t| t.id == id)) {
        Some(todo) => {
            // Re-marking an already-done todo is a safe no-op write.
            todo.done = true;
            let marked = todo.clone();
            store.save(&todos)?;
            result.add_message(CmdMessage::success(format!(
                "Marked todo #{} as done.",
                marked.id
            )));
            result.affected.push(marked);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Todo #{} not found.",
                id_label(raw_id)
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn marks_an_existing_todo() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();
        add::run(&mut store, "B".into()).unwrap();

        let result = run(&mut store, "1").unwrap();
        assert_eq!(result.messages[0].content, "Marked todo #1 as done.");

        let todos = store.load().unwrap();
        assert!(todos[0].done);
        assert!(!todos[1].done);
    }

    #[test]
    fn marking_twice_stays_done() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();

        run(&mut store, "1").unwrap();
        let result = run(&mut store, "1").unwrap();

        assert_eq!(result.messages[0].content, "Marked todo #1 as done.");
        assert!(store.load().unwrap()[0].done);
    }

    #[test]
    fn reports_missing_ids() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();

        let result = run(&mut store, "99").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Todo #99 not found.");
        assert!(!store.load().unwrap()[0].done);
    }

    #[test]
    fn accepts_loosely_formatted_ids() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();

        let result = run(&mut store, " 01 ").unwrap();
        assert_eq!(result.messages[0].content, "Marked todo #1 as done.");
    }

    #[test]
    fn non_numeric_ids_echo_the_raw_text() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();

        let result = run(&mut store, "abc").unwrap();
        assert_eq!(result.messages[0].content, "Todo #abc not found.");
    }
}
