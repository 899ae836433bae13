use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.clear()? {
        result.add_message(CmdMessage::success("All todos cleared."));
    } else {
        result.add_message(CmdMessage::info("No todos to clear."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list, MessageLevel};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clearing_without_a_document_is_a_noop() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "No todos to clear.");
    }

    #[test]
    fn clearing_removes_everything() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();
        add::run(&mut store, "B".into()).unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "All todos cleared.");
        assert!(list::run(&store).unwrap().listed.is_empty());
    }

    #[test]
    fn ids_restart_after_a_clear() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "A".into()).unwrap();
        add::run(&mut store, "B".into()).unwrap();
        run(&mut store).unwrap();

        let result = add::run(&mut store, "Fresh".into()).unwrap();
        assert_eq!(result.affected[0].id, 1);
    }
}
