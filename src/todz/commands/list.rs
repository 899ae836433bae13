use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let todos = store.load()?;
    Ok(CmdResult::default().with_listed(todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "First".into()).unwrap();
        add::run(&mut store, "Second".into()).unwrap();

        let result = run(&store).unwrap();
        let texts: Vec<&str> = result.listed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }
}
