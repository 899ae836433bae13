//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all todz operations, regardless of the UI driving them.
//!
//! The facade **dispatches** to the right command function and returns
//! structured `Result<CmdResult>` values. It does no business logic (that
//! lives in `commands/*.rs`) and no I/O formatting (that lives in the CLI
//! layer).
//!
//! ## Generic Over DataStore
//!
//! `TodzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodzApi<FileStore>`
//! - Testing: `TodzApi<InMemoryStore>`
//!
//! Tests here verify dispatch only; each command's logic is tested in its
//! own module.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct TodzApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a new todo. `text` must be non-empty; the CLI boundary
    /// enforces that before calling in.
    pub fn add(&mut self, text: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn done(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::done::run(&mut self.store, id)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_then_list_round_trips_through_the_facade() {
        let mut api = TodzApi::new(InMemoryStore::new());
        api.add("Buy milk".into()).unwrap();

        let result = api.list().unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].text, "Buy milk");
    }

    #[test]
    fn mutating_calls_reach_the_store() {
        let mut api = TodzApi::new(InMemoryStore::new());
        api.add("A".into()).unwrap();
        api.done("1").unwrap();
        assert!(api.list().unwrap().listed[0].done);

        api.delete("1").unwrap();
        assert!(api.list().unwrap().listed.is_empty());

        api.add("B".into()).unwrap();
        api.clear().unwrap();
        assert!(api.list().unwrap().listed.is_empty());
    }
}
