use super::DataStore;
use crate::error::Result;
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The document is an `Option` so that `clear` semantics match the file
/// store: `None` models "no file on disk", `Some(vec![])` models an
/// existing but empty document.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Option<Vec<Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.doc.clone().unwrap_or_default())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.doc = Some(todos.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool> {
        Ok(self.doc.take().is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::next_id;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed `count` open todos with max+1 ids and generated text.
        pub fn with_todos(mut self, count: usize) -> Self {
            let mut todos = self.store.load().unwrap();
            for i in 0..count {
                let id = next_id(&todos);
                todos.push(Todo::new(id, format!("Test todo {}", i + 1)));
            }
            self.store.save(&todos).unwrap();
            self
        }

        /// Seed one record with an explicit id, for shapes the allocator
        /// would never produce on its own (gaps from deletions).
        pub fn with_todo(mut self, id: u64, text: &str, done: bool) -> Self {
            let mut todos = self.store.load().unwrap();
            todos.push(Todo {
                id,
                text: text.to_string(),
                done,
            });
            self.store.save(&todos).unwrap();
            self
        }
    }
}
