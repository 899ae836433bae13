use serde::{Deserialize, Serialize};

/// A single task entry. The serialized field names (`id`, `text`, `done`)
/// are the on-disk format; round-trip compatibility is the only contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
}

/// Next id under max+1 allocation: one more than the largest id currently
/// in the store, or 1 when the store is empty.
///
/// Gaps left by deletions are never back-filled. Deleting the current
/// maximum and adding a new record does reassign that numeric value; that
/// reuse is part of the allocation contract, not an accident.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}
