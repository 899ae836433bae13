//! # Storage Layer
//!
//! This module defines the storage abstraction for todz. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep command logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage — the whole list as one JSON
//!   document at an explicitly injected path
//! - [`memory::InMemoryStore`]: In-memory storage for tests; no persistence
//!
//! ## Document Model
//!
//! Unlike a record-per-file layout, the store is a single document: every
//! `load` reads the full list, every `save` rewrites it. Each CLI
//! invocation is a fresh process, so there is no cache to invalidate and no
//! state to reconcile between calls.
//!
//! ## Storage Format
//!
//! For `FileStore`, one pretty-printed JSON array:
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "text": "Buy milk",
//!     "done": false
//!   }
//! ]
//! ```
//!
//! Loading is deliberately lenient: a missing file, an unreadable file, and
//! malformed JSON all load as the empty list. The tool never refuses to run
//! because of what it finds on disk; only *writing* can fail.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
///
/// Implementations persist the full list as a single document.
pub trait DataStore {
    /// Load the stored list, or an empty list if no document exists or its
    /// contents cannot be read as one.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Serialize the full list and overwrite the document.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;

    /// Remove the document entirely. Returns whether one existed.
    fn clear(&mut self) -> Result<bool>;
}
