//! # Todz Architecture
//!
//! Todz is a **UI-agnostic todo-list library** with a thin CLI client. The
//! split matters even at this size: every behavior of the tool is callable
//! and testable without a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders output, maps exit codes        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per operation                    │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate → save, one module per operation           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Store Lifecycle
//!
//! Every invocation is a fresh process: a command loads the whole document
//! from disk, works on it in memory, and rewrites the whole document if it
//! mutated anything. There is no daemon, no cache, and no locking — the
//! tool assumes one user running one command at a time.
//!
//! Ids follow max+1 allocation (see [`model::next_id`]): gaps from
//! deletions stay open, and deleting the current maximum hands its number
//! to the next add. Both behaviors are contractual.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!    This is where the lion's share of testing lives.
//! 2. **Store** (`tests/file_store_test.rs`): `FileStore` against real
//!    temp files, including the lenient-load contract.
//! 3. **CLI** (`tests/cli_integration.rs`): the compiled binary end to
//!    end, isolated via the `TODZ_DATA_FILE` environment variable.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: One module per command, plus shared result types
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Todo` record and id allocation
//! - [`config`]: Storage path resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
