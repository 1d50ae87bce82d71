//! # Shelf Architecture
//!
//! Shelf is a **book catalog library** with a terminal menu on top. The catalog
//! itself knows nothing about terminals; the menu is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, renders tables          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the Library, the catalog store and the paths        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Turns core outcomes into a `CmdResult` with messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (library.rs, model.rs)                                │
//! │  - `Library`: the ordered, in-memory collection of `Book`s  │
//! │  - Infallible: "not found" is an Option or a bool           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence is optional and sits beside the core, not under it: the
//! [`store`] module reads and writes the line-oriented text catalog format
//! when the user asks to load or save.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values.
//! It never writes to stdout or stderr and never reads from stdin. The
//! interactive "ask the user for new values" part of updating a book is
//! injected through [`library::FieldProvider`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per catalog operation
//! - [`library`]: The collection manager
//! - [`model`]: `Book`, `BookFields` and row formatting
//! - [`store`]: Catalog file persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu loop and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
