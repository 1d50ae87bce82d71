//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is the only place
//! in the codebase that reads stdin, writes stdout/stderr or decides exit
//! codes.
//!
//! ## Modes
//!
//! - `shelf` / `shelf menu`: the numbered interactive menu. Reads a selection,
//!   dispatches to the API, prints the result, repeats until Exit or end of
//!   input.
//! - `shelf list`: one-shot table of the catalog file, optionally searched
//!   and sorted.
//! - `shelf config`: show or change configuration.
//!
//! Invalid input is recovered here by re-prompting; it never reaches the
//! library.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, log level, tracing initialization
//! - `commands`: Context wiring and per-command handlers
//! - `menu`: The menu loop
//! - `prompt`: Line and number prompts, interactive update values
//! - `render`: Output formatting (tables, colored messages)

mod commands;
mod menu;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
