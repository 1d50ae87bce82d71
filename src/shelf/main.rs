//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/shelf/cli/)                                 │
//! │  - clap argument parsing and tracing setup (setup.rs)       │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - The interactive menu loop (menu.rs, prompt.rs)           │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!              API Layer (api.rs) → commands → Library
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible for
//! **all** user-facing concerns: argument parsing, prompting, rendering and
//! exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
