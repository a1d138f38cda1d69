//! # Roster CLI
//!
//! The binary is thin: everything terminal-specific lives in
//! `cli/`, and this file only invokes `cli::run()` and turns an error into an
//! exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  cli/setup.rs     clap argument definitions                 │
//! │  cli/commands.rs  context wiring + one-shot handlers        │
//! │  cli/session.rs   interactive loop, owns the search term    │
//! │  cli/prompt.rs    line input, confirmations                 │
//! │  cli/render.rs    numbered list + message formatting        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                   roster::api::RosterApi
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
