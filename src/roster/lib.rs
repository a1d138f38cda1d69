//! # Roster Architecture
//!
//! Roster is a **UI-agnostic list manager**: an insertion-ordered collection of
//! named records that can be added, renamed, removed and searched, plus a
//! projection that turns the collection into the numbered view a user sees.
//! The terminal client in `cli/` is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders, owns the search term │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → record ids)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) + Projection (view.rs, index.rs)            │
//! │  - DataStore trait, InMemoryStore                           │
//! │  - project(records, query) → filtered copy, display numbers │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity vs. position
//!
//! A record's [`model::RecordId`] is issued once by a monotonic counter and
//! never reused. The numbers users type are positions in the current view
//! ([`index::DisplayIndex`]), computed at render time and resolved back to ids
//! before any mutation.
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward nothing prints, prompts or exits. There is no global
//! store either: each [`api::RosterApi`] owns its store, so independent stores
//! can coexist (and do, in tests).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one module per operation
//! - [`store`]: the record store contract and its in-memory implementation
//! - [`view`]: search normalization and projection
//! - [`index`]: display numbering and index parsing
//! - [`model`]: `Record`, `RecordId`
//! - [`config`]: `config.json` handling
//! - [`init`]: config dir resolution and seeded startup
//! - [`logging`]: subscriber setup for binaries
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;
