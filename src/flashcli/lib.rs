//! # Flashcli Architecture
//!
//! Flashcli is a **UI-agnostic flashcard library**: decks of question/answer
//! cards, tagged-field parsing, search, and a quiz state machine. The
//! interactive terminal session in `main.rs` is one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Startup flags, the line-oriented session, colored output │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves the current deck, splits index from fields      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over Deck and DeckManager            │
//! │  - Returns CmdResult values, no I/O                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in memory for one run. Nothing is persisted apart from the
//! optional configuration file.
//!
//! ## Indexes
//!
//! Cards and decks are addressed by the 1-based number shown next to them.
//! Card numbers are renumbered on every delete so they always run `1..=N`.
//! See [`index`] for validation rules.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`model`]: `Flashcard` and `Deck`
//! - [`manager`]: the deck registry and current selection
//! - [`fields`]: `/q`, `/a`, `/c` field extraction and code formatting
//! - [`index`]: display index parsing
//! - [`quiz`]: quiz session state machine and results
//! - [`messages`]: user-facing message templates
//! - [`config`]: configuration file handling
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod manager;
pub mod messages;
pub mod model;
pub mod quiz;
