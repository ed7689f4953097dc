//! # Versepad Architecture
//!
//! Versepad fetches a scripture passage named by a note's title and inserts it
//! into the note as a Markdown callout. The interesting part is a small,
//! pure pipeline; everything around it is a collaborator.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints messages, owns the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads config, resolves the active note, wires the host   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - fetch: title → query → fetch → format → insert           │
//! │  - preview, config                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (query.rs, format.rs)                                 │
//! │  - Pure functions, no I/O, never fail                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The commands only see the [`host::Host`] trait. The production host,
//! [`host::NoteHost`], combines a [`store::NoteStore`] (the note vault), a
//! [`host::TextSource`] ([`esv::EsvClient`] over HTTP) and the loaded
//! [`config::VersepadConfig`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits.
//! Failures travel as [`error::VersepadError`] up to the binary. Diagnostics go
//! through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: fetch, preview and config commands
//! - [`query`]: Query Builder
//! - [`format`]: Passage Formatter
//! - [`host`]: Host collaborator traits and the note-backed host
//! - [`esv`]: HTTP text source for the ESV API
//! - [`store`]: Note storage (vault on disk, in-memory)
//! - [`model`]: `DisplayOptions`, `Note`, `Cursor`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod esv;
pub mod format;
pub mod host;
pub mod model;
pub mod query;
pub mod store;
