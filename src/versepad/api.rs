//! # API Facade
//!
//! A thin layer over the commands. It loads configuration, resolves the note
//! named on the command line into the active document, and wires the
//! [`NoteHost`] that the fetch command runs against.
//!
//! `VersepadApi<S, T>` is generic over the note store and the text source:
//! - Production: `VersepadApi<FileStore, EsvClient>`
//! - Testing: `VersepadApi<InMemoryStore, StaticSource>`
//!
//! No printing happens here; results come back as [`CmdResult`].

use crate::commands;
use crate::config::VersepadConfig;
use crate::error::{Result, VersepadError};
use crate::host::{NoteHost, TextSource};
use crate::model::Cursor;
use crate::store::NoteStore;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct VersepadPaths {
    /// Directory holding `config.json`
    pub config_dir: PathBuf,
}

pub struct VersepadApi<S: NoteStore, T: TextSource> {
    store: S,
    source: T,
    paths: VersepadPaths,
}

impl<S: NoteStore, T: TextSource> VersepadApi<S, T> {
    pub fn new(store: S, source: T, paths: VersepadPaths) -> Self {
        Self {
            store,
            source,
            paths,
        }
    }

    /// Fetches the passage named by `note`'s title and inserts it into the note.
    pub fn fetch_passage(&mut self, note: &str, cursor: Option<Cursor>) -> Result<CmdResult> {
        let config = VersepadConfig::load(&self.paths.config_dir)?;
        let note = match self.store.load_note(note) {
            Ok(n) => n,
            Err(VersepadError::NoteNotFound(name)) => {
                return Err(VersepadError::MissingContext(format!(
                    "No active note found: {}",
                    name
                )))
            }
            Err(e) => return Err(e),
        };
        let path = note.path.clone();

        let mut host = NoteHost::new(&mut self.store, &self.source, &config, Some(note), cursor);
        let result = commands::fetch::run(&mut host)?;
        Ok(result.with_note_path(path))
    }

    pub fn preview(&self, title: &str) -> Result<CmdResult> {
        let config = VersepadConfig::load(&self.paths.config_dir)?;
        commands::preview::run(
            &self.source,
            config.credential(),
            title,
            &config.display_options(),
        )
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &VersepadPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
