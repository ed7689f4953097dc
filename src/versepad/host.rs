//! # Host Collaborators
//!
//! The fetch command never touches a concrete editor, settings panel, or HTTP
//! client. Everything outside the query/format pipeline is reached through the
//! [`Host`] trait:
//!
//! - **Title source**: [`Host::active_title`]
//! - **Configuration**: [`Host::credential`], [`Host::display_options`]
//! - **Text source**: [`Host::fetch_text`]
//! - **Document sink**: [`Host::insert_at_cursor`]
//!
//! [`NoteHost`] is the production host: a note from a [`NoteStore`], a
//! [`TextSource`] for the network, and the loaded [`VersepadConfig`].

use crate::config::VersepadConfig;
use crate::error::{Result, VersepadError};
use crate::model::{Cursor, DisplayOptions, Note};
use crate::store::NoteStore;
use tracing::info;

/// Retrieves raw passage text for a query string.
pub trait TextSource {
    fn fetch_text(&self, query: &str, credential: &str) -> Result<String>;
}

pub trait Host {
    /// Short name of the active document, if there is one
    fn active_title(&self) -> Option<String>;

    /// API credential for the text source
    fn credential(&self) -> Option<String>;

    fn display_options(&self) -> DisplayOptions;

    fn fetch_text(&self, query: &str) -> Result<String>;

    /// Writes `text` into the active document at the cursor
    fn insert_at_cursor(&mut self, text: &str) -> Result<()>;
}

pub struct NoteHost<'a, S: NoteStore, T: TextSource> {
    store: &'a mut S,
    source: &'a T,
    config: &'a VersepadConfig,
    note: Option<Note>,
    cursor: Option<Cursor>,
}

impl<'a, S: NoteStore, T: TextSource> NoteHost<'a, S, T> {
    pub fn new(
        store: &'a mut S,
        source: &'a T,
        config: &'a VersepadConfig,
        note: Option<Note>,
        cursor: Option<Cursor>,
    ) -> Self {
        Self {
            store,
            source,
            config,
            note,
            cursor,
        }
    }
}

impl<S: NoteStore, T: TextSource> Host for NoteHost<'_, S, T> {
    fn active_title(&self) -> Option<String> {
        self.note.as_ref().map(|n| n.title.clone())
    }

    fn credential(&self) -> Option<String> {
        self.config.credential().map(str::to_string)
    }

    fn display_options(&self) -> DisplayOptions {
        self.config.display_options()
    }

    fn fetch_text(&self, query: &str) -> Result<String> {
        let key = self
            .config
            .credential()
            .ok_or(VersepadError::MissingCredential)?;
        self.source.fetch_text(query, key)
    }

    fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
        let note = self.note.as_mut().ok_or_else(|| {
            VersepadError::MissingContext("No active note to insert into".to_string())
        })?;

        note.insert_at(self.cursor, text);
        self.store.save_note(note)?;
        info!(path = %note.path.display(), bytes = text.len(), "inserted passage");
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::RefCell;

    /// Returns canned text and records every query it is asked for.
    #[derive(Debug, Default)]
    pub struct StaticSource {
        pub text: String,
        pub queries: RefCell<Vec<String>>,
        pub credentials: RefCell<Vec<String>>,
    }

    impl StaticSource {
        pub fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.queries.borrow().len()
        }
    }

    impl TextSource for StaticSource {
        fn fetch_text(&self, query: &str, credential: &str) -> Result<String> {
            self.queries.borrow_mut().push(query.to_string());
            self.credentials.borrow_mut().push(credential.to_string());
            Ok(self.text.clone())
        }
    }

    /// Fails every fetch with an upstream error.
    #[derive(Debug)]
    pub struct FailingSource(pub String);

    impl TextSource for FailingSource {
        fn fetch_text(&self, _query: &str, _credential: &str) -> Result<String> {
            Err(VersepadError::Upstream(self.0.clone()))
        }
    }
}
