//! # Note Storage
//!
//! The [`NoteStore`] trait is the document side of the host: it supplies the
//! active note (and with it the passage title) and persists the note once a
//! passage has been inserted.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a vault directory of Markdown files
//!   - `Genesis 1` resolves to `<vault>/Genesis 1.md`
//!   - a note's title is its file stem
//!
//! - [`memory::InMemoryStore`]: in-memory notes for testing
//!
//! ```text
//! vault/
//! ├── Genesis 1.md
//! ├── John 3.md
//! └── psalms/
//!     └── Psalm 23.md      # addressed as "psalms/Psalm 23.md"
//! ```

use crate::error::Result;
use crate::model::Note;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait NoteStore {
    /// Load a note by name or vault-relative path
    fn load_note(&self, name: &str) -> Result<Note>;

    /// Persist a note's content at its path
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Where a note with this name lives (whether or not it exists)
    fn note_path(&self, name: &str) -> PathBuf;
}
