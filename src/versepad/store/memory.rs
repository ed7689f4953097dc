use super::NoteStore;
use crate::error::{Result, VersepadError};
use crate::model::Note;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: HashMap<PathBuf, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note with the given title and content, replacing any existing one.
    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        let path = self.note_path(title);
        self.notes
            .insert(path.clone(), Note::new(title, path, content));
        self
    }
}

impl NoteStore for InMemoryStore {
    fn load_note(&self, name: &str) -> Result<Note> {
        self.notes
            .get(&self.note_path(name))
            .cloned()
            .ok_or_else(|| VersepadError::NoteNotFound(name.to_string()))
    }

    fn save_note(&mut self, note: &Note) -> Result<()> {
        self.notes.insert(note.path.clone(), note.clone());
        Ok(())
    }

    fn note_path(&self, name: &str) -> PathBuf {
        let name = name.strip_suffix(".md").unwrap_or(name);
        PathBuf::from(format!("{}.md", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.load_note("Jude 1"),
            Err(VersepadError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_with_note_and_load() {
        let store = InMemoryStore::new().with_note("Genesis 1", "intro\n");
        let note = store.load_note("Genesis 1").unwrap();
        assert_eq!(note.title, "Genesis 1");
        assert_eq!(note.content, "intro\n");

        // ".md" suffix addresses the same note
        assert_eq!(store.load_note("Genesis 1.md").unwrap(), note);
    }

    #[test]
    fn test_save_replaces_content() {
        let mut store = InMemoryStore::new().with_note("John 1", "");
        let mut note = store.load_note("John 1").unwrap();
        note.insert_at(None, "In the beginning was the Word");
        store.save_note(&note).unwrap();

        assert_eq!(
            store.load_note("John 1").unwrap().content,
            "In the beginning was the Word"
        );
    }
}
