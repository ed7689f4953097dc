use super::NoteStore;
use crate::error::{Result, VersepadError};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

const NOTE_EXT: &str = "md";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn title_of(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl NoteStore for FileStore {
    fn load_note(&self, name: &str) -> Result<Note> {
        let path = self.note_path(name);
        if !path.is_file() {
            return Err(VersepadError::NoteNotFound(name.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        Ok(Note::new(Self::title_of(&path), path, content))
    }

    fn save_note(&mut self, note: &Note) -> Result<()> {
        if let Some(parent) = note.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&note.path, &note.content)?;
        Ok(())
    }

    fn note_path(&self, name: &str) -> PathBuf {
        let candidate = Path::new(name);
        let path = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        };

        if candidate.extension().is_some_and(|ext| ext == NOTE_EXT) {
            path
        } else {
            // `set_extension` would clobber dotted names like "Genesis 1.1".
            let mut file = path.into_os_string();
            file.push(".");
            file.push(NOTE_EXT);
            PathBuf::from(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_note_path_appends_markdown_extension() {
        let (dir, store) = vault();
        assert_eq!(store.note_path("Genesis 1"), dir.path().join("Genesis 1.md"));
    }

    #[test]
    fn test_note_path_keeps_markdown_extension() {
        let (dir, store) = vault();
        assert_eq!(
            store.note_path("psalms/Psalm 23.md"),
            dir.path().join("psalms/Psalm 23.md")
        );
        assert_eq!(
            store.note_path("Genesis 1.1"),
            dir.path().join("Genesis 1.1.md")
        );
    }

    #[test]
    fn test_load_note_uses_file_stem_as_title() {
        let (dir, store) = vault();
        fs::write(dir.path().join("John 3.md"), "# John 3\n").unwrap();

        let note = store.load_note("John 3").unwrap();
        assert_eq!(note.title, "John 3");
        assert_eq!(note.content, "# John 3\n");
        assert_eq!(note.path, dir.path().join("John 3.md"));
    }

    #[test]
    fn test_load_missing_note() {
        let (_dir, store) = vault();
        match store.load_note("Obadiah 1") {
            Err(VersepadError::NoteNotFound(name)) => assert_eq!(name, "Obadiah 1"),
            other => panic!("Expected NoteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_save_roundtrip() {
        let (dir, mut store) = vault();
        fs::create_dir_all(dir.path().join("psalms")).unwrap();
        fs::write(dir.path().join("psalms/Psalm 23.md"), "").unwrap();

        let mut note = store.load_note("psalms/Psalm 23.md").unwrap();
        assert_eq!(note.title, "Psalm 23");
        note.insert_at(None, "The Lord is my shepherd");
        store.save_note(&note).unwrap();

        let reloaded = store.load_note("psalms/Psalm 23.md").unwrap();
        assert_eq!(reloaded.content, "The Lord is my shepherd");
    }
}
