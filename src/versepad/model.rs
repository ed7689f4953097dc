use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CALLOUT_TYPE: &str = "example";

/// Flags controlling what the upstream includes and how the passage is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_footnotes: bool,
    pub show_headings: bool,
    pub show_verse_numbers: bool,
    pub use_callout: bool,
    pub callout_type: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_footnotes: true,
            show_headings: true,
            show_verse_numbers: true,
            use_callout: true,
            callout_type: DEFAULT_CALLOUT_TYPE.to_string(),
        }
    }
}

/// An editor position. Both fields are zero-based; `ch` counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub ch: usize,
}

impl Cursor {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Byte offset of this cursor in `content`, clamped to the document.
    pub fn offset_in(&self, content: &str) -> usize {
        let mut offset = 0;
        for (i, line) in content.split('\n').enumerate() {
            if i == self.line {
                let visible = line.strip_suffix('\r').unwrap_or(line);
                let within = visible
                    .char_indices()
                    .nth(self.ch)
                    .map(|(b, _)| b)
                    .unwrap_or(visible.len());
                return offset + within;
            }
            offset += line.len() + 1;
        }
        content.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// The note's short name, used as the passage reference.
    pub title: String,
    pub path: PathBuf,
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, path: PathBuf, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path,
            content: content.into(),
        }
    }

    /// Splices `text` into the note at `cursor`.
    ///
    /// Without a cursor the text is appended on a line of its own, so a callout
    /// header never lands on the end of the note's last line.
    pub fn insert_at(&mut self, cursor: Option<Cursor>, text: &str) {
        match cursor {
            Some(c) => {
                let offset = c.offset_in(&self.content);
                self.content.insert_str(offset, text);
            }
            None => {
                if !self.content.is_empty() && !self.content.ends_with('\n') {
                    self.content.push('\n');
                }
                self.content.push_str(text);
            }
        }
    }
}
