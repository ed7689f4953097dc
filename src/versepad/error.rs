use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersepadError {
    #[error("{0}")]
    MissingContext(String),

    #[error("No API key set. Please set the ESV API key with `versepad config api-key <KEY>`")]
    MissingCredential,

    #[error("Failed to fetch passage: {0}")]
    Upstream(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VersepadError>;
