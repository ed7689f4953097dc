use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "versepad")]
#[command(version)]
#[command(about = "Insert scripture passages into Markdown notes as callouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the notes (defaults to the current directory)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the passage named by a note's title and insert it into the note
    #[command(alias = "f")]
    Fetch {
        /// Note name (e.g. "Genesis 1") or vault-relative path
        note: String,

        /// Zero-based line to insert at (defaults to the end of the note)
        #[arg(long, requires = "ch")]
        line: Option<usize>,

        /// Zero-based character within the line
        #[arg(long, requires = "line")]
        ch: Option<usize>,
    },

    /// Print the formatted passage for a reference without touching any note
    #[command(alias = "p")]
    Preview {
        /// Passage reference (e.g. "John 3:16")
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., api-key, callout-type)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
