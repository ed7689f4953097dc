//! # Passage Formatter
//!
//! Converts the raw passage text returned upstream into a Markdown callout.
//!
//! The first line is the passage title and becomes the callout header. Every
//! other line is quoted. Upstream offsets section headings with indentation after
//! a run of blank lines; inside a quote block that indentation renders as a code
//! block, so the first non-blank line after a run of two or more blanks has its
//! leading whitespace removed.
//!
//! ```text
//! Genesis 1:1-2 (ESV)              > [!example]+ Genesis 1:1-2 (ESV)
//!                                  >
//! In the beginning...       =>     > In the beginning...
//!                                  >
//!                                  >
//!     The Creation                 > The Creation
//! ```

use crate::model::DisplayOptions;

pub const NO_TITLE: &str = "No Title";

const QUOTE_PREFIX: &str = "> ";

/// Tracks blank runs across one walk of the passage body.
#[derive(Debug, Default)]
struct BlankRun {
    length: usize,
    armed: bool,
}

impl BlankRun {
    fn classify<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        if line.trim().is_empty() {
            self.length += 1;
            if self.length >= 2 {
                self.armed = true;
            }
            return None;
        }

        self.length = 0;
        if self.armed {
            self.armed = false;
            Some(line.trim_start())
        } else {
            Some(line)
        }
    }
}

pub fn format_passage(raw: &str, options: &DisplayOptions) -> String {
    let mut lines = raw.lines();
    let title = match lines.next() {
        Some(t) if !t.is_empty() => t,
        _ => NO_TITLE,
    };

    let (header, prefix) = if options.use_callout {
        (
            format!("> [!{}]+ {}", options.callout_type, title),
            QUOTE_PREFIX,
        )
    } else {
        (title.to_string(), "")
    };

    let mut run = BlankRun::default();
    let mut out = vec![header];
    for line in lines {
        match run.classify(line) {
            Some(text) => out.push(format!("{}{}", prefix, text)),
            None => out.push(prefix.to_string()),
        }
    }

    out.join("\n")
}
