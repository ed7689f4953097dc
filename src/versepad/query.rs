//! # Query Builder
//!
//! Shapes the query string for the passage-text endpoint from a note title and
//! the current [`DisplayOptions`].
//!
//! The upstream includes footnotes, headings and verse numbers unless told
//! otherwise, so a parameter is only emitted to turn a feature *off*. An enabled
//! option contributes nothing to the query.

use crate::model::DisplayOptions;

pub const DEFAULT_API_URL: &str = "https://api.esv.org/v3/passage/text/";

const INDENT_PARAGRAPHS_OFF: &str = "indent-paragraphs=0";

pub fn build_query(title: &str, options: &DisplayOptions) -> String {
    let mut params = vec![
        format!("q={}", urlencoding::encode(title)),
        INDENT_PARAGRAPHS_OFF.to_string(),
    ];

    let toggles = [
        (options.show_footnotes, "include-footnotes"),
        (options.show_headings, "include-headings"),
        (options.show_verse_numbers, "include-verse-numbers"),
    ];
    for (enabled, name) in toggles {
        if !enabled {
            params.push(format!("{}=false", name));
        }
    }

    params.join("&")
}

pub fn passage_url(base: &str, query: &str) -> String {
    format!("{}?{}", base, query)
}
