use crate::commands::fetch::render_passage;
use crate::commands::CmdResult;
use crate::error::{Result, VersepadError};
use crate::host::TextSource;
use crate::model::DisplayOptions;

/// Renders the passage for `title` without writing it anywhere.
pub fn run<T: TextSource>(
    source: &T,
    credential: Option<&str>,
    title: &str,
    options: &DisplayOptions,
) -> Result<CmdResult> {
    let key = credential.ok_or(VersepadError::MissingCredential)?;
    let passage = render_passage(title, options, |query| source.fetch_text(query, key))?;

    let warning = passage.blank_warning(title);
    let mut result = CmdResult::default().with_rendered(passage.text);
    if let Some(message) = warning {
        result.add_message(message);
    }
    Ok(result)
}
