use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VersepadError};
use crate::format::format_passage;
use crate::host::Host;
use crate::model::DisplayOptions;
use crate::query::build_query;
use tracing::{debug, warn};

/// A formatted passage. `blank` is set when the upstream returned no text.
#[derive(Debug)]
pub struct RenderedPassage {
    pub text: String,
    pub blank: bool,
}

impl RenderedPassage {
    /// The warning to surface for a blank passage, if any.
    pub fn blank_warning(&self, title: &str) -> Option<CmdMessage> {
        self.blank
            .then(|| CmdMessage::warning(format!("No passage text returned for {}", title)))
    }
}

/// Query, fetch and format one passage. `fetch` receives the query string.
pub fn render_passage<F>(title: &str, options: &DisplayOptions, fetch: F) -> Result<RenderedPassage>
where
    F: FnOnce(&str) -> Result<String>,
{
    let query = build_query(title, options);
    debug!(%query, "built passage query");

    let raw = fetch(&query).inspect_err(|e| warn!(error = %e, title, "fetch failed"))?;
    let blank = raw.trim().is_empty();
    if blank {
        warn!(title, "upstream returned no passage text");
    }
    Ok(RenderedPassage {
        text: format_passage(&raw, options),
        blank,
    })
}

/// Fetches the passage named by the active note and inserts it at the cursor.
///
/// The document is only touched once the fetch has succeeded.
pub fn run<H: Host>(host: &mut H) -> Result<CmdResult> {
    let title = host
        .active_title()
        .ok_or_else(|| VersepadError::MissingContext("No active note found".to_string()))?;

    if host.credential().is_none() {
        return Err(VersepadError::MissingCredential);
    }

    let options = host.display_options();
    let passage = render_passage(&title, &options, |query| host.fetch_text(query))?;
    host.insert_at_cursor(&passage.text)?;

    let warning = passage.blank_warning(&title);
    let mut result = CmdResult::default().with_rendered(passage.text);
    if let Some(message) = warning {
        result.add_message(message);
    }
    result.add_message(CmdMessage::success(format!("Passage added to {}", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    /// Scripted host recording what reaches the network and the document.
    #[derive(Default)]
    struct FakeHost {
        title: Option<String>,
        credential: Option<String>,
        options: DisplayOptions,
        response: Option<std::result::Result<String, String>>,
        queries: std::cell::RefCell<Vec<String>>,
        inserted: Vec<String>,
        has_editor: bool,
    }

    impl FakeHost {
        fn ready(title: &str, response: &str) -> Self {
            Self {
                title: Some(title.to_string()),
                credential: Some("key".to_string()),
                response: Some(Ok(response.to_string())),
                has_editor: true,
                ..Default::default()
            }
        }
    }

    impl Host for FakeHost {
        fn active_title(&self) -> Option<String> {
            self.title.clone()
        }

        fn credential(&self) -> Option<String> {
            self.credential.clone()
        }

        fn display_options(&self) -> DisplayOptions {
            self.options.clone()
        }

        fn fetch_text(&self, query: &str) -> Result<String> {
            self.queries.borrow_mut().push(query.to_string());
            match &self.response {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(msg)) => Err(VersepadError::Upstream(msg.clone())),
                None => Err(VersepadError::Upstream("no response".into())),
            }
        }

        fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
            if !self.has_editor {
                return Err(VersepadError::MissingContext("No active editor".into()));
            }
            self.inserted.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_inserts_formatted_callout() {
        let mut host = FakeHost::ready("Genesis 1:1", "Genesis 1:1 (ESV)\n\nIn the beginning...\n");

        let result = run(&mut host).unwrap();

        let expected = "> [!example]+ Genesis 1:1 (ESV)\n> \n> In the beginning...";
        assert_eq!(host.inserted, vec![expected.to_string()]);
        assert_eq!(result.rendered.as_deref(), Some(expected));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Passage added to Genesis 1:1");
        assert_eq!(
            *host.queries.borrow(),
            vec!["q=Genesis%201%3A1&indent-paragraphs=0".to_string()]
        );
    }

    #[test]
    fn test_options_shape_query_and_output() {
        let mut host = FakeHost::ready("Psalm 23", "Psalm 23 (ESV)\n\n\n    The Lord Is My Shepherd\nbody");
        host.options = DisplayOptions {
            show_headings: false,
            use_callout: false,
            ..Default::default()
        };

        run(&mut host).unwrap();

        assert_eq!(
            host.queries.borrow()[0],
            "q=Psalm%2023&indent-paragraphs=0&include-headings=false"
        );
        assert_eq!(
            host.inserted[0],
            "Psalm 23 (ESV)\n\n\nThe Lord Is My Shepherd\nbody"
        );
    }

    #[test]
    fn test_missing_title() {
        let mut host = FakeHost::ready("x", "x");
        host.title = None;

        assert!(matches!(
            run(&mut host),
            Err(VersepadError::MissingContext(_))
        ));
        assert!(host.queries.borrow().is_empty());
        assert!(host.inserted.is_empty());
    }

    #[test]
    fn test_missing_credential_skips_network() {
        let mut host = FakeHost::ready("John 3", "John 3");
        host.credential = None;

        assert!(matches!(
            run(&mut host),
            Err(VersepadError::MissingCredential)
        ));
        assert!(host.queries.borrow().is_empty());
        assert!(host.inserted.is_empty());
    }

    #[test]
    fn test_upstream_failure_leaves_document_untouched() {
        let mut host = FakeHost::ready("John 3", "");
        host.response = Some(Err("401 Unauthorized".into()));

        match run(&mut host) {
            Err(e @ VersepadError::Upstream(_)) => {
                assert!(e.to_string().contains("401 Unauthorized"));
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
        assert!(host.inserted.is_empty());
    }

    #[test]
    fn test_missing_editor_is_reported() {
        let mut host = FakeHost::ready("John 3", "John 3 (ESV)\nbody");
        host.has_editor = false;

        assert!(matches!(
            run(&mut host),
            Err(VersepadError::MissingContext(_))
        ));
    }

    #[test]
    fn test_empty_response_inserts_placeholder_header() {
        let mut host = FakeHost::ready("Nowhere 99", "");
        let result = run(&mut host).unwrap();
        assert_eq!(host.inserted, vec!["> [!example]+ No Title".to_string()]);

        let levels: Vec<_> = result.messages.iter().map(|m| m.level.clone()).collect();
        assert_eq!(levels, vec![MessageLevel::Warning, MessageLevel::Success]);
        assert_eq!(
            result.messages[0].content,
            "No passage text returned for Nowhere 99"
        );
    }

    #[test]
    fn test_whitespace_only_response_is_blank() {
        let passage = render_passage("Nowhere 99", &DisplayOptions::default(), |_| {
            Ok("\n  \n".to_string())
        })
        .unwrap();
        assert!(passage.blank);
        assert!(passage.blank_warning("Nowhere 99").is_some());
    }

    #[test]
    fn test_render_passage_propagates_fetch_error() {
        let res = render_passage("Jude 1", &DisplayOptions::default(), |_| {
            Err(VersepadError::Upstream("offline".into()))
        });
        assert!(matches!(res, Err(VersepadError::Upstream(_))));
    }
}
