//! ESV passage-text transport.
//!
//! `GET {api_url}?{query}` with `Authorization: Token <key>`. The JSON body
//! carries a `passages` array; the passages are joined with a blank line so the
//! formatter sees one continuous text.

use crate::config::VersepadConfig;
use crate::error::{Result, VersepadError};
use crate::host::TextSource;
use crate::query::passage_url;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const PASSAGE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Deserialize)]
pub struct PassageResponse {
    #[serde(default)]
    pub canonical: String,
    pub passages: Vec<String>,
}

impl PassageResponse {
    pub fn joined(&self) -> String {
        self.passages.join(PASSAGE_SEPARATOR)
    }
}

pub struct EsvClient {
    agent: ureq::Agent,
    base_url: String,
}

impl EsvClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &VersepadConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl TextSource for EsvClient {
    fn fetch_text(&self, query: &str, credential: &str) -> Result<String> {
        let url = passage_url(&self.base_url, query);
        debug!(%url, "requesting passage");

        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", format!("Token {}", credential))
            .call()
            .map_err(|e| VersepadError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "passage request rejected");
            return Err(VersepadError::Upstream(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )));
        }

        let passages: PassageResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| VersepadError::Upstream(format!("malformed response body: {}", e)))?;
        debug!(canonical = %passages.canonical, count = passages.passages.len(), "parsed response");

        let text = passages.joined();
        info!(bytes = text.len(), "fetched passage");
        Ok(text)
    }
}
