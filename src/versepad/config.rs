//! # Configuration
//!
//! Settings are stored as JSON in `config.json` inside the config directory
//! (`$VERSEPAD_HOME`, or the platform config dir). Every field carries a serde
//! default, so a partial file is filled in from the built-in defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-key` | `""` | ESV API token, sent as `Authorization: Token <key>` |
//! | `show-footnotes` | `true` | Include footnotes in the fetched passage |
//! | `show-headings` | `true` | Include section headings |
//! | `show-verse-numbers` | `true` | Include verse numbers |
//! | `use-callout` | `true` | Wrap the passage in a callout |
//! | `callout-type` | `example` | Callout kind (e.g. note, info, quote) |
//! | `api-url` | ESV passage-text endpoint | Base URL queried for passages |
//! | `timeout-secs` | `10` | HTTP timeout for a single fetch |

use crate::error::{Result, VersepadError};
use crate::model::{DisplayOptions, DEFAULT_CALLOUT_TYPE};
use crate::query::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const KEYS: &[&str] = &[
    "api-key",
    "show-footnotes",
    "show-headings",
    "show-verse-numbers",
    "use-callout",
    "callout-type",
    "api-url",
    "timeout-secs",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersepadConfig {
    pub api_key: String,
    pub show_footnotes: bool,
    pub show_headings: bool,
    pub show_verse_numbers: bool,
    pub use_callout: bool,
    pub callout_type: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for VersepadConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            show_footnotes: true,
            show_headings: true,
            show_verse_numbers: true,
            use_callout: true,
            callout_type: DEFAULT_CALLOUT_TYPE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl VersepadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VersepadConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_footnotes: self.show_footnotes,
            show_headings: self.show_headings,
            show_verse_numbers: self.show_verse_numbers,
            use_callout: self.use_callout,
            callout_type: self.callout_type.clone(),
        }
    }

    /// The API key, if one has been set.
    pub fn credential(&self) -> Option<&str> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(&self.api_key)
        }
    }

    /// Display value for a key. The API key is masked.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "api-key" => mask_secret(&self.api_key),
            "show-footnotes" => self.show_footnotes.to_string(),
            "show-headings" => self.show_headings.to_string(),
            "show-verse-numbers" => self.show_verse_numbers.to_string(),
            "use-callout" => self.use_callout.to_string(),
            "callout-type" => self.callout_type.clone(),
            "api-url" => self.api_url.clone(),
            "timeout-secs" => self.timeout_secs.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-key" => self.api_key = value.trim().to_string(),
            "show-footnotes" => self.show_footnotes = parse_bool(key, value)?,
            "show-headings" => self.show_headings = parse_bool(key, value)?,
            "show-verse-numbers" => self.show_verse_numbers = parse_bool(key, value)?,
            "use-callout" => self.use_callout = parse_bool(key, value)?,
            "callout-type" => {
                let kind = value.trim();
                if kind.is_empty() {
                    return Err(VersepadError::Config(
                        "callout-type cannot be empty".to_string(),
                    ));
                }
                self.callout_type = kind.to_string();
            }
            "api-url" => self.api_url = value.trim().to_string(),
            "timeout-secs" => {
                self.timeout_secs = value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|secs: &u64| *secs > 0)
                    .ok_or_else(|| {
                        VersepadError::Config(format!(
                            "Invalid value for timeout-secs: {} (expected a positive whole number)",
                            value
                        ))
                    })?
            }
            _ => return Err(VersepadError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(VersepadError::Config(format!(
            "Invalid value for {}: {} (expected true or false)",
            key, value
        ))),
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
