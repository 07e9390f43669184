//! # Language Module
//!
//! Language code to display name lookup used by the voice-chat indicator.

use std::collections::BTreeMap;

/// Languages known out of the box, as (code, display name).
const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("da", "Dansk"),
    ("de", "Deutsch"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("he", "עברית"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português"),
    ("ru", "Русский"),
    ("zh", "中文"),
];

/// Code → name catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    names: BTreeMap<String, String>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_LANGUAGES
                .iter()
                .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
                .collect(),
        }
    }
}

impl LanguageCatalog {
    /// A catalog with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with_entry(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(code.into(), name.into());
        self
    }

    /// Display name for a code, or `""` when unknown.
    #[must_use]
    pub fn name_of(&self, code: &str) -> &str {
        self.names.get(code).map(String::as_str).unwrap_or("")
    }

    /// `(English, Deutsch)` style description, `None` for no languages.
    #[must_use]
    pub fn describe(&self, codes: &[String]) -> Option<String> {
        if codes.is_empty() {
            return None;
        }

        let names: Vec<&str> = codes.iter().map(|c| self.name_of(c)).collect();
        Some(format!("({})", names.join(", ")))
    }

    /// Iterate entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
