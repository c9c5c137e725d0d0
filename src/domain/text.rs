//! Bilingual text fields.
//!
//! Content used to be authored as a single string with both languages
//! joined by `" | "` (Spanish first). `LocalizedText` keeps the languages
//! apart and still accepts that legacy form when deserializing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vocab::Language;

/// Separator between the Spanish and English halves of a legacy string
pub const LEGACY_DELIMITER: &str = " | ";

/// A piece of text with an English rendering and an optional Spanish one
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawText")]
pub struct LocalizedText {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
}

/// Accepted input shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Pair {
        en: String,
        #[serde(default)]
        es: Option<String>,
    },
    Legacy(String),
}

impl From<RawText> for LocalizedText {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Pair { en, es } => Self { en, es },
            RawText::Legacy(text) => Self::from_legacy(&text),
        }
    }
}

impl LocalizedText {
    /// Text available in both languages
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: Some(es.into()),
        }
    }

    /// English-only text
    pub fn en(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: None,
        }
    }

    /// Split a legacy `"<spanish> | <english>"` string.
    ///
    /// Only the first delimiter splits; a string without one is English-only.
    pub fn from_legacy(text: &str) -> Self {
        match text.split_once(LEGACY_DELIMITER) {
            Some((es, en)) => Self::new(es.trim(), en.trim()),
            None => Self::en(text.trim()),
        }
    }

    /// The rendering in `language`, if authored
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => Some(self.en.as_str()),
            Language::Es => self.es.as_deref(),
        }
    }

    /// The rendering in `language`, falling back to English
    pub fn text(&self, language: Language) -> &str {
        self.get(language).unwrap_or(&self.en)
    }

    /// Every authored rendering
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.en.as_str()).chain(self.es.as_deref())
    }

    pub fn has_spanish(&self) -> bool {
        self.es.as_deref().is_some_and(|es| !es.trim().is_empty())
    }

    /// True when the English rendering is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty()
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.en)
    }
}
