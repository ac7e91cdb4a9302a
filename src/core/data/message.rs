use std::collections::BTreeMap;

use serde_json::Value;

/// A parsed language file, before flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDocument {
    /// Language identifier (file stem, e.g. "EN-us").
    pub language: String,
    /// Absolute path of the file.
    pub file_path: String,
    pub document: Value,
}

/// One declared translation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Normalized value. Empty string for empty or `null` translations.
    pub value: String,
    /// File that declared the value.
    pub file_path: String,
}

impl LanguageEntry {
    pub fn new(value: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            file_path: file_path.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Flattened key paths declared for a single language.
///
/// Several files may contribute to one language; see [`LanguageMessages::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMessages {
    pub language: String,
    /// Files merged into this language, in merge order.
    pub files: Vec<String>,
    pub entries: BTreeMap<String, LanguageEntry>,
}

impl LanguageMessages {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            files: Vec::new(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&LanguageEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another file's entries into this language.
    ///
    /// A path present in both keeps the value from `other` (last write wins).
    pub fn merge(&mut self, other: LanguageMessages) {
        self.files.extend(other.files);
        self.entries.extend(other.entries);
    }
}

/// All languages keyed by language identifier.
pub type AllLanguages = BTreeMap<String, LanguageMessages>;
