//! Finding types for cross-reference results.
//!
//! A finding is one classified anomaly produced by the rule evaluator. Every
//! finding carries everything the reporter needs to display it:
//! - the offending key (or the raw literal for malformed usages),
//! - the rule that flagged it and the configured severity,
//! - the file it points to and the language(s) it concerns.

use std::fmt;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each kind of finding.
///
/// Declaration order is the order findings are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// Key used in a view but declared in no language.
    KeysOnViews,
    /// Key declared in a language but never used.
    ZombieKeys,
    /// Key whose declared value is empty.
    EmptyKeys,
}

impl Rule {
    pub fn all() -> [Rule; 3] {
        [Rule::KeysOnViews, Rule::ZombieKeys, Rule::EmptyKeys]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same spelling as the configuration options.
        match self {
            Rule::KeysOnViews => write!(f, "keysOnViews"),
            Rule::ZombieKeys => write!(f, "zombieKeys"),
            Rule::EmptyKeys => write!(f, "emptyKeys"),
        }
    }
}

// ============================================================
// Finding
// ============================================================

/// One severity-tagged anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Key path, or the raw literal for a malformed usage.
    pub value: String,
    pub rule: Rule,
    pub severity: Severity,
    /// Source unit for `keysOnViews` and malformed usages, locale file otherwise.
    pub file_path: Option<String>,
    /// Languages the finding concerns (declaring languages for zombies,
    /// the offending language for empty values, empty for keys on views).
    pub languages: Vec<String>,
}

impl Finding {
    pub fn new(value: impl Into<String>, rule: Rule, severity: Severity) -> Self {
        Self {
            value: value.into(),
            rule,
            severity,
            file_path: None,
            languages: Vec::new(),
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Optional details for the "= note:" line of the report.
    pub fn details(&self) -> Option<String> {
        match self.rule {
            Rule::KeysOnViews => Some("not declared in any language".to_string()),
            Rule::ZombieKeys => Some(format!(
                "declared in {} but never used",
                self.languages.join(", ")
            )),
            Rule::EmptyKeys if self.languages.is_empty() => {
                Some("key literal is blank".to_string())
            }
            Rule::EmptyKeys => Some(format!("empty value in {}", self.languages.join(", "))),
        }
    }
}

// Ordering for reports: rule, then key, then languages, then file.
impl Ord for Finding {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rule
            .cmp(&other.rule)
            .then_with(|| self.value.cmp(&other.value))
            .then_with(|| self.languages.cmp(&other.languages))
            .then_with(|| self.file_path.cmp(&other.file_path))
            .then_with(|| self.severity.cmp(&other.severity))
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
