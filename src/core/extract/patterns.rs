use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::config::RulesConfig;

/// Call shapes recognized without configuration.
///
/// Each pattern captures the key literal in its first group:
/// - `t('key')`, `t("key")`, `` t(`key`) `` (also `i18n.t(`, `$t(`, `this.t(`)
/// - `<Trans i18nKey="key">` and `i18nKey={'key'}`
pub const DEFAULT_PATTERNS: &[&str] = &[
    r#"\bt\(\s*'([^'\n]*)'"#,
    r#"\bt\(\s*"([^"\n]*)""#,
    r#"\bt\(\s*`([^`]*)`"#,
    r#"\bi18nKey\s*=\s*\{?\s*['"`]([^'"`\n]*)['"`]"#,
];

static DEFAULT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Ordered list of key-finding patterns: defaults first, then custom ones.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_REGEXES.clone(),
        }
    }
}

impl PatternSet {
    /// Defaults followed by `custom`.
    pub fn new(custom: Vec<Regex>) -> Self {
        let mut set = Self::default();
        set.patterns.extend(custom);
        set
    }

    /// Defaults followed by the validated `customRegExpToFindKeys`.
    pub fn from_config(rules: &RulesConfig) -> Result<Self> {
        Ok(Self::new(rules.custom_patterns()?))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }
}
