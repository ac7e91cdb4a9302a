//! Key extraction from source views.
//!
//! Extraction runs the [`PatternSet`] over raw text; no per-language parser
//! is involved, so matches inside comments or strings count as usages.
//! Every captured literal is classified by [`classify_literal`]:
//!
//! - `t('home.title')` → key `home.title`
//! - `t('errors.' + code)`, `` t(`errors.${code}`) `` → namespace `errors.`
//! - `` t(`${ns}.title`) `` → dynamic, dropped
//! - `t('  ')` → blank, reported as an empty key

pub mod patterns;

use std::collections::BTreeSet;

use rayon::prelude::*;

pub use patterns::{DEFAULT_PATTERNS, PatternSet};

use crate::core::data::{FileUsages, SourceUnit, UsageSet};

/// Classification of a captured key literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLiteral<'a> {
    /// A plain key path.
    Key(&'a str),
    /// A key-path prefix ending with `.`, referencing a whole subtree.
    Namespace(&'a str),
    /// Interpolated literal that cannot be resolved to a prefix.
    Dynamic,
    /// Empty or whitespace only.
    Blank,
}

pub fn classify_literal(raw: &str) -> KeyLiteral<'_> {
    if raw.trim().is_empty() {
        return KeyLiteral::Blank;
    }

    match raw.find("${") {
        Some(index) => {
            let head = &raw[..index];
            if is_namespace_prefix(head) {
                KeyLiteral::Namespace(head)
            } else {
                KeyLiteral::Dynamic
            }
        }
        None if is_namespace_prefix(raw) => KeyLiteral::Namespace(raw),
        None => KeyLiteral::Key(raw),
    }
}

fn is_namespace_prefix(text: &str) -> bool {
    text.ends_with('.') && !text.trim_end_matches('.').trim().is_empty()
}

/// Every raw literal captured by any pattern, duplicates collapsed.
pub fn find_literals(text: &str, patterns: &PatternSet) -> BTreeSet<String> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Key paths referenced in `text`.
///
/// Only plain keys are returned; use [`analyze_source`] to also get
/// namespaces and blank literals.
pub fn extract(text: &str, patterns: &PatternSet) -> BTreeSet<String> {
    find_literals(text, patterns)
        .iter()
        .filter_map(|literal| match classify_literal(literal) {
            KeyLiteral::Key(key) => Some(key.to_string()),
            _ => None,
        })
        .collect()
}

/// Classified usages of one source unit.
pub fn analyze_source(unit: &SourceUnit, patterns: &PatternSet) -> FileUsages {
    let mut usages = FileUsages::new(&unit.id);

    for literal in find_literals(&unit.text, patterns) {
        match classify_literal(&literal) {
            KeyLiteral::Key(key) => {
                usages.keys.insert(key.to_string());
            }
            KeyLiteral::Namespace(prefix) => {
                usages.namespaces.insert(prefix.to_string());
            }
            KeyLiteral::Dynamic => {}
            KeyLiteral::Blank => {
                usages.malformed.insert(literal);
            }
        }
    }

    usages
}

/// Extract usages from all units in parallel.
pub fn extract_all(units: &[SourceUnit], patterns: &PatternSet) -> UsageSet {
    let per_file: Vec<FileUsages> = units
        .par_iter()
        .map(|unit| analyze_source(unit, patterns))
        .collect();

    per_file.into_iter().collect()
}
