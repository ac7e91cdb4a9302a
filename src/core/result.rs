//! Queryable output of a lint run.

use crate::issues::{Finding, Rule};

/// Ordered findings plus the aggregates derived from them.
///
/// Built once per evaluation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    findings: Vec<Finding>,
    max_count_warning: usize,
    total_keys: usize,
    source_files_checked: usize,
    language_files_checked: usize,
}

impl LintResult {
    /// Findings are sorted by rule, key, then language.
    pub fn new(mut findings: Vec<Finding>, max_count_warning: usize) -> Self {
        findings.sort();
        Self {
            findings,
            max_count_warning,
            total_keys: 0,
            source_files_checked: 0,
            language_files_checked: 0,
        }
    }

    pub fn with_stats(
        mut self,
        total_keys: usize,
        source_files_checked: usize,
        language_files_checked: usize,
    ) -> Self {
        self.total_keys = total_keys;
        self.source_files_checked = source_files_checked;
        self.language_files_checked = language_files_checked;
        self
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    fn of_rule(&self, rule: Rule) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.rule == rule)
    }

    pub fn get_keys_on_views(&self) -> Vec<&Finding> {
        self.of_rule(Rule::KeysOnViews).collect()
    }

    pub fn has_keys_on_views(&self) -> bool {
        self.of_rule(Rule::KeysOnViews).next().is_some()
    }

    pub fn count_keys_on_views(&self) -> usize {
        self.of_rule(Rule::KeysOnViews).count()
    }

    pub fn get_zombie_keys(&self) -> Vec<&Finding> {
        self.of_rule(Rule::ZombieKeys).collect()
    }

    pub fn has_zombie_keys(&self) -> bool {
        self.of_rule(Rule::ZombieKeys).next().is_some()
    }

    pub fn count_zombie_keys(&self) -> usize {
        self.of_rule(Rule::ZombieKeys).count()
    }

    pub fn get_empty_keys(&self) -> Vec<&Finding> {
        self.of_rule(Rule::EmptyKeys).collect()
    }

    pub fn has_empty_keys(&self) -> bool {
        self.of_rule(Rule::EmptyKeys).next().is_some()
    }

    pub fn count_empty_keys(&self) -> usize {
        self.of_rule(Rule::EmptyKeys).count()
    }

    pub fn count_warnings(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    pub fn count_errors(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Warning threshold this result was evaluated against.
    pub fn max_count_warning(&self) -> usize {
        self.max_count_warning
    }

    /// At least one warning, and at least `max_count_warning` of them.
    ///
    /// A threshold of 0 therefore trips on the first warning, while a run
    /// with no warnings is never full, whatever the threshold. Errors are
    /// never counted.
    pub fn is_full_of_warning(&self) -> bool {
        let warnings = self.count_warnings();
        warnings > 0 && warnings >= self.max_count_warning
    }

    /// Whether the run should fail: any error, or too many warnings.
    pub fn is_failed(&self) -> bool {
        self.has_errors() || self.is_full_of_warning()
    }

    /// Distinct key paths seen, ignored keys included.
    pub fn total_keys(&self) -> usize {
        self.total_keys
    }

    pub fn source_files_checked(&self) -> usize {
        self.source_files_checked
    }

    pub fn language_files_checked(&self) -> usize {
        self.language_files_checked
    }
}
