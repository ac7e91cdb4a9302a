//! Rule evaluation over the key index.
//!
//! Each rule is a pure function taking the [`KeyIndex`] and the severity it
//! reports at. [`evaluate`] runs the enabled ones and builds the result.
//!
//! ## Module Structure
//!
//! - `keys_on_views`: keys used in views but declared in no language
//! - `zombie`: keys declared but never used
//! - `empty`: empty values and blank key literals

pub mod empty;
pub mod keys_on_views;
pub mod zombie;

pub use empty::check_empty_keys;
pub use keys_on_views::check_keys_on_views;
pub use zombie::check_zombie_keys;

use crate::{
    config::RulesConfig,
    core::{KeyIndex, LintResult},
    issues::Rule,
};

/// Classify the index under `rules`.
///
/// `max_warnings` overrides `rules.max_warning` for the threshold only;
/// findings are the same either way. Disabled rules are never evaluated.
pub fn evaluate(index: &KeyIndex, rules: &RulesConfig, max_warnings: Option<usize>) -> LintResult {
    let mut findings = Vec::new();

    for rule in Rule::all() {
        let Some(severity) = rules.severity_of(rule) else {
            continue;
        };
        findings.extend(match rule {
            Rule::KeysOnViews => check_keys_on_views(index, severity),
            Rule::ZombieKeys => check_zombie_keys(index, severity),
            Rule::EmptyKeys => check_empty_keys(index, severity),
        });
    }

    LintResult::new(findings, max_warnings.unwrap_or(rules.max_warning))
}
