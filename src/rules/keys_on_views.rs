//! Keys used in views but declared in no language.

use crate::{
    core::KeyIndex,
    issues::{Finding, Rule, Severity},
};

/// One finding per used, undeclared, non-ignored key.
///
/// The finding points at the first source unit (in path order) using the key.
pub fn check_keys_on_views(index: &KeyIndex, severity: Severity) -> Vec<Finding> {
    index
        .iter()
        .filter(|record| record.is_used() && !record.is_declared() && !record.ignored)
        .map(|record| {
            let finding = Finding::new(&record.key, Rule::KeysOnViews, severity);
            match record.used_in.first() {
                Some(source) => finding.with_file(source),
                None => finding,
            }
        })
        .collect()
}
