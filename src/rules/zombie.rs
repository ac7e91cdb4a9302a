//! Keys declared in a language but never used.

use crate::{
    core::KeyIndex,
    issues::{Finding, Rule, Severity},
};

/// One finding per declared, unused, non-ignored key.
///
/// The finding lists every declaring language and points at the file of the
/// first one.
pub fn check_zombie_keys(index: &KeyIndex, severity: Severity) -> Vec<Finding> {
    index
        .iter()
        .filter(|record| record.is_declared() && !record.is_used() && !record.ignored)
        .map(|record| {
            let finding = Finding::new(&record.key, Rule::ZombieKeys, severity)
                .with_languages(record.declared_languages());
            match record.languages.values().next() {
                Some(entry) => finding.with_file(&entry.file_path),
                None => finding,
            }
        })
        .collect()
}
