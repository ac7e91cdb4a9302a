//! Empty translation values and blank key literals.

use crate::{
    core::KeyIndex,
    issues::{Finding, Rule, Severity},
};

/// One finding per (key, language) with an empty value, plus one per blank
/// literal found in a source unit.
pub fn check_empty_keys(index: &KeyIndex, severity: Severity) -> Vec<Finding> {
    let empty_values = index
        .iter()
        .filter(|record| !record.ignored)
        .flat_map(|record| {
            record
                .languages
                .iter()
                .filter(|(_, entry)| entry.is_empty())
                .map(move |(language, entry)| {
                    Finding::new(&record.key, Rule::EmptyKeys, severity)
                        .with_file(&entry.file_path)
                        .with_languages([language])
                })
        });

    let blank_literals = index.malformed.iter().map(|usage| {
        Finding::new(&usage.literal, Rule::EmptyKeys, severity).with_file(&usage.source)
    });

    empty_values.chain(blank_literals).collect()
}
