use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

use crate::{core::data::LocaleDocument, error::LintError};

/// Extracts the language identifier from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "EN-us.json" -> Some("EN-us")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Parse a JSON document, failing with the file's path on invalid input.
pub fn parse_json_str(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| {
        LintError::Parse {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

pub fn parse_json_file(path: &Path) -> Result<LocaleDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let document = parse_json_str(&content, path)?;
    let language = extract_locale(path)
        .with_context(|| format!("Cannot derive a language from: {}", path.display()))?;

    Ok(LocaleDocument {
        language,
        file_path: path.to_string_lossy().to_string(),
        document,
    })
}

/// Parse every language file in parallel.
///
/// Any failure aborts the whole load; with several broken files the first
/// one in `paths` order is reported.
pub fn parse_language_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Vec<LocaleDocument>> {
    let results: Vec<Result<LocaleDocument>> = paths
        .par_iter()
        .map(|path| parse_json_file(path.as_ref()))
        .collect();

    results.into_iter().collect()
}
