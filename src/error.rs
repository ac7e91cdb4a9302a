//! Fatal error taxonomy.
//!
//! These errors abort a lint run. Findings are never errors; they live in
//! [`LintResult`](crate::core::LintResult). Library functions return
//! `anyhow::Result`, so callers classify failures with
//! `err.downcast_ref::<LintError>()`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// Unknown option, out-of-domain value or malformed custom pattern.
    #[error("Invalid rules configuration: {0}")]
    Config(String),

    /// The project argument resolved to zero source files.
    #[error("No source files found for '{0}'")]
    NoSourceFiles(String),

    /// The languages argument resolved to zero language files.
    #[error("No language files found for '{0}'")]
    NoLanguageFiles(String),

    /// A language file is not valid JSON.
    #[error("Can't parse JSON file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
