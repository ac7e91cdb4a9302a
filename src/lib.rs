//! keylint - translation key cross-checker
//!
//! keylint is a CLI tool and library that cross-references translation keys
//! used in application views against the keys declared in language (JSON)
//! files. It reports keys used but never declared, keys declared but never
//! used, and empty translation values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report)
//! - `config`: Rule configuration and `.keylintrc.json` loading
//! - `core`: Resolution, extraction, language model and key index
//! - `error`: Fatal error taxonomy
//! - `issues`: Finding types
//! - `rules`: Rule evaluation
//!
//! ## Example
//!
//! ```no_run
//! use keylint::core::Linter;
//!
//! let linter = Linter::new("./src/**/*.tsx", "./src/locales/*.json", None, None);
//! let result = linter.lint(None)?;
//! println!("{} zombie keys", result.count_zombie_keys());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod rules;
