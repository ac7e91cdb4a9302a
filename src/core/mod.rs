//! Core cross-reference engine.
//!
//! ## Pipeline
//!
//! 1. **Resolution** (`file_scanner`): path arguments → source and language files
//! 2. **Loading** (`parsers`): raw source text and parsed JSON documents
//! 3. **Extraction** (`extract`): source text → used keys and namespaces
//! 4. **Language model** (`locale`): JSON documents → flattened keys per language
//! 5. **Indexing** (`key_index`): union of used and declared keys
//! 6. **Evaluation** ([`crate::rules`]): key index → [`LintResult`]
//!
//! [`Linter`] runs the whole pipeline.

pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod key_index;
pub mod linter;
pub mod locale;
pub mod parsers;
pub mod result;

pub use data::{
    AllLanguages, FileUsages, LanguageEntry, LanguageMessages, LocaleDocument, MalformedUsage,
    SourceUnit, UsageSet,
};
pub use extract::{PatternSet, extract, extract_all};
pub use key_index::{KeyIndex, KeyRecord, build_key_index};
pub use linter::{KeySummary, LanguageSummary, Linter};
pub use locale::{build_language, build_languages};
pub use result::LintResult;
