//! Core data types shared by every pipeline phase.
//!
//! ## Module Structure
//!
//! - `message`: Declared keys per language (LanguageMessages, LanguageEntry)
//! - `source`: Source units and the usages extracted from them

pub mod message;
pub mod source;

pub use message::{AllLanguages, LanguageEntry, LanguageMessages, LocaleDocument};
pub use source::{FileUsages, MalformedUsage, SourceUnit, UsageSet};
