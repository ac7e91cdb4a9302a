//! Loaders for the files a lint run reads.
//!
//! - `json`: language files (JSON documents, one language per file stem)
//! - `source`: source views (raw text)

pub mod json;
pub mod source;
