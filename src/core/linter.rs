//! Entry point wiring resolution, loading and evaluation together.
//!
//! A [`Linter`] holds the path arguments and rule configuration of one
//! project. The project is resolved and loaded on first use and cached, so
//! `lint`, `get_languages` and `get_keys` share one pass over the files.

use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    config::RulesConfig,
    core::{
        KeyIndex, LintResult,
        data::AllLanguages,
        extract::{PatternSet, extract_all},
        file_scanner::{FileKind, IgnoreSet, resolve_paths},
        key_index::build_key_index,
        locale::build_languages,
        parsers::{json::parse_language_files, source::read_source_files},
    },
    rules::evaluate,
};

/// One loaded language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: String,
    pub key_count: usize,
    pub files: Vec<String>,
}

/// One key of the union of used and declared keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySummary {
    pub key: String,
    /// Declaring languages, sorted.
    pub languages: Vec<String>,
    pub used: bool,
    pub ignored: bool,
}

struct LoadedProject {
    index: KeyIndex,
    languages: AllLanguages,
    source_files: usize,
    language_files: usize,
}

pub struct Linter {
    project: String,
    languages: String,
    ignore: Option<String>,
    rules: RulesConfig,
    /// Directory relative path arguments resolve against.
    base_dir: PathBuf,
    verbose: bool,
    loaded: OnceCell<LoadedProject>,
}

impl Linter {
    /// `project` and `languages` are comma-separated lists of globs,
    /// directories or files. `rules` defaults to [`RulesConfig::default`].
    pub fn new(
        project: impl Into<String>,
        languages: impl Into<String>,
        ignore: Option<&str>,
        rules: Option<RulesConfig>,
    ) -> Self {
        Self {
            project: project.into(),
            languages: languages.into(),
            ignore: ignore.map(String::from),
            rules: rules.unwrap_or_default(),
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            verbose: false,
            loaded: OnceCell::new(),
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Evaluate the project.
    ///
    /// `max_warnings` overrides the configured `maxWarning` threshold.
    /// Fails on invalid configuration, a path argument matching no file, or
    /// a language file that is not valid JSON.
    pub fn lint(&self, max_warnings: Option<usize>) -> Result<LintResult> {
        let project = self.project()?;
        let result = evaluate(&project.index, &self.rules, max_warnings).with_stats(
            project.index.len(),
            project.source_files,
            project.language_files,
        );
        Ok(result)
    }

    /// Loaded languages with their key counts, sorted by language.
    pub fn get_languages(&self) -> Result<Vec<LanguageSummary>> {
        let project = self.project()?;
        Ok(project
            .languages
            .values()
            .map(|messages| LanguageSummary {
                language: messages.language.clone(),
                key_count: messages.len(),
                files: messages.files.clone(),
            })
            .collect())
    }

    /// Every used or declared key, sorted by key path.
    pub fn get_keys(&self) -> Result<Vec<KeySummary>> {
        let project = self.project()?;
        Ok(project
            .index
            .iter()
            .map(|record| KeySummary {
                key: record.key.clone(),
                languages: record.declared_languages().cloned().collect(),
                used: record.is_used(),
                ignored: record.ignored,
            })
            .collect())
    }

    fn project(&self) -> Result<&LoadedProject> {
        if let Some(project) = self.loaded.get() {
            return Ok(project);
        }
        let project = self.load()?;
        Ok(self.loaded.get_or_init(|| project))
    }

    fn load(&self) -> Result<LoadedProject> {
        // Configuration errors come before any file is touched.
        let patterns = PatternSet::from_config(&self.rules)?;

        let base_dir = self.base_dir.as_path();
        let verbose = self.verbose;
        let ignore = IgnoreSet::parse(self.ignore.as_deref(), base_dir, verbose);
        let (project, languages) = (self.project.as_str(), self.languages.as_str());

        let (source_paths, language_paths) = rayon::join(
            || resolve_paths(project, FileKind::Source, &ignore, base_dir, verbose),
            || resolve_paths(languages, FileKind::Language, &ignore, base_dir, verbose),
        );
        let source_paths = source_paths?;
        let language_paths = language_paths?;

        let (units, documents) = rayon::join(
            || read_source_files(&source_paths),
            || parse_language_files(&language_paths),
        );
        let units = units?;
        let documents = documents?;

        let usages = extract_all(&units, &patterns);
        let languages = build_languages(&documents);
        let index = build_key_index(&usages, &languages, &self.rules);

        if verbose {
            eprintln!(
                "Note: {} key(s) across {} language(s)",
                index.len(),
                languages.len()
            );
        }

        Ok(LoadedProject {
            index,
            languages,
            source_files: source_paths.len(),
            language_files: language_paths.len(),
        })
    }
}
