//! Resolution of path arguments into concrete file lists.
//!
//! A path argument is a comma-separated list whose entries are globs,
//! directories or files. Blank, `null`, `undefined` and `''` entries are
//! skipped. The ignore argument uses the same grammar.

use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use glob::{MatchOptions, Pattern, glob};
use walkdir::WalkDir;

use crate::error::LintError;

/// Directories never descended into when walking a directory entry.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", ".svn", ".hg"];

const SOURCE_EXTENSIONS: &[&str] = &["html", "htm", "js", "jsx", "ts", "tsx", "vue", "mjs", "cjs"];

/// What a path argument is expected to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Language,
}

impl FileKind {
    /// Whether a file found while walking a directory belongs to this kind.
    pub fn accepts(self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str());
        match self {
            FileKind::Source => ext.is_some_and(|e| SOURCE_EXTENSIONS.contains(&e)),
            FileKind::Language => ext == Some("json"),
        }
    }
}

/// Check if an entry contains glob syntax.
/// Entries without it are treated as literal paths.
fn is_glob_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '[', '{'])
}

/// Split a comma-separated path argument into usable entries.
pub fn split_path_list(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|entry| entry.trim().trim_matches(['\'', '"']).trim())
        .filter(|entry| !entry.is_empty() && *entry != "null" && *entry != "undefined")
        .map(String::from)
        .collect()
}

/// Expand `{a,b}` groups: `*.{html,ts}` → `*.html`, `*.ts`.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let index = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(index),
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(&splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| {
            let alternative = &pattern[w[0] + 1..w[1]];
            expand_braces(&format!("{}{}{}", prefix, alternative, suffix))
        })
        .collect()
}

/// Make `path` absolute against `base_dir` and drop `.`/`..` components.
pub fn absolutize(base_dir: &Path, path: &str) -> PathBuf {
    let joined = base_dir.join(path);
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Canonical form of an existing path, lexical form otherwise.
fn canonical(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path).unwrap_or(path)
}

/// Files and globs excluded from resolution.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Scanned files are canonical, so patterns are anchored at the canonical
    /// `base_dir`.
    pub fn parse(spec: Option<&str>, base_dir: &Path, verbose: bool) -> Self {
        let mut set = IgnoreSet::default();
        let base_dir = canonical(base_dir.to_path_buf());
        let base_dir = base_dir.as_path();

        for entry in spec.map(split_path_list).unwrap_or_default() {
            if is_glob_pattern(&entry) {
                for expanded in expand_braces(&entry) {
                    let absolute = absolutize(base_dir, &expanded);
                    match Pattern::new(&absolute.to_string_lossy()) {
                        Ok(pattern) => set.patterns.push(pattern),
                        Err(e) => {
                            if verbose {
                                eprintln!(
                                    "{} Invalid ignore pattern '{}': {}",
                                    "warning:".bold().yellow(),
                                    entry,
                                    e
                                );
                            }
                        }
                    }
                }
            } else {
                set.paths.push(canonical(absolutize(base_dir, &entry)));
            }
        }

        set
    }

    /// A literal path ignores itself and everything below it. Wildcards in
    /// patterns stay within one path segment, as they do for project globs.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.paths.iter().any(|ignored| path.starts_with(ignored)) {
            return true;
        }
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(path, options))
    }
}

/// Result of resolving a path argument.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Absolute, canonical, sorted and deduplicated.
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

pub fn scan_files(
    spec: &str,
    kind: FileKind,
    ignore: &IgnoreSet,
    base_dir: &Path,
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in split_path_list(spec) {
        if is_glob_pattern(&entry) {
            for expanded in expand_braces(&entry) {
                let absolute = absolutize(base_dir, &expanded);
                match glob(&absolute.to_string_lossy()) {
                    Ok(paths) => {
                        for path in paths {
                            match path {
                                Ok(path) if path.is_file() => {
                                    result.files.insert(canonical(path));
                                }
                                Ok(_) => {}
                                Err(e) => {
                                    result.skipped_count += 1;
                                    if verbose {
                                        eprintln!(
                                            "{} Cannot access path: {}",
                                            "warning:".bold().yellow(),
                                            e
                                        );
                                    }
                                }
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                entry,
                                e
                            );
                        }
                    }
                }
            }
            continue;
        }

        let path = canonical(absolutize(base_dir, &entry));
        if path.is_file() {
            result.files.insert(path);
        } else if path.is_dir() {
            walk_dir(&path, kind, &mut result, verbose);
        } else if verbose {
            eprintln!(
                "{} Path does not exist: {}",
                "warning:".bold().yellow(),
                path.display()
            );
        }
    }

    result.files.retain(|path| !ignore.is_ignored(path));
    result
}

/// Resolve a path argument, failing when nothing matches.
pub fn resolve_paths(
    spec: &str,
    kind: FileKind,
    ignore: &IgnoreSet,
    base_dir: &Path,
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let result = scan_files(spec, kind, ignore, base_dir, verbose);

    if result.files.is_empty() {
        return Err(match kind {
            FileKind::Source => LintError::NoSourceFiles(spec.to_string()),
            FileKind::Language => LintError::NoLanguageFiles(spec.to_string()),
        }
        .into());
    }

    if result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    if verbose {
        let label = match kind {
            FileKind::Source => "source",
            FileKind::Language => "language",
        };
        eprintln!(
            "Note: {} {} file(s) resolved from '{}'",
            result.files.len(),
            label,
            spec
        );
    }

    Ok(result.files.into_iter().collect())
}

fn walk_dir(dir: &Path, kind: FileKind, result: &mut ScanResult, verbose: bool) {
    let walker = WalkDir::new(dir).into_iter().filter_entry(|e| {
        e.depth() == 0
            || !e.file_type().is_dir()
            || !SKIPPED_DIRS.contains(&e.file_name().to_string_lossy().as_ref())
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && kind.accepts(path) {
            result.files.insert(canonical(path.to_path_buf()));
        }
    }
}
