//! Report formatting and printing utilities.
//!
//! Findings are printed in cargo-style format; `keys` and `languages` print
//! aligned tables. Every printer has a `*_to` variant taking a writer so the
//! output can be tested.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::CONFIG_FILE_NAME,
    core::{KeySummary, LanguageSummary, LintResult},
    issues::{Finding, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print findings and summary to stdout, or the success line when clean.
pub fn report(result: &LintResult) {
    report_to(result, &mut io::stdout().lock());
}

pub fn report_to<W: Write>(result: &LintResult, writer: &mut W) {
    if result.is_empty() {
        print_success_to(
            result.source_files_checked(),
            result.language_files_checked(),
            writer,
        );
        return;
    }

    for finding in result.findings() {
        print_finding(finding, writer);
    }

    print_summary(result, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, language_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} language {} - no issues found",
            source_files,
            plural(source_files, "file", "files"),
            language_files,
            plural(language_files, "file", "files")
        )
        .green()
    );
}

pub fn print_keys(keys: &[KeySummary]) {
    print_keys_to(keys, &mut io::stdout().lock());
}

/// One row per key: key path, declaring languages, usage.
pub fn print_keys_to<W: Write>(keys: &[KeySummary], writer: &mut W) {
    let rows: Vec<[String; 3]> = keys
        .iter()
        .map(|k| {
            let languages = if k.languages.is_empty() {
                "-".to_string()
            } else {
                k.languages.join(", ")
            };
            let used = match (k.used, k.ignored) {
                (_, true) => "ignored",
                (true, false) => "yes",
                (false, false) => "no",
            };
            [k.key.clone(), languages, used.to_string()]
        })
        .collect();

    print_table(["KEY", "LANGUAGES", "USED"], &rows, writer);
    let _ = writeln!(
        writer,
        "\n{} {}",
        keys.len(),
        plural(keys.len(), "key", "keys")
    );
}

pub fn print_languages(languages: &[LanguageSummary]) {
    print_languages_to(languages, &mut io::stdout().lock());
}

/// One row per language: identifier, key count, files.
pub fn print_languages_to<W: Write>(languages: &[LanguageSummary], writer: &mut W) {
    let rows: Vec<[String; 3]> = languages
        .iter()
        .map(|l| [l.language.clone(), l.key_count.to_string(), l.files.join(", ")])
        .collect();

    print_table(["LANGUAGE", "KEYS", "FILES"], &rows, writer);
}

pub fn print_init_created() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_finding<W: Write>(finding: &Finding, writer: &mut W) {
    let severity_str = match finding.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        finding.value,
        finding.rule.to_string().dimmed().cyan()
    );

    if let Some(path) = &finding.file_path {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
    }

    if let Some(details) = finding.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between findings
}

fn print_summary<W: Write>(result: &LintResult, writer: &mut W) {
    let errors = result.count_errors();
    let warnings = result.count_warnings();

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        errors + warnings,
        errors,
        plural(errors, "error", "errors").red(),
        warnings,
        plural(warnings, "warning", "warnings").yellow()
    );

    if result.is_full_of_warning() {
        let _ = writeln!(
            writer,
            "{} too many warnings: {} (max {})",
            "error:".bold().red(),
            warnings,
            result.max_count_warning()
        );
    }
}

/// Left-aligned columns padded by display width.
fn print_table<W: Write>(header: [&str; 3], rows: &[[String; 3]], writer: &mut W) {
    let mut widths = header.map(UnicodeWidthStr::width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let pad = |cell: &str, width: usize| {
        let fill = width.saturating_sub(UnicodeWidthStr::width(cell));
        format!("{}{}", cell, " ".repeat(fill))
    };

    let _ = writeln!(
        writer,
        "{}  {}  {}",
        pad(header[0], widths[0]).bold(),
        pad(header[1], widths[1]).bold(),
        header[2].bold()
    );
    for row in rows {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            pad(row[0].as_str(), widths[0]),
            pad(row[1].as_str(), widths[1]),
            row[2]
        );
    }
}
