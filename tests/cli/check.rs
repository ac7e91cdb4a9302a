use anyhow::Result;
use insta::{assert_snapshot, with_settings};

use crate::{CliTest, stderr, stdout};

const APP_HTML: &str = r#"
<h1>{{ t('welcome.title') }}</h1>
<p>{{ t('missing.key') }}</p>
"#;

const EN_JSON: &str = r#"{
  "welcome": { "title": "Welcome", "old": "Old" }
}"#;

fn project() -> Result<CliTest> {
    CliTest::with_files(&[("views/app.html", APP_HTML), ("locales/en.json", EN_JSON)])
}

#[test]
fn test_check_reports_findings() -> Result<()> {
    let test = project()?;
    let output = test
        .check_command()
        .args(["-p", "./views", "-l", "./locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let root = test.root_pattern();
    with_settings!({ filters => vec![(root.as_str(), "[ROOT]")] }, {
        assert_snapshot!(stdout(&output), @r#"
        warning: "missing.key"  keysOnViews
          --> [ROOT]/views/app.html
           = note: not declared in any language

        warning: "welcome.old"  zombieKeys
          --> [ROOT]/locales/en.json
           = note: declared in en but never used

        ✘ 2 problems (0 errors, 2 warnings)
        error: too many warnings: 2 (max 0)
        "#);
    });

    Ok(())
}

#[test]
fn test_check_under_threshold_succeeds() -> Result<()> {
    let test = project()?;
    let output = test
        .check_command()
        .args(["-p", "./views", "-l", "./locales", "--max-warnings", "5"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("2 problems (0 errors, 2 warnings)"));
    assert!(!out.contains("too many warnings"));

    Ok(())
}

#[test]
fn test_check_error_level_fails() -> Result<()> {
    let test = project()?;
    let output = test
        .check_command()
        .args(["-p", "./views", "-l", "./locales"])
        .args(["--keys-on-views", "error", "--zombie-keys", "disable"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"missing.key\"  keysOnViews"));
    assert!(!out.contains("zombieKeys"));
    assert!(out.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_files(&[
        ("views/app.ts", "t('home.title');"),
        ("locales/en.json", r#"{"home": {"title": "Home"}}"#),
        ("locales/de.json", r#"{"home": {"title": "Start"}}"#),
    ])?;
    let output = test
        .check_command()
        .args(["--project", "views/*.ts", "--languages", "locales/*.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 source file, 2 language files - no issues found"));

    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".keylintrc.json",
        r#"{
          "project": "./views",
          "languages": "./locales",
          "rules": { "zombieKeys": "disable", "ignoredKeys": ["missing.key"] }
        }"#,
    )?;
    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_deep_search_flag() -> Result<()> {
    let test = CliTest::with_files(&[
        ("views/app.ts", "t(`errors.${code}`);"),
        ("locales/en.json", r#"{"errors": {"404": "Not found"}}"#),
    ])?;

    let shallow = test
        .check_command()
        .args(["-p", "views", "-l", "locales"])
        .output()?;
    assert_eq!(shallow.status.code(), Some(1));
    assert!(stdout(&shallow).contains("\"errors.404\"  zombieKeys"));

    let deep = test
        .check_command()
        .args(["-p", "views", "-l", "locales", "--deep-search"])
        .output()?;
    assert_eq!(deep.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_custom_pattern() -> Result<()> {
    let test = CliTest::with_files(&[
        ("views/app.ts", r#"const k = marker("CUSTOM.REGEXP.ONE");"#),
        ("locales/en.json", "{}"),
    ])?;
    let output = test
        .check_command()
        .args(["-p", "views", "-l", "locales"])
        .args(["--custom-pattern", r#"marker\("(.*)"\)"#])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("warning: \"CUSTOM.REGEXP.ONE\"  keysOnViews"));

    Ok(())
}

#[test]
fn test_check_invalid_pattern_is_fatal() -> Result<()> {
    let test = project()?;
    let output = test
        .check_command()
        .args(["-p", "views", "-l", "locales", "--custom-pattern", "no-group"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Invalid rules configuration:"));

    Ok(())
}

#[test]
fn test_check_parse_error_is_fatal() -> Result<()> {
    let test = project()?;
    test.write_file("locales/broken.json", "{ \"a\": ")?;
    let output = test
        .check_command()
        .args(["-p", "views", "-l", "locales/broken.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output).trim_end(),
        format!(
            "Error: Can't parse JSON file: {}",
            test.root().join("locales/broken.json").display()
        )
    );

    Ok(())
}

#[test]
fn test_check_no_source_files_is_fatal() -> Result<()> {
    let test = project()?;
    let output = test
        .check_command()
        .args(["-p", "./nothing/*.html", "-l", "locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output).trim_end(),
        "Error: No source files found for './nothing/*.html'"
    );

    Ok(())
}

#[test]
fn test_check_ignore_option() -> Result<()> {
    let test = project()?;
    test.write_file("views/legacy.html", "{{ t('legacy.only') }}")?;
    let output = test
        .check_command()
        .args(["-p", "views", "-l", "locales", "-i", "views/legacy.html"])
        .output()?;

    assert!(!stdout(&output).contains("legacy.only"));

    Ok(())
}
