use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_files(&[
        ("views/app.tsx", "<Trans i18nKey=\"home.title\" />\n{t('home.missing')}"),
        ("locales/en.json", r#"{"home": {"title": "Home", "unused": "x"}}"#),
        ("locales/fr.json", r#"{"home": {"title": "Accueil"}}"#),
    ])
}

#[test]
fn test_keys_lists_union() -> Result<()> {
    let test = project()?;
    let output = test
        .command()
        .args(["keys", "-p", "views", "-l", "locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "KEY           LANGUAGES  USED");
    assert_eq!(lines[1], "home.missing  -          yes");
    assert_eq!(lines[2], "home.title    en, fr     yes");
    assert_eq!(lines[3], "home.unused   en         no");
    assert!(out.contains("3 keys"));

    Ok(())
}

#[test]
fn test_keys_marks_ignored() -> Result<()> {
    let test = project()?;
    let output = test
        .command()
        .args(["keys", "-p", "views", "-l", "locales", "--ignored-keys", "home.unused"])
        .output()?;

    assert!(stdout(&output).contains("home.unused   en         ignored"));

    Ok(())
}

#[test]
fn test_languages_lists_key_counts() -> Result<()> {
    let test = project()?;
    let output = test
        .command()
        .args(["languages", "-p", "views", "-l", "locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "LANGUAGE  KEYS  FILES");
    assert!(lines[1].starts_with("en        2     "));
    assert!(lines[1].ends_with("locales/en.json"));
    assert!(lines[2].starts_with("fr        1     "));

    Ok(())
}
