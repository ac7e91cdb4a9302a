use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .keylintrc.json"));

    let content = test.read_file(".keylintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("project").is_some());
    assert!(parsed.get("languages").is_some());

    assert_snapshot!(content, @r#"
    {
      "project": "./src/**/*.{html,ts,tsx,js,jsx}",
      "languages": "./src/locales/*.json",
      "ignore": null,
      "rules": {
        "keysOnViews": "warning",
        "zombieKeys": "warning",
        "emptyKeys": "warning",
        "maxWarning": 0,
        "deepSearch": "disable",
        "ignoredKeys": [],
        "customRegExpToFindKeys": []
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keylintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .keylintrc.json already exists"));
    assert_eq!(test.read_file(".keylintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", "t('home.title')")?;
    test.write_file("src/locales/en.json", r#"{"home": {"title": "Home"}}"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}
