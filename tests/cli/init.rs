use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .keysweeprc.json

    ----- stderr -----
    ");

    let content = test.read_file(".keysweeprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["projectType"], "i18next/i18next");
    assert_eq!(parsed["callNames"], serde_json::json!(["t", "i18next.t"]));
    assert_eq!(
        parsed["extensions"],
        serde_json::json!(["js", "jsx", "ts", "tsx"])
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .keysweeprc.json already exists
    ");

    assert_eq!(test.read_file(".keysweeprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_extract() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('app.key')")?;

    // Initialize config
    test.command().arg("init").output()?;
    assert!(test.root().join(".keysweeprc.json").exists());

    // No "using default configuration" note once the file exists
    assert_cmd_snapshot!(test.extract_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    app.key

    ----- stderr -----
    ✓ Found 1 key in 1 file (i18next/i18next)
    ");

    Ok(())
}
