use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_types_lists_project_types() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("types"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    i18next/i18next

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);
    assert!(stdout.contains("extract"), "stdout: {}", stdout);

    Ok(())
}
