use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, TAR_DE, TAR_EN};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tldrdatasetrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".tldrdatasetrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["source"], ".");
    assert_eq!(parsed["format"], "xml");
    assert_eq!(parsed["output"], "dataset");
    assert!(parsed["sourceLanguage"].is_null());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tldrdatasetrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .tldrdatasetrc.json already exists
    ");

    assert_eq!(test.read_file(".tldrdatasetrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("pages/common/tar.md", TAR_EN)?;
    test.write_file("pages.de/common/tar.md", TAR_DE)?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("dataset/de-en.xml").exists());

    Ok(())
}
