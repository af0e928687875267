use anyhow::Result;

use crate::{CliTest, TAR_FR, stdout};

#[test]
fn test_stats_counts_pages() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file("pages.fr/common/tar.md", TAR_FR)?;
    test.write_file("pages/linux/apt.md", "# apt\n\n> Package manager.\n")?;

    let output = test.command().arg("stats").output()?;
    let stdout = stdout(&output);

    assert!(output.status.success());
    assert!(stdout.contains("total pages: 6"), "{}", stdout);
    assert!(stdout.contains("languages:   3"), "{}", stdout);
    assert!(stdout.contains("commands:    3"), "{}", stdout);
    assert!(stdout.contains("platforms:   2"), "{}", stdout);
    assert!(stdout.contains("  de  2\n  en  3\n  fr  1\n"), "{}", stdout);

    Ok(())
}

#[test]
fn test_stats_with_source_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tldr/pages/common/tar.md", "# tar\n")?;

    let output = test.command().args(["stats", "-s", "tldr"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("total pages: 1"));

    Ok(())
}

#[test]
fn test_stats_respects_ignores() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file(".tldrdatasetrc.json", r#"{ "ignores": ["pages.de/**"] }"#)?;

    let output = test.command().arg("stats").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("total pages: 2"));
    assert!(stdout(&output).contains("languages:   1"));

    Ok(())
}
