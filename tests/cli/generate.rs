use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, LS_EN, TAR_DE, TAR_EN, TAR_FR, stderr, stdout};

/// Every pair the fixture's `tar` pages produce for `de-en`.
fn expected_tar_pairs() -> Value {
    json!([
        {
            "sourceLanguage": "de",
            "targetLanguage": "en",
            "sourceString": "Archivierungswerkzeug.",
            "targetString": "Archiving utility."
        },
        {
            "sourceLanguage": "de",
            "targetLanguage": "en",
            "sourceString": "Weitere Informationen: <https://www.gnu.org/software/tar>.",
            "targetString": "More information: <https://www.gnu.org/software/tar>."
        },
        {
            "sourceLanguage": "de",
            "targetLanguage": "en",
            "sourceString": "Erstelle ein Archiv aus Dateien",
            "targetString": "Create an archive from files"
        },
        {
            "sourceLanguage": "de",
            "targetLanguage": "en",
            "sourceString": "Entpacke ein Archiv in das aktuelle Verzeichnis",
            "targetString": "Extract an archive in the current directory"
        }
    ])
}

#[test]
fn test_generate_json_dataset() -> Result<()> {
    let test = CliTest::with_pages()?;

    let output = test.generate_command().args(["-f", "json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file("dataset/de-en.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Output should be valid JSON")?;
    assert_eq!(parsed, expected_tar_pairs());
    assert!(content.ends_with("]\n"));

    assert!(stdout(&output).contains("de-en: 1 page(s) aligned, 4 unit(s) written"));
    assert!(stdout(&output).contains("Generated 1 json file in dataset"));

    Ok(())
}

#[test]
fn test_generate_warns_about_malformed_pages() -> Result<()> {
    let test = CliTest::with_pages()?;

    let output = test.generate_command().output()?;
    let stderr = stderr(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("warning: 1 page(s) skipped"), "{}", stderr);
    assert!(stderr.contains("pages.de/common/ls.md"), "{}", stderr);
    assert!(!stderr.contains("pages/common/ls.md"), "{}", stderr);

    Ok(())
}

#[test]
fn test_generate_verbose_lists_reasons() -> Result<()> {
    let test = CliTest::with_pages()?;

    let output = test.generate_command().arg("-v").output()?;
    let stderr = stderr(&output);

    assert!(output.status.success());
    assert!(
        stderr.contains("page does not start with a level-1 heading"),
        "{}",
        stderr
    );

    Ok(())
}

#[test]
fn test_generate_refuses_existing_output() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file("dataset/keep.txt", "keep")?;

    let output = test.generate_command().output()?;
    let stderr = stderr(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Output directory"), "{}", stderr);
    assert!(stderr.contains("--overwrite"));
    assert!(stderr.contains("--output"));
    assert_eq!(test.read_file("dataset/keep.txt")?, "keep");

    Ok(())
}

#[test]
fn test_generate_overwrite_replaces_output() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file("dataset/stale.xml", "<mappings/>")?;

    let output = test.generate_command().arg("--overwrite").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Deleting dataset"));
    assert!(!test.root().join("dataset/stale.xml").exists());
    assert!(test.root().join("dataset/de-en.xml").exists());

    Ok(())
}

#[test]
fn test_generate_xml_dataset() -> Result<()> {
    let test = CliTest::with_pages()?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let content = test.read_file("dataset/de-en.xml")?;
    assert!(content.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(content.matches("<mapping>").count(), 4);
    assert!(content.contains(
        "<sourceString>Weitere Informationen: &lt;https://www.gnu.org/software/tar&gt;.</sourceString>"
    ));
    assert!(content.ends_with("</mappings>\n"));

    Ok(())
}

#[test]
fn test_generate_with_source_language() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file("pages.fr/common/tar.md", TAR_FR)?;

    let output = test
        .generate_command()
        .args(["--language", "en", "--format", "csv"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("dataset/en-de.csv").exists());
    assert!(test.root().join("dataset/en-fr.csv").exists());
    assert!(!test.root().join("dataset/de-fr.csv").exists());

    let content = test.read_file("dataset/en-fr.csv")?;
    assert_eq!(
        content,
        "sourceLanguage,targetLanguage,sourceString,targetString\n\
         en,fr,Archiving utility.,Utilitaire d'archivage.\n\
         en,fr,More information: <https://www.gnu.org/software/tar>.,Plus d'informations : <https://www.gnu.org/software/tar>.\n\
         en,fr,Create an archive from files,Crée une archive à partir de fichiers \n"
    );

    Ok(())
}

#[test]
fn test_generate_all_pairs() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file("pages.fr/common/tar.md", TAR_FR)?;

    let output = test.generate_command().args(["-f", "tmx"]).output()?;
    assert!(output.status.success());

    for pair in ["de-en", "de-fr", "en-fr"] {
        assert!(
            test.root().join(format!("dataset/{}.tmx", pair)).exists(),
            "missing {}",
            pair
        );
    }

    let content = test.read_file("dataset/de-fr.tmx")?;
    assert!(content.contains(r#"<tmx xmlns="http://www.lisa.org/tmx14" version="1.4">"#));
    assert!(content.contains(r#"<tuv xml:lang="de">"#));
    assert!(content.contains(r#"<tuv xml:lang="fr">"#));
    assert!(content.contains("<seg>Archivierungswerkzeug.</seg>"));
    assert!(content.contains("<seg>Utilitaire d"));

    Ok(())
}

#[test]
fn test_generate_unknown_source_language() -> Result<()> {
    let test = CliTest::with_pages()?;

    let output = test.generate_command().args(["-l", "ja"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'ja'"));
    assert!(!test.root().join("dataset").exists());

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tldrdatasetrc.json",
        r#"{
            "source": "tldr",
            "format": "csv",
            "output": "out"
        }"#,
    )?;
    test.write_file("tldr/pages/common/tar.md", TAR_EN)?;
    test.write_file("tldr/pages.de/common/tar.md", TAR_DE)?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file("out/de-en.csv")?;
    assert!(content.starts_with("sourceLanguage,targetLanguage,sourceString,targetString\n"));
    assert_eq!(content.lines().count(), 5);

    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> Result<()> {
    let test = CliTest::with_pages()?;
    test.write_file(".tldrdatasetrc.json", r#"{ "format": "csv" }"#)?;

    let output = test
        .generate_command()
        .args(["-f", "json", "-o", "custom"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("custom/de-en.json").exists());
    assert!(!test.root().join("dataset").exists());

    Ok(())
}

#[test]
fn test_generate_single_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("pages/common/ls.md", LS_EN)?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No language pairs to generate"));

    Ok(())
}
