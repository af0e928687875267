use std::{fs::File, path::Path};

use anyhow::{Context, Result};

use super::Writer;
use crate::core::TranslationPair;

const HEADER: [&str; 4] = [
    "sourceLanguage",
    "targetLanguage",
    "sourceString",
    "targetString",
];

/// Streams one CSV row per translation pair.
pub struct CsvWriter {
    inner: csv::Writer<File>,
}

impl CsvWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        inner.write_record(HEADER)?;
        Ok(Self { inner })
    }
}

impl Writer for CsvWriter {
    fn write(&mut self, pair: &TranslationPair) -> Result<()> {
        self.inner.serialize(pair)?;
        Ok(())
    }

    fn finished(mut self: Box<Self>) -> Result<()> {
        self.inner.flush().context("Failed to flush CSV output")
    }
}
