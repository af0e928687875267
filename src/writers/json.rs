use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::Writer;
use crate::core::TranslationPair;

/// Collects every pair and writes a single pretty-printed JSON array.
pub struct JsonWriter {
    path: PathBuf,
    pairs: Vec<TranslationPair>,
}

impl JsonWriter {
    pub fn create(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            pairs: Vec::new(),
        }
    }
}

impl Writer for JsonWriter {
    fn write(&mut self, pair: &TranslationPair) -> Result<()> {
        self.pairs.push(pair.clone());
        Ok(())
    }

    /// Uses 2-space indentation and adds a trailing newline.
    fn finished(self: Box<Self>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.pairs).context("Failed to serialize JSON")?;
        fs::write(&self.path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}
