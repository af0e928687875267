//! Page file metadata derived from the tldr-pages directory layout.
//!
//! Pages live at `<root>/pages[.<lang>]/<platform>/<command>.md`. Everything
//! needed to pair translations is encoded in that path, so no file has to be
//! read before it is known to be useful.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Language of the `pages` directory without a language suffix.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A path that does not have the `pages*/<platform>/<command>.<ext>` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("path does not follow the pages[.<lang>]/<platform>/<command> layout: {}", .path.display())]
pub struct PathError {
    pub path: PathBuf,
}

/// One discovered page file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageFile {
    /// Absolute path to the file on disk.
    pub path: PathBuf,
    /// ISO code of the language the page is written in.
    pub language: String,
    /// Platform the page documents the command for (e.g. `common`, `windows`).
    pub platform: String,
    /// Name of the documented command.
    pub command: String,
}

impl PageFile {
    pub fn new(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        platform: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            platform: platform.into(),
            command: command.into(),
        }
    }

    /// Classify a page by its path.
    ///
    /// The path is made absolute first; the last three components are read
    /// as the pages directory, the platform and the file name.
    pub fn from_path(path: &Path) -> Result<Self, PathError> {
        let invalid = || PathError {
            path: path.to_path_buf(),
        };

        let absolute = std::path::absolute(path).map_err(|_| invalid())?;

        let command = absolute
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(invalid)?;
        let platform_dir = absolute.parent().ok_or_else(invalid)?;
        let platform = platform_dir
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(invalid)?;
        let pages_dir = platform_dir
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .ok_or_else(invalid)?;

        let language = match pages_dir.split('.').nth(1) {
            Some(lang) if !lang.is_empty() => lang,
            _ => DEFAULT_LANGUAGE,
        };

        Ok(Self::new(absolute.clone(), language, platform, command))
    }

    /// Whether `other` documents the same command on the same platform in a
    /// different language.
    ///
    /// A file is never a variant of itself, nor of another file in its own
    /// language.
    pub fn is_variant_of(&self, other: &PageFile) -> bool {
        if self.command != other.command {
            return false;
        }

        if self.platform != other.platform {
            return false;
        }

        self.language != other.language
    }
}
