//! Issues found while generating a dataset.
//!
//! Issues never abort a run: a page that cannot be used is recorded and
//! reported in the warning summary once every language pair is processed.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::MalformedPage;

/// Why a page could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("{0}")]
    Malformed(#[from] MalformedPage),
    #[error("could not read file: {0}")]
    Unreadable(String),
}

/// A page left out of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    pub file_path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedPage {
    pub fn is_malformed(&self) -> bool {
        matches!(self.reason, SkipReason::Malformed(_))
    }
}

impl std::fmt::Display for SkippedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file_path.display(), self.reason)
    }
}
