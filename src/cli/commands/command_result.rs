use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{
    core::{PageStats, PairSummary},
    issues::SkippedPage,
    writers::OutputFormat,
};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub pairs: Vec<PairSummary>,
}

impl GenerateSummary {
    pub fn files_written(&self) -> usize {
        self.pairs.iter().filter(|p| p.has_output()).count()
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub source_root: PathBuf,
    pub stats: PageStats,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Pages left out of the output, sorted by path.
    pub skipped_pages: Vec<SkippedPage>,
    pub error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, skipped_pages: Vec<SkippedPage>) -> Self {
        let error_count = match &summary {
            CommandSummary::Init(init) if init.error.is_some() => 1,
            _ => 0,
        };

        Self {
            summary,
            skipped_pages,
            error_count,
        }
    }

    /// Skipped pages never fail a command; they are reported as warnings.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
