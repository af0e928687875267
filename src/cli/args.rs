//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write one dataset file per language pair
//! - `stats`: Print page counts of a tldr-pages checkout
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::writers::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.common.verbose,
            Some(Command::Stats(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Root of the tldr-pages checkout (overrides config file)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only pair this language with every other one (overrides config file)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Directory the dataset is written to (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Delete the output directory first if it already exists
    #[arg(short = 'O', long)]
    pub overwrite: bool,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate translation datasets from tldr pages
    Generate(GenerateArgs),
    /// Show how many pages exist per language
    Stats(StatsArgs),
    /// Initialize a new .tldrdatasetrc.json configuration file
    Init,
}
