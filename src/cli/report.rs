//! Report formatting and printing utilities.
//!
//! Kept apart from the commands so the dataset engine can be used as a
//! library without any terminal output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::SkippedPage;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate_to(summary, &mut stdout),
        CommandSummary::Stats(summary) => print_stats_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }
    drop(stdout);

    print_skipped_pages_to(&result.skipped_pages, verbose, &mut io::stderr().lock());
}

/// Announce that an existing output directory is about to be removed.
pub fn print_deleting(path: &Path) {
    println!("{} {}", "Deleting".yellow().bold(), path.display());
}

fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    if summary.pairs.is_empty() {
        let _ = writeln!(
            writer,
            "{} No language pairs to generate: pages in at least two languages are needed",
            FAILURE_MARK.yellow()
        );
        return;
    }

    for pair in &summary.pairs {
        if pair.has_output() {
            let file = summary
                .output_dir
                .join(pair.pair.file_name(summary.format.extension()));
            let _ = writeln!(
                writer,
                "{} {}: {} page(s) aligned, {} unit(s) written to {}",
                SUCCESS_MARK.green(),
                pair.pair.to_string().bold(),
                pair.pages_aligned,
                pair.units_written,
                file.display()
            );
        } else {
            let _ = writeln!(
                writer,
                "{} {}: no pages to align",
                FAILURE_MARK.yellow(),
                pair.pair.to_string().bold()
            );
        }
    }

    let files = summary.files_written();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} {} in {}",
            files,
            summary.format,
            if files == 1 { "file" } else { "files" },
            summary.output_dir.display()
        )
        .green()
    );
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {}",
        "Pages in".bold(),
        summary.source_root.display()
    );
    let _ = writeln!(writer, "  total pages: {}", stats.total_pages);
    let _ = writeln!(writer, "  languages:   {}", stats.languages());
    let _ = writeln!(writer, "  commands:    {}", stats.commands);
    let _ = writeln!(writer, "  platforms:   {}", stats.platforms);

    if stats.pages_per_language.is_empty() {
        return;
    }

    let width = stats
        .pages_per_language
        .keys()
        .map(|language| language.len())
        .max()
        .unwrap_or(0);
    let _ = writeln!(writer, "{}", "Pages per language".bold());
    for (language, count) in &stats.pages_per_language {
        let _ = writeln!(writer, "  {:<width$}  {}", language, count, width = width);
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}

/// Warn about pages that were left out of the dataset.
///
/// Reasons are only listed in verbose mode.
fn print_skipped_pages_to<W: Write>(skipped: &[SkippedPage], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} page(s) skipped because they could not be parsed{}",
        "warning:".bold().yellow(),
        skipped.len(),
        if verbose { ":" } else { " (use -v for reasons):" }
    );
    for page in skipped {
        if verbose {
            let _ = writeln!(writer, "  {}", page);
        } else {
            let _ = writeln!(writer, "  {}", page.file_path.display());
        }
    }
}
