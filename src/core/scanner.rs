use std::path::Path;

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::file::PageFile;

/// Prefix of the directories holding pages (`pages`, `pages.de`, ...).
const PAGES_DIR_PREFIX: &str = "pages";

/// Result of scanning a tldr-pages checkout.
pub struct ScanResult {
    /// Discovered pages, sorted by path.
    pub files: Vec<PageFile>,
    pub skipped_count: usize,
}

/// Find every page under `source_root`.
///
/// Pages sit exactly three levels down: `pages*/<platform>/<command>.md`.
/// Paths matching any of `ignore_patterns` are left out.
pub fn scan_pages(source_root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files: Vec<PageFile> = Vec::new();
    let mut skipped_count = 0;

    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let walker = WalkDir::new(source_root)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() != 1 || is_pages_dir(entry.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if entry.depth() != 3 || !entry.file_type().is_file() || !is_page_file(path) {
            continue;
        }

        let relative = path.strip_prefix(source_root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        match PageFile::from_path(path) {
            Ok(file) => files.push(file),
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), e);
                }
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_pages_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name == PAGES_DIR_PREFIX || name.starts_with(&format!("{}.", PAGES_DIR_PREFIX))
        })
}

fn is_page_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("md"))
}
