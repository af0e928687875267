use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{Page, PageFile, scanner::scan_pages},
    issues::{SkipReason, SkippedPage},
};

/// Ordered pair of languages: pages are aligned from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// File name of this pair's dataset, e.g. `de-en.xml`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Counts over every discovered page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageStats {
    pub total_pages: usize,
    /// Distinct `(platform, command)` pairs, i.e. documented commands.
    pub commands: usize,
    pub platforms: usize,
    pub pages_per_language: BTreeMap<String, usize>,
}

impl PageStats {
    pub fn languages(&self) -> usize {
        self.pages_per_language.len()
    }
}

/// Discovered page files together with their lazily parsed pages.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--source ../tldr`)
/// 2. `.tldrdatasetrc.json` config file
/// 3. Built-in defaults
///
/// Pages are read and parsed on first access only, at most once per file.
/// The cache is thread-safe so couples of pages can be parsed in parallel.
pub struct DatasetContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Root of the tldr-pages checkout.
    pub source_root: PathBuf,

    /// Every page file, sorted by path.
    pub files: Vec<PageFile>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Paths that could not be scanned.
    pub skipped_count: usize,

    /// Parsed page for each entry of `files`, same index. Kept for the
    /// whole run: a page takes part in several language pairs and
    /// [`Self::skipped_pages`] reports from it.
    pages: Vec<OnceLock<Result<Page, SkipReason>>>,

    /// Indices into `files` grouped by `(platform, command)`.
    variants: HashMap<(String, String), Vec<usize>>,
}

impl DatasetContext {
    /// Create a new `DatasetContext` from command line arguments.
    ///
    /// The config file is searched from `--source` when given, from the
    /// current directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let search_dir = common_args
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let config_result = load_config(&search_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref source) = common_args.source {
            config.source = source.to_string_lossy().to_string();
        }

        Ok(Self::with_config(config, verbose))
    }

    /// Scan `config.source` for pages.
    pub fn with_config(config: Config, verbose: bool) -> Self {
        let source_root = PathBuf::from(&config.source);
        let scan_result = scan_pages(&source_root, &config.ignores, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let mut variants: HashMap<(String, String), Vec<usize>> = HashMap::new();
        for (index, file) in scan_result.files.iter().enumerate() {
            variants
                .entry((file.platform.clone(), file.command.clone()))
                .or_default()
                .push(index);
        }

        let pages = scan_result.files.iter().map(|_| OnceLock::new()).collect();

        Self {
            config,
            source_root,
            files: scan_result.files,
            verbose,
            skipped_count: scan_result.skipped_count,
            pages,
            variants,
        }
    }

    /// Parsed page of `files[index]`, read from disk on first access.
    pub fn page(&self, index: usize) -> Result<&Page, &SkipReason> {
        self.pages[index]
            .get_or_init(|| {
                let path = &self.files[index].path;
                let parsed = read_page(path);
                if self.verbose
                    && let Err(reason) = &parsed
                {
                    eprintln!(
                        "{} {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        reason
                    );
                }
                parsed
            })
            .as_ref()
    }

    /// Parse the pages at `indices` on the rayon pool so that later
    /// [`Self::page`] calls only hit the cache. Failures are cached too and
    /// show up in [`Self::skipped_pages`].
    pub fn prefetch(&self, indices: &[usize]) {
        indices.par_iter().for_each(|&index| {
            self.page(index).ok();
        });
    }

    /// Pages that were read so far and could not be used, in path order.
    pub fn skipped_pages(&self) -> Vec<SkippedPage> {
        self.files
            .iter()
            .zip(&self.pages)
            .filter_map(|(file, page)| match page.get() {
                Some(Err(reason)) => Some(SkippedPage {
                    file_path: file.path.clone(),
                    reason: reason.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Every language with at least one page, sorted.
    pub fn languages(&self) -> BTreeSet<&str> {
        self.files.iter().map(|f| f.language.as_str()).collect()
    }

    /// Language pairs to generate.
    ///
    /// With a source language, it is paired with every other language.
    /// Without one, every combination of two languages is produced once,
    /// the lexicographically smaller language being the source.
    ///
    /// # Errors
    ///
    /// Returns error if no page is written in `source_language`.
    pub fn language_pairs(&self, source_language: Option<&str>) -> Result<Vec<LanguagePair>> {
        let languages = self.languages();

        let pairs = match source_language {
            Some(source) => {
                if !languages.contains(source) {
                    bail!(
                        "No pages found for source language '{}' in '{}'",
                        source,
                        self.source_root.display()
                    );
                }
                languages
                    .iter()
                    .filter(|target| **target != source)
                    .map(|target| LanguagePair::new(source, *target))
                    .collect()
            }
            None => {
                let languages: Vec<&str> = languages.into_iter().collect();
                languages
                    .iter()
                    .enumerate()
                    .flat_map(|(i, source)| {
                        languages[i + 1..]
                            .iter()
                            .map(move |target| LanguagePair::new(*source, *target))
                    })
                    .collect()
            }
        };

        Ok(pairs)
    }

    /// Indices of the files written in `language`, in path order.
    pub fn files_in(&self, language: &str) -> impl Iterator<Item = usize> {
        self.files
            .iter()
            .enumerate()
            .filter(move |(_, file)| file.language == language)
            .map(|(index, _)| index)
    }

    /// Index of the file documenting the same command as `files[index]` in
    /// `language`.
    pub fn find_variant(&self, index: usize, language: &str) -> Option<usize> {
        let file = &self.files[index];
        self.variants
            .get(&(file.platform.clone(), file.command.clone()))?
            .iter()
            .copied()
            .find(|&other| {
                let candidate = &self.files[other];
                candidate.language == language && candidate.is_variant_of(file)
            })
    }

    pub fn stats(&self) -> PageStats {
        let mut pages_per_language: BTreeMap<String, usize> = BTreeMap::new();
        let mut platforms = BTreeSet::new();
        for file in &self.files {
            *pages_per_language.entry(file.language.clone()).or_default() += 1;
            platforms.insert(file.platform.as_str());
        }

        PageStats {
            total_pages: self.files.len(),
            commands: self.variants.len(),
            platforms: platforms.len(),
            pages_per_language,
        }
    }
}

fn read_page(path: &Path) -> Result<Page, SkipReason> {
    let content =
        fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    Ok(Page::parse(&content)?)
}
