use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::{args::GenerateArgs, report::print_deleting};
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{
    core::{DatasetContext, emit_language_pair},
    writers::create_writer,
};

/// Write `<output>/<source>-<target>.<format>` for every language pair.
pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let mut ctx = DatasetContext::new(&args.common)?;

    // CLI > config file > defaults
    if let Some(format) = args.format {
        ctx.config.format = format;
    }
    if let Some(language) = args.language {
        ctx.config.source_language = Some(language);
    }
    if let Some(output) = args.output {
        ctx.config.output = output.to_string_lossy().to_string();
    }
    ctx.config.validate()?;

    let format = ctx.config.format;
    let output_dir = PathBuf::from(&ctx.config.output);
    let pairs = ctx.language_pairs(ctx.config.source_language.as_deref())?;

    prepare_output_dir(&output_dir, args.overwrite)?;

    let mut summaries = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let path = output_dir.join(pair.file_name(format.extension()));
        let summary = emit_language_pair(&ctx, pair, || create_writer(&path, format))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        summaries.push(summary);
    }

    Ok(CommandResult::new(
        CommandSummary::Generate(GenerateSummary {
            output_dir,
            format,
            pairs: summaries,
        }),
        ctx.skipped_pages(),
    ))
}

/// Make sure `output_dir` exists and is empty.
///
/// An existing directory is only replaced when `overwrite` is set.
fn prepare_output_dir(output_dir: &Path, overwrite: bool) -> Result<()> {
    if output_dir.exists() {
        if !overwrite {
            bail!(
                "Output directory '{}' already exists. Use --overwrite to replace it, or choose another directory with --output.",
                output_dir.display()
            );
        }

        print_deleting(output_dir);
        let removed = if output_dir.is_dir() {
            fs::remove_dir_all(output_dir)
        } else {
            fs::remove_file(output_dir)
        };
        removed.with_context(|| format!("Failed to delete {}", output_dir.display()))?;
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))
}
