use anyhow::Result;

use super::{DatasetContext, LanguagePair, find_translations};
use crate::writers::Writer;

/// Outcome of emitting one language pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSummary {
    pub pair: LanguagePair,
    /// Page couples that were both well-formed and aligned.
    pub pages_aligned: usize,
    pub units_written: usize,
}

impl PairSummary {
    /// Whether a writer was opened for this pair.
    pub fn has_output(&self) -> bool {
        self.units_written > 0
    }
}

/// Align every page of `pair.source` with its `pair.target` variant and push
/// the translation pairs into a writer.
///
/// `open_writer` is called at most once, when the first unit is ready, so a
/// pair without any aligned page leaves nothing behind. The writer is
/// finished once after the last page.
///
/// Couples where either page is malformed or unreadable are skipped; they
/// show up in [`DatasetContext::skipped_pages`].
pub fn emit_language_pair<F>(
    ctx: &DatasetContext,
    pair: &LanguagePair,
    mut open_writer: F,
) -> Result<PairSummary>
where
    F: FnMut() -> Result<Box<dyn Writer>>,
{
    let couples: Vec<(usize, usize)> = ctx
        .files_in(&pair.source)
        .filter_map(|source| {
            ctx.find_variant(source, &pair.target)
                .map(|target| (source, target))
        })
        .collect();

    // The loop below only reads the cache so output order stays
    // deterministic.
    let pages: Vec<usize> = couples
        .iter()
        .flat_map(|&(source, target)| [source, target])
        .collect();
    ctx.prefetch(&pages);

    let mut summary = PairSummary {
        pair: pair.clone(),
        pages_aligned: 0,
        units_written: 0,
    };
    let mut writer: Option<Box<dyn Writer>> = None;

    for (source, target) in couples {
        let (Ok(source_page), Ok(target_page)) = (ctx.page(source), ctx.page(target)) else {
            continue;
        };

        // Never empty: every page has a description.
        let translations = find_translations(source_page, &pair.source, target_page, &pair.target);
        summary.pages_aligned += 1;

        if writer.is_none() {
            writer = Some(open_writer()?);
        }
        if let Some(sink) = writer.as_mut() {
            for translation in &translations {
                sink.write(translation)?;
            }
            summary.units_written += translations.len();
        }
    }

    if let Some(sink) = writer {
        sink.finished()?;
    }

    Ok(summary)
}
