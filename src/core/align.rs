use serde::Serialize;

use super::{Example, Page, normalize, retain_unique};

/// One aligned source/target string pair of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPair {
    pub source_language: String,
    pub target_language: String,
    pub source_string: String,
    pub target_string: String,
}

impl TranslationPair {
    pub fn new(
        source_language: &str,
        target_language: &str,
        source_string: impl Into<String>,
        target_string: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            source_string: source_string.into(),
            target_string: target_string.into(),
        }
    }
}

fn same_command(a: &Example, b: &Example) -> bool {
    normalize(&a.command) == normalize(&b.command)
}

/// Align two language variants of the same page.
///
/// Emits, in order:
/// 1. the descriptions, always;
/// 2. the more-info sentences, when both pages have one;
/// 3. the descriptions of examples whose normalized commands match, in the
///    target page's order. Examples whose normalized command is not unique
///    within their own page are never paired.
///
/// # Panics
///
/// Panics if both languages are the same: the pages are then not variants of
/// each other and the caller paired them incorrectly.
pub fn find_translations(
    source_page: &Page,
    source_language: &str,
    target_page: &Page,
    target_language: &str,
) -> Vec<TranslationPair> {
    assert_ne!(
        source_language, target_language,
        "cannot align page `{}` against its own language",
        source_page.name
    );

    let pair = |source: &str, target: &str| {
        TranslationPair::new(source_language, target_language, source, target)
    };

    let mut results = vec![pair(&source_page.description, &target_page.description)];

    if let (Some(source), Some(target)) = (&source_page.more_info, &target_page.more_info) {
        results.push(pair(source, target));
    }

    let source_examples = retain_unique(&source_page.examples, |a, b| same_command(a, b));
    let target_examples = retain_unique(&target_page.examples, |a, b| same_command(a, b));

    for target in target_examples {
        let Some(source) = source_examples.iter().find(|s| same_command(s, target)) else {
            continue;
        };
        results.push(pair(&source.description, &target.description));
    }

    results
}
