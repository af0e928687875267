use std::sync::LazyLock;

use regex::Regex;

/// Placeholder content after normalization.
pub const NORMALIZED_TOKEN: &str = "…";

/// A `{{...}}` placeholder whose content does not contain `{`.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{[^{]+?\}\}").unwrap());

/// Replace the content of every `{{...}}` placeholder with [`NORMALIZED_TOKEN`].
///
/// Placeholder names are translated along with the page (`{{file}}` becomes
/// `{{datei}}`), so commands can only be compared across languages once
/// their placeholders are reduced to the same shape.
pub fn normalize(command: &str) -> String {
    TOKEN_REGEX
        .replace_all(command, format!("{{{{{}}}}}", NORMALIZED_TOKEN))
        .into_owned()
}
