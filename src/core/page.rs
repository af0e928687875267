//! Structured representation of a single tldr page.
//!
//! A page is strict markdown:
//!
//! ```text
//! # name
//!
//! > Description, possibly over several lines.
//! > More information: <https://example.com>.
//!
//! - Example description:
//!
//! `example command {{placeholder}}`
//! ```
//!
//! Anything that deviates from this block pattern is rejected as a whole
//! with [`MalformedPage`]; a half-parsed page would pair the wrong strings
//! across languages.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::markdown::{Block, ListItem, tokenize};

/// Last description line that points at further documentation: it ends with
/// an autolink or inline link followed by a period.
static MORE_INFO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<[^<>\s]+>|\[[^\]]*\]\([^()\s]*\))\.$").unwrap());

/// Reasons a document is not a well-formed page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPage {
    #[error("page does not start with a level-1 heading")]
    MissingTitle,
    #[error("title is not followed by a description blockquote")]
    MissingDescription,
    #[error("description blockquote must contain exactly one paragraph")]
    InvalidDescription,
    #[error(
        "example {} is not a single-item list without nested blocks followed by a command",
        .index + 1
    )]
    InvalidExample { index: usize },
}

/// A command example of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// What the example does, without its trailing colon.
    pub description: String,
    /// The command, placeholders included verbatim.
    pub command: String,
}

impl Example {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Name of the documented command, from the title.
    pub name: String,
    pub description: String,
    pub examples: Vec<Example>,
    /// The "more information" sentence that ends the description, if any.
    pub more_info: Option<String>,
}

impl Page {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        examples: Vec<Example>,
        more_info: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examples,
            more_info,
        }
    }

    /// Parse the markdown source of a page.
    pub fn parse(source: &str) -> Result<Self, MalformedPage> {
        let blocks = tokenize(source);

        let (name, rest) = match blocks.as_slice() {
            [Block::Heading { level: 1, content }, rest @ ..] => (content.text.clone(), rest),
            _ => return Err(MalformedPage::MissingTitle),
        };

        let (quote, mut rest) = match rest {
            [Block::BlockQuote(children), rest @ ..] => (children, rest),
            _ => return Err(MalformedPage::MissingDescription),
        };

        let [Block::Paragraph(content)] = quote.as_slice() else {
            return Err(MalformedPage::InvalidDescription);
        };
        let (description, more_info) = split_more_info(&content.text);

        let mut examples = Vec::new();
        while !rest.is_empty() {
            let (example, remaining) = next_example(rest, examples.len())?;
            examples.push(example);
            rest = remaining;
        }

        Ok(Self {
            name,
            description,
            examples,
            more_info,
        })
    }

    pub fn has_more_info(&self) -> bool {
        self.more_info.is_some()
    }

    /// Description and more-info sentence joined as they are written in the
    /// page.
    pub fn full_description(&self) -> String {
        match &self.more_info {
            Some(more_info) => format!("{}\n{}", self.description, more_info),
            None => self.description.clone(),
        }
    }
}

impl FromStr for Page {
    type Err = MalformedPage;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

/// Split the trailing "more information" line off a description.
fn split_more_info(text: &str) -> (String, Option<String>) {
    match text.rsplit_once('\n') {
        Some((description, last)) if MORE_INFO_REGEX.is_match(last.trim_end()) => (
            description.to_string(),
            Some(last.trim_end().to_string()),
        ),
        _ => (text.to_string(), None),
    }
}

/// Consume one example (a single-item list and the command paragraph after
/// it) from the front of `blocks`.
fn next_example(blocks: &[Block], index: usize) -> Result<(Example, &[Block]), MalformedPage> {
    let invalid = MalformedPage::InvalidExample { index };

    let [Block::List(items), Block::Paragraph(command), rest @ ..] = blocks else {
        return Err(invalid);
    };
    let [item] = items.as_slice() else {
        return Err(invalid);
    };
    if !item.nested.is_empty() {
        return Err(invalid);
    }
    let command = command.tokens.first().ok_or(invalid)?;

    Ok((
        Example::new(strip_last_char(item), command.text.clone()),
        rest,
    ))
}

/// Example descriptions end with a colon that introduces the command.
fn strip_last_char(item: &ListItem) -> &str {
    let mut chars = item.content.text.chars();
    chars.next_back();
    chars.as_str()
}
