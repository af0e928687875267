//! Block-level view of a markdown document.
//!
//! `pulldown-cmark` produces a flat stream of start/end events. Page parsing
//! only cares about a handful of top-level block shapes, so the stream is
//! folded into an explicit [`Block`] tree here and every other construct is
//! collapsed into [`Block::Other`]. A page that contains one is rejected by
//! the page parser instead of being silently misread.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Text,
    Code,
    Link,
    /// Emphasis, inline HTML, images and similar spans.
    Markup,
    /// Soft or hard line break.
    Break,
}

/// One inline token of a heading, paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub kind: InlineKind,
    /// Rendered text: code span content without backticks, whole source
    /// span for links and markup.
    pub text: String,
    /// Byte range of the token in the source document.
    pub range: Range<usize>,
}

/// Inline content of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inlines {
    pub tokens: Vec<Inline>,
    /// Source text of the content, line by line, without block markers such
    /// as `> ` or `- `. Lines are joined with `\n`.
    pub text: String,
}

impl Inlines {
    fn new(source: &str, tokens: Vec<Inline>) -> Self {
        let text = tokens
            .split(|token| token.kind == InlineKind::Break)
            .map(|line| match (line.first(), line.last()) {
                (Some(first), Some(last)) => &source[line_start(source, first)..last.range.end],
                _ => "",
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self { tokens, text }
    }
}

/// Where the line beginning with `first` starts in the source.
///
/// The text of a backslash escape starts after the backslash, which still
/// belongs to the line.
fn line_start(source: &str, first: &Inline) -> usize {
    let start = first.range.start;
    if first.kind == InlineKind::Text && start > 0 && source.as_bytes()[start - 1] == b'\\' {
        start - 1
    } else {
        start
    }
}

/// One list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Inline content of the item's own paragraphs.
    pub content: Inlines,
    /// Lists, code blocks, quotes and other blocks nested in the item.
    pub nested: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Inlines },
    BlockQuote(Vec<Block>),
    List(Vec<ListItem>),
    Paragraph(Inlines),
    /// Code blocks, rules, tables, HTML blocks and anything else.
    Other,
}

/// Split `source` into its top-level blocks.
pub fn tokenize(source: &str) -> Vec<Block> {
    let mut builder = BlockBuilder {
        source,
        stack: Vec::new(),
        blocks: Vec::new(),
        skip_depth: 0,
    };

    for (event, range) in Parser::new_ext(source, Options::empty()).into_offset_iter() {
        builder.push(event, range);
    }

    builder.blocks
}

enum Frame {
    Heading(u8, Vec<Inline>),
    BlockQuote(Vec<Block>),
    List(Vec<ListItem>),
    Item {
        tokens: Vec<Inline>,
        nested: Vec<Block>,
    },
    Paragraph(Vec<Inline>),
    /// Block whose content is not inspected.
    Opaque,
}

struct BlockBuilder<'s> {
    source: &'s str,
    stack: Vec<Frame>,
    blocks: Vec<Block>,
    /// Nesting depth inside an inline span that was recorded as a whole.
    skip_depth: usize,
}

impl BlockBuilder<'_> {
    fn push(&mut self, event: Event<'_>, range: Range<usize>) {
        if self.skip_depth > 0 {
            match event {
                Event::Start(_) => self.skip_depth += 1,
                Event::End(_) => self.skip_depth -= 1,
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag, range),
            Event::End(_) => self.end(),
            Event::Text(text) => self.inline(InlineKind::Text, text.into_string(), range),
            Event::Code(code) => self.inline(InlineKind::Code, code.into_string(), range),
            Event::SoftBreak | Event::HardBreak => {
                self.inline(InlineKind::Break, "\n".to_string(), range)
            }
            Event::Html(_) if self.in_inline_content() => {
                let raw = self.source[range.clone()].to_string();
                self.inline(InlineKind::Markup, raw, range)
            }
            Event::Html(_) | Event::Rule => self.emit(Block::Other),
            _ => {
                let raw = self.source[range.clone()].to_string();
                self.inline(InlineKind::Markup, raw, range)
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>, range: Range<usize>) {
        let frame = match tag {
            Tag::Heading(level, _, _) => Frame::Heading(level as u8, Vec::new()),
            Tag::BlockQuote => Frame::BlockQuote(Vec::new()),
            Tag::List(_) => Frame::List(Vec::new()),
            Tag::Item => Frame::Item {
                tokens: Vec::new(),
                nested: Vec::new(),
            },
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Link(..) => return self.inline_span(InlineKind::Link, range),
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Image(..) => {
                return self.inline_span(InlineKind::Markup, range);
            }
            _ => Frame::Opaque,
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Heading(level, tokens) => self.emit(Block::Heading {
                level,
                content: Inlines::new(self.source, tokens),
            }),
            Frame::BlockQuote(children) => self.emit(Block::BlockQuote(children)),
            Frame::List(items) => self.emit(Block::List(items)),
            Frame::Item { tokens, nested } => {
                let item = ListItem {
                    content: Inlines::new(self.source, tokens),
                    nested,
                };
                if let Some(Frame::List(items)) = self.stack.last_mut() {
                    items.push(item);
                }
            }
            Frame::Paragraph(mut tokens) => match self.stack.last_mut() {
                // Loose list items wrap their content in paragraphs.
                Some(Frame::Item { tokens: item, .. }) => {
                    if let Some(last) = item.last() {
                        let at = last.range.end;
                        item.push(Inline {
                            kind: InlineKind::Break,
                            text: "\n".to_string(),
                            range: at..at,
                        });
                    }
                    item.append(&mut tokens);
                }
                _ => self.emit(Block::Paragraph(Inlines::new(self.source, tokens))),
            },
            Frame::Opaque => self.emit(Block::Other),
        }
    }

    /// Record a whole inline span (link, emphasis, ...) as one token and skip
    /// its inner events.
    fn inline_span(&mut self, kind: InlineKind, range: Range<usize>) {
        let raw = self.source[range.clone()].to_string();
        self.inline(kind, raw, range);
        self.skip_depth = 1;
    }

    fn inline(&mut self, kind: InlineKind, text: String, range: Range<usize>) {
        match self.stack.last_mut() {
            Some(
                Frame::Heading(_, tokens) | Frame::Item { tokens, .. } | Frame::Paragraph(tokens),
            ) => {
                tokens.push(Inline { kind, text, range });
            }
            _ => {}
        }
    }

    fn in_inline_content(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Frame::Heading(..) | Frame::Item { .. } | Frame::Paragraph(_))
        )
    }

    fn emit(&mut self, block: Block) {
        match self.stack.last_mut() {
            None => self.blocks.push(block),
            Some(Frame::BlockQuote(children) | Frame::Item { nested: children, .. }) => {
                children.push(block)
            }
            // Opaque blocks are reported as a whole.
            Some(_) => {}
        }
    }
}
