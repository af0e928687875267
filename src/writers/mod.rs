//! Dataset writers.
//!
//! A writer receives translation pairs one at a time through
//! [`Writer::write`] and is consumed by [`Writer::finished`], which persists
//! whatever is still buffered and releases the file.

use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use quick_xml::events::{BytesDecl, BytesEnd, BytesText, Event};
use serde::{Deserialize, Serialize};

use crate::core::TranslationPair;

mod csv;
mod json;
mod tmx;
mod xml;

pub use self::csv::CsvWriter;
pub use self::json::JsonWriter;
pub use self::tmx::TmxWriter;
pub use self::xml::XmlWriter;

pub trait Writer {
    /// Queue one pair. Depending on the format this writes directly to the
    /// file or buffers until [`Writer::finished`].
    fn write(&mut self, pair: &TranslationPair) -> Result<()>;

    /// Flush everything and close the output.
    fn finished(self: Box<Self>) -> Result<()>;
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Csv,
    Json,
    /// Translation Memory eXchange 1.4
    Tmx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Tmx => "tmx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Create the writer for `format` writing to `path`.
pub fn create_writer(path: &Path, format: OutputFormat) -> Result<Box<dyn Writer>> {
    let writer: Box<dyn Writer> = match format {
        OutputFormat::Xml => Box::new(XmlWriter::create(path)?),
        OutputFormat::Csv => Box::new(CsvWriter::create(path)?),
        OutputFormat::Json => Box::new(JsonWriter::create(path)),
        OutputFormat::Tmx => Box::new(TmxWriter::create(path)?),
    };
    Ok(writer)
}

/// Event writer shared by the XML based formats.
pub(crate) type XmlEvents = quick_xml::Writer<BufWriter<File>>;

/// Create `path` and write the XML declaration. Elements are indented by
/// two spaces.
pub(crate) fn create_xml_document(path: &Path) -> Result<XmlEvents> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut events = quick_xml::Writer::new_with_indent(BufWriter::new(file), b' ', 2);
    events.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(events)
}

/// Close the `root` element and flush the document.
pub(crate) fn finish_xml_document(mut events: XmlEvents, root: &str) -> Result<()> {
    events.write_event(Event::End(BytesEnd::new(root)))?;
    let mut out = events.into_inner();
    out.write_all(b"\n")?;
    out.flush().context("Failed to flush XML output")
}

/// Write `<name>text</name>`, escaped and without characters XML 1.0 cannot
/// represent.
pub(crate) fn write_text_element(events: &mut XmlEvents, name: &str, text: &str) -> Result<()> {
    events
        .create_element(name)
        .write_text_content(BytesText::new(&strip_invalid_xml_chars(text)))?;
    Ok(())
}

/// Drop characters that are not allowed anywhere in an XML 1.0 document,
/// not even as character references.
pub(crate) fn strip_invalid_xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
