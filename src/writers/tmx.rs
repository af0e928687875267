//! TMX 1.4 output.
//!
//! See <https://www.gala-global.org/tmx-14b>.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::{Writer, XmlEvents, create_xml_document, finish_xml_document, write_text_element};
use crate::core::TranslationPair;

const ROOT: &str = "tmx";
const TMX_NAMESPACE: &str = "http://www.lisa.org/tmx14";
const CREATION_TOOL: &str = "tldr-dataset";
const CREATION_ID: &str = "tldr-pages team and contributors";
/// TMX date format, always UTC.
const CREATION_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// One translation unit (`<tu>`) per pair, each holding a variant (`<tuv>`)
/// for both languages.
pub struct TmxWriter {
    events: XmlEvents,
}

impl TmxWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let mut events = create_xml_document(path)?;
        let creation_date = Utc::now().format(CREATION_DATE_FORMAT).to_string();

        events.write_event(Event::Start(
            BytesStart::new(ROOT).with_attributes([("xmlns", TMX_NAMESPACE), ("version", "1.4")]),
        ))?;
        events.write_event(Event::Empty(BytesStart::new("header").with_attributes([
            ("creationtool", CREATION_TOOL),
            ("creationtoolversion", env!("CARGO_PKG_VERSION")),
            ("segtype", "block"),
            ("adminlang", "en-US"),
            ("srclang", "*all*"),
            ("datatype", "plaintext"),
            ("o-tmf", CREATION_TOOL),
            ("o-encoding", "UTF-8"),
            ("creationdate", creation_date.as_str()),
            ("creationid", CREATION_ID),
            ("changeid", CREATION_ID),
        ])))?;
        events.write_event(Event::Start(BytesStart::new("body")))?;
        Ok(Self { events })
    }

    fn write_variant(&mut self, language: &str, text: &str) -> Result<()> {
        self.events.write_event(Event::Start(
            BytesStart::new("tuv").with_attributes([("xml:lang", language)]),
        ))?;
        write_text_element(&mut self.events, "seg", text)?;
        self.events.write_event(Event::End(BytesEnd::new("tuv")))?;
        Ok(())
    }
}

impl Writer for TmxWriter {
    fn write(&mut self, pair: &TranslationPair) -> Result<()> {
        self.events.write_event(Event::Start(BytesStart::new("tu")))?;
        self.write_variant(&pair.source_language, &pair.source_string)?;
        self.write_variant(&pair.target_language, &pair.target_string)?;
        self.events.write_event(Event::End(BytesEnd::new("tu")))?;
        Ok(())
    }

    fn finished(mut self: Box<Self>) -> Result<()> {
        self.events.write_event(Event::End(BytesEnd::new("body")))?;
        finish_xml_document(self.events, ROOT)
    }
}
