use std::path::Path;

use anyhow::Result;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::{Writer, XmlEvents, create_xml_document, finish_xml_document, write_text_element};
use crate::core::TranslationPair;

const ROOT: &str = "mappings";

/// `<mappings>` document with one `<mapping>` element per pair.
pub struct XmlWriter {
    events: XmlEvents,
}

impl XmlWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let mut events = create_xml_document(path)?;
        events.write_event(Event::Start(BytesStart::new(ROOT)))?;
        Ok(Self { events })
    }
}

impl Writer for XmlWriter {
    fn write(&mut self, pair: &TranslationPair) -> Result<()> {
        let fields = [
            ("sourceLanguage", &pair.source_language),
            ("targetLanguage", &pair.target_language),
            ("sourceString", &pair.source_string),
            ("targetString", &pair.target_string),
        ];

        self.events.write_event(Event::Start(BytesStart::new("mapping")))?;
        for (name, value) in fields {
            write_text_element(&mut self.events, name, value)?;
        }
        self.events.write_event(Event::End(BytesEnd::new("mapping")))?;
        Ok(())
    }

    fn finished(self: Box<Self>) -> Result<()> {
        finish_xml_document(self.events, ROOT)
    }
}
