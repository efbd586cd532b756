//! Shared Office Open XML plumbing: XML event writing and ZIP packaging.
//!
//! OOXML documents are ZIP archives of XML parts. The writers in this
//! module build each part with `quick-xml` (so text content is escaped
//! correctly) and package the parts with `zip`.

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// XML writer over an in-memory buffer.
pub(crate) struct XmlPart {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlPart {
    /// Start a new part with the standard XML declaration.
    pub fn new() -> Result<Self> {
        let mut part = Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        };
        part.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(part)
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::CodecFailure(format!("XML write failed: {}", e)))
    }

    /// Open an element with the given attributes.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &(key, value) in attrs {
            elem.push_attribute((key, value));
        }
        self.event(Event::Start(elem))
    }

    /// Write a self-closing element with the given attributes.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &(key, value) in attrs {
            elem.push_attribute((key, value));
        }
        self.event(Event::Empty(elem))
    }

    /// Close an element.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// Write escaped text content.
    pub fn text(&mut self, content: &str) -> Result<()> {
        self.event(Event::Text(BytesText::new(content)))
    }

    /// Finish the part and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

/// Package named parts into a deflate-compressed ZIP archive.
pub(crate) fn write_archive(parts: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in parts {
        archive
            .start_file(name.as_str(), options)
            .map_err(|e| Error::CodecFailure(format!("Failed to start archive entry {}: {}", name, e)))?;
        archive.write_all(bytes)?;
    }

    let cursor = archive
        .finish()
        .map_err(|e| Error::CodecFailure(format!("Failed to finish archive: {}", e)))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_part_escapes_text() {
        let mut part = XmlPart::new().unwrap();
        part.start("t", &[]).unwrap();
        part.text("a < b & c").unwrap();
        part.end("t").unwrap();
        let xml = String::from_utf8(part.into_bytes()).unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_write_archive_round_trip() {
        let bytes = write_archive(&[("hello.txt".to_string(), b"hi".to_vec())]).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("hello.txt").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut entry, &mut content).unwrap();
        assert_eq!(content, "hi");
    }
}
