//! Structured blocks to DOCX serialization.
//!
//! Produces a minimal WordprocessingML archive: `word/document.xml` with
//! one `<w:p>` per block, plus the package boilerplate (content types,
//! relationships, core properties). Headings use direct run formatting
//! (bold plus a larger size) so the output renders without a styles part.

use super::ooxml::{write_archive, XmlPart};
use super::DocumentWriter;
use crate::error::Result;
use crate::layout::StructuredBlock;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

/// Heading font sizes in half-points, indexed by heading level.
fn heading_size_half_points(level: u8) -> &'static str {
    match level {
        1 => "48", // 24pt
        2 => "36", // 18pt
        _ => "28", // 14pt
    }
}

/// DOCX document writer.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new DOCX writer.
    pub fn new() -> Self {
        Self
    }

    /// Build `word/document.xml` from the block sequence.
    fn document_part(&self, blocks: &[StructuredBlock]) -> Result<Vec<u8>> {
        let mut part = XmlPart::new()?;
        part.start("w:document", &[("xmlns:w", WORDPROCESSING_NS)])?;
        part.start("w:body", &[])?;

        for block in blocks {
            part.start("w:p", &[])?;

            if block.page_break_before && !block.text.is_empty() {
                part.start("w:pPr", &[])?;
                part.empty("w:pageBreakBefore", &[])?;
                part.end("w:pPr")?;
            }

            part.start("w:r", &[])?;
            if block.is_page_break() {
                part.empty("w:br", &[("w:type", "page")])?;
            } else {
                if let Some(level) = block.heading_level {
                    part.start("w:rPr", &[])?;
                    part.empty("w:b", &[])?;
                    part.empty("w:sz", &[("w:val", heading_size_half_points(level))])?;
                    part.end("w:rPr")?;
                }
                part.start("w:t", &[("xml:space", "preserve")])?;
                part.text(&block.text)?;
                part.end("w:t")?;
            }
            part.end("w:r")?;

            part.end("w:p")?;
        }

        part.end("w:body")?;
        part.end("w:document")?;
        Ok(part.into_bytes())
    }

    /// Build `docProps/core.xml` with the document title and a timestamp.
    fn core_properties_part(&self, blocks: &[StructuredBlock]) -> Result<Vec<u8>> {
        let title = blocks
            .iter()
            .find(|b| b.heading_level == Some(1))
            .map(|b| b.text.as_str())
            .unwrap_or("Document");
        let created = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut part = XmlPart::new()?;
        part.start(
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        )?;
        part.start("dc:title", &[])?;
        part.text(title)?;
        part.end("dc:title")?;
        part.start("dc:creator", &[])?;
        part.text("reflow")?;
        part.end("dc:creator")?;
        part.start("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")])?;
        part.text(&created)?;
        part.end("dcterms:created")?;
        part.end("cp:coreProperties")?;
        Ok(part.into_bytes())
    }
}

impl DocumentWriter for DocxWriter {
    fn write_document(&mut self, blocks: &[StructuredBlock]) -> Result<Vec<u8>> {
        let document = self.document_part(blocks)?;
        let core = self.core_properties_part(blocks)?;

        write_archive(&[
            ("[Content_Types].xml".to_string(), CONTENT_TYPES.as_bytes().to_vec()),
            ("_rels/.rels".to_string(), PACKAGE_RELS.as_bytes().to_vec()),
            ("word/document.xml".to_string(), document),
            ("docProps/core.xml".to_string(), core),
        ])
    }
}
