//! Reconstructed grids to XLSX serialization.
//!
//! Produces a minimal SpreadsheetML archive with one worksheet per sheet.
//! Cell content is written as inline strings (no shared-string table) and
//! the grid's column width hints become `<col>` records.

use super::ooxml::{write_archive, XmlPart};
use super::WorkbookWriter;
use crate::error::Result;
use crate::layout::Sheet;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

/// Spreadsheet column label for a zero-based index: `A`, `B`, ..., `AA`.
fn column_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index;
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

/// XLSX workbook writer.
#[derive(Debug, Clone, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    /// Create a new XLSX writer.
    pub fn new() -> Self {
        Self
    }

    fn content_types_part(&self, sheet_count: usize) -> Result<Vec<u8>> {
        let mut part = XmlPart::new()?;
        part.start(
            "Types",
            &[("xmlns", "http://schemas.openxmlformats.org/package/2006/content-types")],
        )?;
        part.empty(
            "Default",
            &[
                ("Extension", "rels"),
                ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
            ],
        )?;
        part.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;
        part.empty(
            "Override",
            &[
                ("PartName", "/xl/workbook.xml"),
                (
                    "ContentType",
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
                ),
            ],
        )?;
        for index in 0..sheet_count {
            part.empty(
                "Override",
                &[
                    ("PartName", &format!("/xl/worksheets/sheet{}.xml", index + 1)),
                    (
                        "ContentType",
                        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml",
                    ),
                ],
            )?;
        }
        part.end("Types")?;
        Ok(part.into_bytes())
    }

    fn workbook_part(&self, sheets: &[Sheet]) -> Result<Vec<u8>> {
        let mut part = XmlPart::new()?;
        part.start(
            "workbook",
            &[
                ("xmlns", "http://schemas.openxmlformats.org/spreadsheetml/2006/main"),
                (
                    "xmlns:r",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
                ),
            ],
        )?;
        part.start("sheets", &[])?;
        for (index, sheet) in sheets.iter().enumerate() {
            let id = (index + 1).to_string();
            part.empty(
                "sheet",
                &[
                    ("name", sheet.name.as_str()),
                    ("sheetId", &id),
                    ("r:id", &format!("rId{}", id)),
                ],
            )?;
        }
        part.end("sheets")?;
        part.end("workbook")?;
        Ok(part.into_bytes())
    }

    fn workbook_rels_part(&self, sheet_count: usize) -> Result<Vec<u8>> {
        let mut part = XmlPart::new()?;
        part.start(
            "Relationships",
            &[("xmlns", "http://schemas.openxmlformats.org/package/2006/relationships")],
        )?;
        for index in 0..sheet_count {
            part.empty(
                "Relationship",
                &[
                    ("Id", &format!("rId{}", index + 1)),
                    (
                        "Type",
                        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet",
                    ),
                    ("Target", &format!("worksheets/sheet{}.xml", index + 1)),
                ],
            )?;
        }
        part.end("Relationships")?;
        Ok(part.into_bytes())
    }

    fn worksheet_part(&self, sheet: &Sheet) -> Result<Vec<u8>> {
        let mut part = XmlPart::new()?;
        part.start(
            "worksheet",
            &[("xmlns", "http://schemas.openxmlformats.org/spreadsheetml/2006/main")],
        )?;

        if !sheet.grid.column_widths.is_empty() {
            part.start("cols", &[])?;
            for (index, &width) in sheet.grid.column_widths.iter().enumerate() {
                let position = (index + 1).to_string();
                part.empty(
                    "col",
                    &[
                        ("min", position.as_str()),
                        ("max", position.as_str()),
                        ("width", &width.to_string()),
                        ("customWidth", "1"),
                    ],
                )?;
            }
            part.end("cols")?;
        }

        part.start("sheetData", &[])?;
        for (row_index, row) in sheet.grid.rows.iter().enumerate() {
            let row_ref = (row_index + 1).to_string();
            part.start("row", &[("r", row_ref.as_str())])?;
            for (col_index, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let cell_ref = format!("{}{}", column_label(col_index), row_ref);
                part.start("c", &[("r", cell_ref.as_str()), ("t", "inlineStr")])?;
                part.start("is", &[])?;
                part.start("t", &[("xml:space", "preserve")])?;
                part.text(cell)?;
                part.end("t")?;
                part.end("is")?;
                part.end("c")?;
            }
            part.end("row")?;
        }
        part.end("sheetData")?;
        part.end("worksheet")?;
        Ok(part.into_bytes())
    }
}

impl WorkbookWriter for XlsxWriter {
    fn write_workbook(&mut self, sheets: &[Sheet]) -> Result<Vec<u8>> {
        let mut parts: Vec<(String, Vec<u8>)> = vec![
            ("[Content_Types].xml".to_string(), self.content_types_part(sheets.len())?),
            ("_rels/.rels".to_string(), PACKAGE_RELS.as_bytes().to_vec()),
            ("xl/workbook.xml".to_string(), self.workbook_part(sheets)?),
            ("xl/_rels/workbook.xml.rels".to_string(), self.workbook_rels_part(sheets.len())?),
        ];
        for (index, sheet) in sheets.iter().enumerate() {
            parts.push((
                format!("xl/worksheets/sheet{}.xml", index + 1),
                self.worksheet_part(sheet)?,
            ));
        }

        write_archive(&parts)
    }
}
