//! # reflow
//!
//! Layout-aware text reconstruction for page-oriented documents.
//!
//! Given an unstructured stream of positioned text fragments extracted from
//! a page, `reflow` rebuilds:
//!
//! - **Reading-order lines** via vertical-position tolerance clustering
//! - **Paragraph/heading structure** for document export (flow mode)
//! - **Tabular grids** for spreadsheet export (table mode)
//!
//! Page rendering and archive serialization are external collaborators
//! behind narrow traits: a [`PageSource`] yields raw positioned text items,
//! a [`DocumentWriter`]/[`WorkbookWriter`] pair packages the reconstructed
//! structure. Default Office Open XML writers ship behind the `office`
//! feature.
//!
//! ## Pipeline
//!
//! Extractor → Line Grouper → { Flow Builder | Table Builder }, selected by
//! the requested output mode. Each page is processed to completion before
//! the next begins, with progress reported per page and cooperative
//! cancellation at page boundaries.
//!
//! ## Quick start
//!
//! ```
//! use reflow::{
//!     reconstruct_document, FlowConfig, RawTextItem, RenderedPage, VecPageSource,
//! };
//!
//! # fn main() -> reflow::Result<()> {
//! let mut source = VecPageSource::new(vec![RenderedPage {
//!     items: vec![
//!         RawTextItem::new("Hello", 10.0, 780.0, 30.0, 12.0),
//!         RawTextItem::new("World", 60.0, 779.0, 30.0, 12.0),
//!     ],
//!     viewport_height: 800.0,
//! }]);
//!
//! let output = reconstruct_document(&mut source, "greeting.pdf", &FlowConfig::default(), None)?;
//! assert_eq!(output.file_name, "greeting.docx");
//! assert!(output.blocks.iter().any(|b| b.text == "Hello World"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Collaborator boundaries
pub mod codec;
pub mod source;

// Reconstruction core
pub mod convert;
pub mod extract;
pub mod layout;

pub use codec::{DocumentWriter, WorkbookWriter};
#[cfg(feature = "office")]
pub use codec::{DocxWriter, XlsxWriter};
pub use convert::{
    convert_to_document, convert_to_workbook, reconstruct_document, reconstruct_workbook,
    ConvertedFile, DocumentOutput, Progress, ProgressFn, WorkbookOutput,
};
pub use error::{Error, Result};
pub use extract::extract_fragments;
pub use layout::{
    build_flow, build_tables, detect_columns, group_into_lines, FlowConfig, Grid, Line, Sheet,
    StructuredBlock, TableConfig, TextFragment, DEFAULT_SHEET_NAME, FLOW_LINE_TOLERANCE,
    TABLE_LINE_TOLERANCE,
};
pub use source::{PageSource, RawTextItem, RenderedPage, VecPageSource};
