//! Document codec boundary.
//!
//! The reconstruction core hands structured output to a codec through the
//! narrow traits defined here: [`DocumentWriter`] packages a block sequence
//! into a paginated document archive, [`WorkbookWriter`] packages named
//! grids into a spreadsheet archive. Serializer failures surface as
//! [`Error::CodecFailure`](crate::error::Error::CodecFailure); no partial
//! file is ever returned.
//!
//! Default implementations producing Office Open XML archives are available
//! behind the `office` feature:
//!
//! ```toml
//! [dependencies]
//! reflow = { version = "0.1", features = ["office"] }
//! ```

#[cfg(feature = "office")]
mod docx;
#[cfg(feature = "office")]
mod ooxml;
#[cfg(feature = "office")]
mod xlsx;

#[cfg(feature = "office")]
pub use docx::DocxWriter;
#[cfg(feature = "office")]
pub use xlsx::XlsxWriter;

use crate::error::Result;
use crate::layout::{Sheet, StructuredBlock};

/// Serializes reconstructed flow blocks into a document archive.
pub trait DocumentWriter {
    /// Serialize the blocks into a complete archive, returned as bytes.
    fn write_document(&mut self, blocks: &[StructuredBlock]) -> Result<Vec<u8>>;
}

/// Serializes reconstructed sheets into a spreadsheet archive.
///
/// Implementors apply each grid's column width hints.
pub trait WorkbookWriter {
    /// Serialize the sheets into a complete archive, returned as bytes.
    fn write_workbook(&mut self, sheets: &[Sheet]) -> Result<Vec<u8>>;
}
