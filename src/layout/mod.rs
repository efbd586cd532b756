//! Layout reconstruction: lines, flow structure, and tabular grids.
//!
//! This module contains the geometric clustering core. Fragments extracted
//! from a page are grouped into reading-order lines
//! ([`lines::group_into_lines`]), which two independent consumers then
//! interpret:
//!
//! - [`flow`] classifies lines into headings and body paragraphs and emits
//!   an ordered block sequence per document.
//! - [`table`] detects column boundaries from x-coordinate clusters and
//!   emits a 2D grid per page.
//!
//! Both consumers regroup lines themselves, each with its own tolerance.

pub mod flow;
pub mod lines;
pub mod table;

pub use flow::{build_flow, FlowConfig, StructuredBlock};
pub use lines::{group_into_lines, Line, FLOW_LINE_TOLERANCE, TABLE_LINE_TOLERANCE};
pub use table::{build_tables, detect_columns, Grid, Sheet, TableConfig, DEFAULT_SHEET_NAME};

/// One atomic unit of extracted text on a page.
///
/// Coordinates are page-local integer units with `y` measured from the top
/// of the page; the flip from bottom-origin renderer coordinates happens
/// exactly once, at extraction. Fragments are immutable after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Text content, non-empty after trimming
    pub text: String,
    /// Horizontal origin in page units
    pub x: i32,
    /// Vertical origin in page units, increasing downward
    pub y: i32,
    /// Bounding box width, rounded to whole units
    pub width: i32,
    /// Bounding box height, rounded to whole units
    pub height: i32,
}

impl TextFragment {
    /// Create a fragment at `(x, y)` with a default-sized bounding box.
    pub fn new(text: impl Into<String>, x: i32, y: i32) -> Self {
        let text = text.into();
        let width = text.chars().count() as i32 * 6;
        Self {
            text,
            x,
            y,
            width,
            height: 10,
        }
    }
}
