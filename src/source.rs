//! Page source abstraction.
//!
//! The reconstruction core never parses page content itself. It consumes
//! pages from a [`PageSource`] collaborator (typically a renderer backed by
//! a real page-description parser) that yields raw positioned text items in
//! content-stream order.
//!
//! Page order and index contiguity are input invariants the source must
//! uphold; the core does not re-validate them. A source that returns pages
//! out of order will silently mislabel sheets and page headings.

use crate::error::{Error, Result};

/// One raw text item as produced by a page renderer.
///
/// Positions are carried in the renderer's native coordinate convention
/// (y measured from the bottom of the page); the translation components of
/// the affine transform give the item's origin. Normalization into page-local
/// top-origin coordinates happens once, in
/// [`extract_fragments`](crate::extract::extract_fragments).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextItem {
    /// Text content of the item (may be empty or pure whitespace)
    pub text: String,
    /// 2D affine transform `[a, b, c, d, e, f]`; `e`/`f` are the
    /// x/y translation components
    pub transform: [f32; 6],
    /// Declared width of the item's bounding box
    pub width: f32,
    /// Declared height of the item's bounding box
    pub height: f32,
}

impl RawTextItem {
    /// Create an axis-aligned item at `(x, y)` in renderer coordinates.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            transform: [1.0, 0.0, 0.0, 1.0, x, y],
            width,
            height,
        }
    }
}

/// A rendered page: raw text items plus the viewport height needed to flip
/// the vertical axis into top-origin coordinates.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    /// Raw text items in content-stream order
    pub items: Vec<RawTextItem>,
    /// Height of the page viewport in renderer units
    pub viewport_height: f32,
}

/// A source of rendered pages.
///
/// Implementors must preserve extraction order matching the original content
/// stream order; that order is the stable tie-break when fragment positions
/// coincide. A failure to render a page is reported as
/// [`Error::RenderFailure`] and aborts the whole conversion.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Render the page at `index` (zero-based).
    fn render_page(&mut self, index: usize) -> Result<RenderedPage>;
}

/// An in-memory page source backed by a `Vec` of pre-rendered pages.
///
/// Useful for tests and for callers that already hold extracted page data.
#[derive(Debug, Clone, Default)]
pub struct VecPageSource {
    pages: Vec<RenderedPage>,
}

impl VecPageSource {
    /// Create a source from pre-rendered pages.
    pub fn new(pages: Vec<RenderedPage>) -> Self {
        Self { pages }
    }
}

impl PageSource for VecPageSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&mut self, index: usize) -> Result<RenderedPage> {
        self.pages.get(index).cloned().ok_or(Error::PageOutOfRange {
            index,
            count: self.pages.len(),
        })
    }
}
