//! Flow reconstruction: lines into headings, paragraphs, and page breaks.
//!
//! Consumes grouped lines and emits an ordered sequence of
//! [`StructuredBlock`]s for the whole document, ready for a document codec
//! to serialize into a paginated archive.

use crate::layout::lines::{group_into_lines, FLOW_LINE_TOLERANCE};
use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

/// Configuration for flow reconstruction.
///
/// The heading thresholds are a tunable heuristic, not a correctness
/// requirement: a short line made of few fragments is usually a heading,
/// but nothing guarantees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// A line shorter than this many characters may be a heading candidate
    pub heading_max_chars: usize,
    /// A line with at most this many fragments may be a heading candidate
    pub heading_max_fragments: usize,
    /// Vertical tolerance used when grouping fragments into lines
    pub line_tolerance: i32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: 60,
            heading_max_fragments: 3,
            line_tolerance: FLOW_LINE_TOLERANCE,
        }
    }
}

/// One paragraph-like unit of reconstructed document flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredBlock {
    /// Text content of the block (empty for page-break markers)
    pub text: String,
    /// Heading level: 1 for the document title, 2 for page labels,
    /// 3 for heading candidates, `None` for body text
    pub heading_level: Option<u8>,
    /// Whether a page break precedes this block
    pub page_break_before: bool,
}

impl StructuredBlock {
    /// Create a heading block at the given level.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading_level: Some(level),
            page_break_before: false,
        }
    }

    /// Create a body text block.
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading_level: None,
            page_break_before: false,
        }
    }

    /// Create a page-break marker block.
    pub fn page_break() -> Self {
        Self {
            text: String::new(),
            heading_level: None,
            page_break_before: true,
        }
    }

    /// True if this block is a page-break marker with no content.
    pub fn is_page_break(&self) -> bool {
        self.page_break_before && self.text.is_empty()
    }
}

/// Derive the document title from a declared file name: the final
/// `.extension` is stripped, nothing else is altered.
pub(crate) fn document_title(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Reconstruct document flow from per-page fragment lists.
///
/// Emits one title block (heading level 1) derived from `document_name`,
/// then, per page: a "Page N" label (level 2) when the document has more
/// than one page, followed by the page's body blocks. A page-break marker
/// separates consecutive pages. A page yielding zero lines contributes no
/// body blocks, but its label is still emitted for multi-page documents.
pub fn build_flow(
    pages: &[Vec<TextFragment>],
    document_name: &str,
    config: &FlowConfig,
) -> Vec<StructuredBlock> {
    let mut blocks = vec![StructuredBlock::heading(1, document_title(document_name))];
    let multi_page = pages.len() > 1;

    for (index, fragments) in pages.iter().enumerate() {
        if multi_page {
            blocks.push(StructuredBlock::heading(2, format!("Page {}", index + 1)));
        }
        blocks.extend(page_blocks(fragments, config));
        if index + 1 < pages.len() {
            blocks.push(StructuredBlock::page_break());
        }
    }

    log::debug!(
        "flow reconstruction: {} pages -> {} blocks",
        pages.len(),
        blocks.len()
    );

    blocks
}

/// Reconstruct the body blocks for a single page.
///
/// Lines whose joined text is empty are skipped. A surviving line is a
/// heading candidate when its joined text is shorter than
/// `heading_max_chars` AND it is composed of `heading_max_fragments` or
/// fewer fragments.
pub fn page_blocks(fragments: &[TextFragment], config: &FlowConfig) -> Vec<StructuredBlock> {
    let mut blocks = Vec::new();

    for line in group_into_lines(fragments, config.line_tolerance) {
        let text = line.joined_text();
        if text.is_empty() {
            continue;
        }

        let is_heading = text.chars().count() < config.heading_max_chars
            && line.fragments.len() <= config.heading_max_fragments;

        blocks.push(if is_heading {
            StructuredBlock::heading(3, text)
        } else {
            StructuredBlock::body(text)
        });
    }

    blocks
}
