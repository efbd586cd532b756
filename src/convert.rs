//! Conversion orchestration.
//!
//! Drives the page-by-page pipeline: render a page, extract its fragments,
//! build its structure, then move on. Progress is reported after each page
//! so a caller can update an indicator; the progress callback's return
//! value is the cooperative cancellation point. Any failure aborts the
//! whole multi-page operation and discards earlier pages, since a document
//! archive cannot be emitted incompletely. There is no retry logic;
//! every entry point is idempotent and safely re-invokable.

use crate::codec::{DocumentWriter, WorkbookWriter};
use crate::error::{Error, Result};
use crate::extract::extract_fragments;
use crate::layout::flow::{document_title, page_blocks};
use crate::layout::{build_tables, FlowConfig, Sheet, StructuredBlock, TableConfig};
use crate::source::PageSource;

/// Progress report delivered after each completed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of pages completed so far (1-based)
    pub completed: usize,
    /// Total number of pages in the document
    pub total: usize,
}

/// Progress callback; return `false` to cancel the conversion at the next
/// page boundary.
pub type ProgressFn<'a> = dyn FnMut(Progress) -> bool + 'a;

/// Reconstructed document flow plus the conventional output file name.
#[derive(Debug, Clone)]
pub struct DocumentOutput {
    /// Default extension-qualified name: `<base>.docx`
    pub file_name: String,
    /// Ordered block sequence for the whole document
    pub blocks: Vec<StructuredBlock>,
}

/// Reconstructed workbook plus the conventional output file name.
#[derive(Debug, Clone)]
pub struct WorkbookOutput {
    /// Default extension-qualified name: `<base>-tables.xlsx`
    pub file_name: String,
    /// One sheet per page with content
    pub sheets: Vec<Sheet>,
}

/// A serialized conversion result.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    /// Default extension-qualified output name
    pub file_name: String,
    /// Complete archive bytes
    pub bytes: Vec<u8>,
}

fn report(progress: &mut Option<&mut ProgressFn<'_>>, completed: usize, total: usize) -> Result<()> {
    if let Some(callback) = progress {
        if !callback(Progress { completed, total }) {
            log::info!("conversion cancelled after page {}/{}", completed, total);
            return Err(Error::Cancelled(completed));
        }
    }
    Ok(())
}

/// Collect normalized fragments for every page, reporting progress.
fn collect_pages<S: PageSource>(
    source: &mut S,
    mut progress: Option<&mut ProgressFn<'_>>,
) -> Result<Vec<Vec<crate::layout::TextFragment>>> {
    let total = source.page_count();
    let mut pages = Vec::with_capacity(total);
    for index in 0..total {
        let page = source.render_page(index)?;
        pages.push(extract_fragments(&page));
        report(&mut progress, index + 1, total)?;
    }
    Ok(pages)
}

/// Reconstruct document flow from a page source.
///
/// Emits the title block, then per page (processed to completion before the
/// next begins) the page label, body blocks, and inter-page break markers.
/// Returns the block sequence together with the conventional `<base>.docx`
/// output name.
pub fn reconstruct_document<S: PageSource>(
    source: &mut S,
    document_name: &str,
    config: &FlowConfig,
    mut progress: Option<&mut ProgressFn<'_>>,
) -> Result<DocumentOutput> {
    let total = source.page_count();
    let title = document_title(document_name);
    let multi_page = total > 1;

    let mut blocks = vec![StructuredBlock::heading(1, title)];
    for index in 0..total {
        let page = source.render_page(index)?;
        let fragments = extract_fragments(&page);
        if multi_page {
            blocks.push(StructuredBlock::heading(2, format!("Page {}", index + 1)));
        }
        blocks.extend(page_blocks(&fragments, config));
        if index + 1 < total {
            blocks.push(StructuredBlock::page_break());
        }
        report(&mut progress, index + 1, total)?;
    }

    log::info!("reconstructed {} flow blocks from {} pages", blocks.len(), total);
    Ok(DocumentOutput {
        file_name: format!("{}.docx", title),
        blocks,
    })
}

/// Reconstruct a workbook from a page source.
///
/// Returns one sheet per page with content together with the conventional
/// `<base>-tables.xlsx` output name.
pub fn reconstruct_workbook<S: PageSource>(
    source: &mut S,
    document_name: &str,
    config: &TableConfig,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<WorkbookOutput> {
    let pages = collect_pages(source, progress)?;
    let sheets = build_tables(&pages, config);

    log::info!("reconstructed {} sheets from {} pages", sheets.len(), pages.len());
    Ok(WorkbookOutput {
        file_name: format!("{}-tables.xlsx", document_title(document_name)),
        sheets,
    })
}

/// Reconstruct document flow and serialize it through `writer`.
pub fn convert_to_document<S: PageSource, W: DocumentWriter>(
    source: &mut S,
    document_name: &str,
    config: &FlowConfig,
    writer: &mut W,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<ConvertedFile> {
    let output = reconstruct_document(source, document_name, config, progress)?;
    let bytes = writer.write_document(&output.blocks)?;
    Ok(ConvertedFile {
        file_name: output.file_name,
        bytes,
    })
}

/// Reconstruct tables and serialize them through `writer`.
pub fn convert_to_workbook<S: PageSource, W: WorkbookWriter>(
    source: &mut S,
    document_name: &str,
    config: &TableConfig,
    writer: &mut W,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<ConvertedFile> {
    let output = reconstruct_workbook(source, document_name, config, progress)?;
    let bytes = writer.write_workbook(&output.sheets)?;
    Ok(ConvertedFile {
        file_name: output.file_name,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RawTextItem, RenderedPage, VecPageSource};

    fn page(items: Vec<RawTextItem>) -> RenderedPage {
        RenderedPage {
            items,
            viewport_height: 800.0,
        }
    }

    fn two_page_source() -> VecPageSource {
        VecPageSource::new(vec![
            page(vec![RawTextItem::new("Hello", 10.0, 790.0, 30.0, 12.0)]),
            page(vec![RawTextItem::new("World", 10.0, 790.0, 30.0, 12.0)]),
        ])
    }

    #[test]
    fn test_reconstruct_document_naming() {
        let mut source = two_page_source();
        let output =
            reconstruct_document(&mut source, "report.pdf", &FlowConfig::default(), None).unwrap();
        assert_eq!(output.file_name, "report.docx");
        assert_eq!(output.blocks[0], StructuredBlock::heading(1, "report"));
    }

    #[test]
    fn test_reconstruct_workbook_naming() {
        let mut source = two_page_source();
        let output =
            reconstruct_workbook(&mut source, "report.pdf", &TableConfig::default(), None).unwrap();
        assert_eq!(output.file_name, "report-tables.xlsx");
        assert_eq!(output.sheets.len(), 2);
    }

    #[test]
    fn test_progress_reported_per_page() {
        let mut source = two_page_source();
        let mut seen = Vec::new();
        let mut callback = |p: Progress| {
            seen.push(p);
            true
        };
        reconstruct_document(&mut source, "a.pdf", &FlowConfig::default(), Some(&mut callback))
            .unwrap();
        assert_eq!(
            seen,
            vec![
                Progress { completed: 1, total: 2 },
                Progress { completed: 2, total: 2 }
            ]
        );
    }

    #[test]
    fn test_cancellation_between_pages() {
        let mut source = two_page_source();
        let mut callback = |p: Progress| p.completed < 1;
        let err = reconstruct_document(
            &mut source,
            "a.pdf",
            &FlowConfig::default(),
            Some(&mut callback),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Cancelled(1)));
    }

    #[test]
    fn test_render_failure_aborts() {
        struct FailingSource;
        impl PageSource for FailingSource {
            fn page_count(&self) -> usize {
                2
            }
            fn render_page(&mut self, index: usize) -> Result<RenderedPage> {
                if index == 0 {
                    Ok(RenderedPage::default())
                } else {
                    Err(Error::RenderFailure {
                        page: index,
                        reason: "corrupted page".to_string(),
                    })
                }
            }
        }

        let err = reconstruct_workbook(
            &mut FailingSource,
            "a.pdf",
            &TableConfig::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::RenderFailure { page: 1, .. }));
    }
}
