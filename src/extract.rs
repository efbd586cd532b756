//! Fragment extraction and coordinate normalization.
//!
//! Converts a page's raw collection of positioned text items into a
//! normalized, page-local fragment list suitable for line grouping.
//!
//! Two normalization rules apply, each exactly once:
//!
//! - The vertical axis is flipped (`y = viewport_height - translate_y`) so
//!   that increasing `y` means further down the page regardless of the
//!   renderer's native convention. Downstream consumers never re-flip.
//! - All positions and sizes are rounded to whole units to stabilize the
//!   clustering passes against floating-point jitter.

use crate::layout::TextFragment;
use crate::source::RenderedPage;

/// Extract normalized text fragments from a rendered page.
///
/// Items whose text is empty after trimming are dropped. A page with zero
/// extractable fragments yields an empty list, not an error; image-only
/// pages are a valid and expected state.
pub fn extract_fragments(page: &RenderedPage) -> Vec<TextFragment> {
    let fragments: Vec<TextFragment> = page
        .items
        .iter()
        .filter_map(|item| {
            let text = item.text.trim();
            if text.is_empty() {
                return None;
            }
            Some(TextFragment {
                text: text.to_string(),
                x: item.transform[4].round() as i32,
                y: (page.viewport_height - item.transform[5]).round() as i32,
                width: item.width.round() as i32,
                height: item.height.round() as i32,
            })
        })
        .collect();

    log::debug!(
        "extracted {} fragments from {} raw items",
        fragments.len(),
        page.items.len()
    );

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawTextItem;

    fn page(items: Vec<RawTextItem>) -> RenderedPage {
        RenderedPage {
            items,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn test_extract_flips_y_once() {
        let page = page(vec![RawTextItem::new("Hello", 10.0, 700.0, 30.0, 12.0)]);
        let fragments = extract_fragments(&page);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].x, 10);
        // 800 - 700: item near the top of the page gets a small y
        assert_eq!(fragments[0].y, 100);
    }

    #[test]
    fn test_extract_rounds_positions() {
        let page = page(vec![RawTextItem::new("Hi", 10.6, 700.4, 30.5, 11.5)]);
        let fragments = extract_fragments(&page);
        assert_eq!(fragments[0].x, 11);
        assert_eq!(fragments[0].y, 100); // 800.0 - 700.4 = 99.6 -> 100
        assert_eq!(fragments[0].width, 31);
        assert_eq!(fragments[0].height, 12);
    }

    #[test]
    fn test_extract_skips_whitespace_items() {
        let page = page(vec![
            RawTextItem::new("  ", 0.0, 0.0, 5.0, 10.0),
            RawTextItem::new("", 0.0, 0.0, 0.0, 0.0),
            RawTextItem::new(" kept ", 0.0, 0.0, 20.0, 10.0),
        ]);
        let fragments = extract_fragments(&page);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "kept");
    }

    #[test]
    fn test_extract_empty_page_is_valid() {
        let fragments = extract_fragments(&page(vec![]));
        assert!(fragments.is_empty());
    }
}
