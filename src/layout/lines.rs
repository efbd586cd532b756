//! Line grouping by vertical-position tolerance.
//!
//! Fragments are sorted by `(y, x)` and walked in order; a new line starts
//! whenever a fragment's `y` drifts more than `tolerance` units from the
//! line's anchor fragment. Comparing against the anchor (the first fragment
//! encountered when sorted by y) rather than the previous fragment prevents
//! tolerance drift across a long run of slightly sloped text.

use crate::layout::TextFragment;

/// Line tolerance for flow reconstruction.
///
/// Tight enough that visually distinct lines are not merged.
pub const FLOW_LINE_TOLERANCE: i32 = 5;

/// Line tolerance for table reconstruction.
///
/// Looser than [`FLOW_LINE_TOLERANCE`]: cells of one table row often sit on
/// slightly different baselines and must still be treated as one row.
pub const TABLE_LINE_TOLERANCE: i32 = 8;

/// An ordered sequence of fragments judged to lie on the same baseline.
///
/// Invariants: every fragment's `y` is within the grouping tolerance of
/// `anchor_y`, and fragments are sorted by ascending `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The `y` of the first fragment encountered when sorted by y
    pub anchor_y: i32,
    /// Fragments on this line, sorted by ascending x
    pub fragments: Vec<TextFragment>,
}

impl Line {
    fn new(first: TextFragment) -> Self {
        Self {
            anchor_y: first.y,
            fragments: vec![first],
        }
    }

    /// Join the fragments' text with single spaces and trim the result.
    pub fn joined_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Group fragments into reading-order lines.
///
/// The input need not be pre-sorted. Fragments are cloned into the result;
/// grouping loses no fragments and introduces none.
///
/// Edge cases: empty input yields empty output, a single fragment yields a
/// single one-fragment line, and fragments at identical `y` all share one
/// line.
pub fn group_into_lines(fragments: &[TextFragment], tolerance: i32) -> Vec<Line> {
    let mut sorted: Vec<&TextFragment> = fragments.iter().collect();
    // Stable sort: extraction order breaks (y, x) ties.
    sorted.sort_by_key(|f| (f.y, f.x));

    let mut lines: Vec<Line> = Vec::new();
    for fragment in sorted {
        match lines.last_mut() {
            Some(line) if (fragment.y - line.anchor_y).abs() <= tolerance => {
                line.fragments.push(fragment.clone());
            },
            _ => lines.push(Line::new(fragment.clone())),
        }
    }

    // Already true by construction of the primary sort, but future input is
    // not guaranteed pre-sorted: treat ascending x as a post-condition.
    for line in &mut lines {
        line.fragments.sort_by_key(|f| f.x);
    }

    lines
}
