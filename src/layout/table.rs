//! Table reconstruction: lines into column-aligned grids.
//!
//! Column boundaries are inferred by clustering the distinct fragment start
//! positions observed across all lines on a page. Each fragment is then
//! assigned to its nearest column and the page becomes a 2D grid of strings,
//! one sheet per page.

use crate::layout::lines::{group_into_lines, Line, TABLE_LINE_TOLERANCE};
use crate::layout::TextFragment;
use serde::{Deserialize, Serialize};

/// Fixed sheet name used when the document has exactly one page with content.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Configuration for table reconstruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Vertical tolerance used when grouping fragments into rows
    pub line_tolerance: i32,
    /// Two x positions closer than this are the same column.
    ///
    /// This threshold is the sole control on over/under-segmentation of
    /// columns.
    pub min_column_separation: i32,
    /// Lower clamp for the per-column width hint
    pub min_column_width: usize,
    /// Upper clamp for the per-column width hint
    pub max_column_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            line_tolerance: TABLE_LINE_TOLERANCE,
            min_column_separation: 20,
            min_column_width: 10,
            max_column_width: 50,
        }
    }
}

/// A 2D grid of cell strings with presentation width hints.
///
/// Invariant: no row is entirely blank after trimming every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell contents, one inner vector per row, sized to the column count
    pub rows: Vec<Vec<String>>,
    /// Per-column width hint: the maximum content length observed in that
    /// column, clamped to the configured bounds
    pub column_widths: Vec<usize>,
}

/// A named grid, consumed by the workbook codec as one spreadsheet sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name shown in the workbook
    pub name: String,
    /// The reconstructed grid
    pub grid: Grid,
}

/// Detect column representatives from the lines of one page.
///
/// Every fragment `x` across all lines is collected into a sorted set of
/// distinct values. Walking in ascending order, a candidate starts a new
/// column when it exceeds the most-recently-accepted representative by more
/// than `min_separation`; otherwise it merges into that column. The
/// first-seen representative is kept, not averaged.
pub fn detect_columns(lines: &[Line], min_separation: i32) -> Vec<i32> {
    let mut xs: Vec<i32> = lines
        .iter()
        .flat_map(|line| line.fragments.iter().map(|f| f.x))
        .collect();
    xs.sort_unstable();
    xs.dedup();

    let mut columns: Vec<i32> = Vec::new();
    for x in xs {
        match columns.last() {
            Some(&last) if x - last <= min_separation => {},
            _ => columns.push(x),
        }
    }
    columns
}

/// Index of the column whose representative is nearest to `x`.
///
/// Ties break to the lowest index: the scan uses strict less-than, so the
/// leftmost column wins when a fragment is equidistant from two columns.
fn nearest_column(columns: &[i32], x: i32) -> usize {
    let mut best = 0;
    let mut best_distance = (x - columns[0]).abs();
    for (index, &column) in columns.iter().enumerate().skip(1) {
        let distance = (x - column).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Build a grid from the lines of one page.
///
/// Rows that end up entirely blank after trimming every cell are dropped;
/// inter-line spacing wider than the line tolerance would otherwise produce
/// phantom empty rows.
fn build_grid(lines: &[Line], config: &TableConfig) -> Grid {
    let columns = detect_columns(lines, config.min_column_separation);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in lines {
        let mut row = vec![String::new(); columns.len()];
        for fragment in &line.fragments {
            let cell = &mut row[nearest_column(&columns, fragment.x)];
            // Same-column fragments concatenate left-to-right; the line is
            // already sorted by ascending x.
            if !cell.is_empty() {
                cell.push(' ');
            }
            cell.push_str(&fragment.text);
        }
        if row.iter().any(|cell| !cell.trim().is_empty()) {
            rows.push(row);
        }
    }

    let column_widths = (0..columns.len())
        .map(|index| {
            rows.iter()
                .map(|row| row[index].chars().count())
                .max()
                .unwrap_or(0)
                .clamp(config.min_column_width, config.max_column_width)
        })
        .collect();

    Grid { rows, column_widths }
}

/// Reconstruct one sheet per page with content.
///
/// Pages yielding zero lines are skipped entirely. Sheets are named by the
/// original 1-based page index ("Page N") without renumbering when earlier
/// pages were skipped; a document with exactly one page with content gets
/// the fixed [`DEFAULT_SHEET_NAME`] instead.
pub fn build_tables(pages: &[Vec<TextFragment>], config: &TableConfig) -> Vec<Sheet> {
    let mut grids: Vec<(usize, Grid)> = Vec::new();

    for (index, fragments) in pages.iter().enumerate() {
        let lines = group_into_lines(fragments, config.line_tolerance);
        if lines.is_empty() {
            log::debug!("page {} has no lines, skipping sheet", index + 1);
            continue;
        }
        grids.push((index, build_grid(&lines, config)));
    }

    let single = grids.len() == 1;
    grids
        .into_iter()
        .map(|(index, grid)| Sheet {
            name: if single {
                DEFAULT_SHEET_NAME.to_string()
            } else {
                format!("Page {}", index + 1)
            },
            grid,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: i32, y: i32) -> TextFragment {
        TextFragment::new(text, x, y)
    }

    fn lines_of(fragments: Vec<TextFragment>) -> Vec<Line> {
        group_into_lines(&fragments, TABLE_LINE_TOLERANCE)
    }

    #[test]
    fn test_detect_columns_merges_close_positions() {
        // Scenario C: x = [10, 15, 80, 83] -> columns [10, 80]
        let lines = lines_of(vec![
            frag("a", 10, 0),
            frag("b", 15, 0),
            frag("c", 80, 0),
            frag("d", 83, 0),
        ]);
        assert_eq!(detect_columns(&lines, 20), vec![10, 80]);
    }

    #[test]
    fn test_detect_columns_keeps_first_seen_representative() {
        let lines = lines_of(vec![frag("a", 10, 0), frag("b", 28, 20), frag("c", 30, 40)]);
        // 28 and 30 merge into 10's cluster chain: 28-10=18<=20, 30-10=20<=20
        assert_eq!(detect_columns(&lines, 20), vec![10]);
    }

    #[test]
    fn test_detect_columns_idempotent() {
        let lines = lines_of(vec![
            frag("a", 5, 0),
            frag("b", 40, 0),
            frag("c", 90, 0),
            frag("d", 95, 20),
        ]);
        let first = detect_columns(&lines, 20);
        let second = detect_columns(&lines, 20);
        assert_eq!(first, second);
        assert_eq!(first, vec![5, 40, 90]);
    }

    #[test]
    fn test_nearest_column_leftmost_wins_on_tie() {
        // x = 50 is equidistant from 40 and 60
        assert_eq!(nearest_column(&[40, 60], 50), 0);
        assert_eq!(nearest_column(&[40, 60], 55), 1);
        assert_eq!(nearest_column(&[40, 60], 45), 0);
    }

    #[test]
    fn test_grid_assigns_cells_by_column() {
        let sheets = build_tables(
            &[vec![
                frag("Name", 10, 0),
                frag("Age", 100, 0),
                frag("Ada", 10, 30),
                frag("36", 100, 31),
            ]],
            &TableConfig::default(),
        );
        assert_eq!(sheets.len(), 1);
        let grid = &sheets[0].grid;
        assert_eq!(grid.rows, vec![vec!["Name", "Age"], vec!["Ada", "36"]]);
    }

    #[test]
    fn test_grid_space_joins_same_cell_fragments() {
        let sheets = build_tables(
            &[vec![frag("Hello", 10, 0), frag("World", 15, 0), frag("x", 100, 0)]],
            &TableConfig::default(),
        );
        assert_eq!(sheets[0].grid.rows, vec![vec!["Hello World", "x"]]);
    }

    #[test]
    fn test_column_width_hints_clamped() {
        let wide = "w".repeat(80);
        let sheets = build_tables(
            &[vec![frag(&wide, 10, 0), frag("x", 600, 0)]],
            &TableConfig::default(),
        );
        assert_eq!(sheets[0].grid.column_widths, vec![50, 10]);
    }

    #[test]
    fn test_empty_pages_skipped_without_renumbering() {
        // Scenario D: page 2 empty -> sheets "Page 1" and "Page 3"
        let sheets = build_tables(
            &[
                vec![frag("a", 0, 0)],
                vec![],
                vec![frag("b", 0, 0)],
            ],
            &TableConfig::default(),
        );
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Page 1", "Page 3"]);
    }

    #[test]
    fn test_single_content_page_uses_default_sheet_name() {
        // Scenario E
        let sheets = build_tables(&[vec![frag("only", 0, 0)]], &TableConfig::default());
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, DEFAULT_SHEET_NAME);
    }

    #[test]
    fn test_no_blank_rows() {
        let sheets = build_tables(
            &[vec![frag("a", 0, 0), frag("b", 0, 100)]],
            &TableConfig::default(),
        );
        for row in &sheets[0].grid.rows {
            assert!(row.iter().any(|cell| !cell.trim().is_empty()));
        }
        assert_eq!(sheets[0].grid.rows.len(), 2);
    }
}
