//! Decode grid entries from the tables of a raw HTML document.
//!
//! Every `<tr>` of every `<table>` is read as `(x, value, y)`. Rows that do not
//! fit that shape (titles, headers, notes) are skipped without complaint.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::types::{Coord, Grid};

/// Counters collected while walking the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub tables: usize,
    pub rows: usize,
    pub accepted: usize,
    pub skipped: usize,
}

/// Parse `html` and build the grid from every decodable table row.
pub fn extract_grid(html: &str) -> Grid {
    extract_grid_with_stats(html).0
}

/// Same as [`extract_grid`], also returning the walk counters.
pub fn extract_grid_with_stats(html: &str) -> (Grid, ExtractStats) {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let row_sel = selector("tr");
    let cell_sel = selector("td, th");

    let mut grid = Grid::new();
    let mut stats = ExtractStats::default();

    for table in document.select(&table_sel) {
        stats.tables += 1;
        for row in table.select(&row_sel) {
            stats.rows += 1;
            let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
            match decode_row(&cells) {
                Some((coord, value)) => {
                    grid.insert(coord, value);
                    stats.accepted += 1;
                }
                None => stats.skipped += 1,
            }
        }
    }

    debug!(
        "extracted {} cells from {} tables ({} rows accepted, {} skipped)",
        grid.len(),
        stats.tables,
        stats.accepted,
        stats.skipped
    );

    (grid, stats)
}

/// Apply the row decoding rule.
///
/// Needs at least three cells; the first and third must parse as integers.
/// The second cell is taken verbatim. Cells past the third are ignored.
pub fn decode_row(cells: &[String]) -> Option<(Coord, String)> {
    let [x, value, y, ..] = cells else {
        return None;
    };
    let x = x.parse::<i64>().ok()?;
    let y = y.parse::<i64>().ok()?;
    Some((Coord::new(x, y), value.clone()))
}

/// Cell text: each text node trimmed, empty ones dropped, the rest joined.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_single_table_with_header() {
        let html = r#"
        <html><body>
        <table>
          <tr><th>x-coordinate</th><th>Character</th><th>y-coordinate</th></tr>
          <tr><td>0</td><td>A</td><td>0</td></tr>
          <tr><td>1</td><td>B</td><td>0</td></tr>
          <tr><td>0</td><td>C</td><td>1</td></tr>
          <tr><td>5</td><td>D</td></tr>
          <tr><td>one</td><td>E</td><td>2</td></tr>
          <tr><td>3</td><td>F</td><td>two</td></tr>
        </table>
        </body></html>
        "#;

        let (grid, stats) = extract_grid_with_stats(html);
        let expected: Grid = vec![
            (Coord::new(0, 0), "A".to_string()),
            (Coord::new(1, 0), "B".to_string()),
            (Coord::new(0, 1), "C".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(grid, expected);
        assert_eq!(stats.tables, 1);
        assert_eq!(stats.rows, 7);
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.skipped, 4);
    }

    #[test]
    fn test_no_tables_yields_empty_grid() {
        let grid = extract_grid("<html><body><p>0 A 0</p></body></html>");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_later_row_overwrites_earlier() {
        let html = r#"
        <table>
          <tr><td>2</td><td>old</td><td>3</td></tr>
        </table>
        <table>
          <tr><td>2</td><td>new</td><td>3</td></tr>
        </table>
        "#;

        let grid = extract_grid(html);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(Coord::new(2, 3)), Some("new"));
    }

    #[test]
    fn test_cell_text_joins_trimmed_fragments() {
        let html = r#"
        <table><tbody>
          <tr>
            <td><p><span> 1</span><span>2 </span></p></td>
            <td><p>  <span>█</span>  </p></td>
            <td>
                <p><span>4</span></p>
            </td>
          </tr>
        </tbody></table>
        "#;

        let grid = extract_grid(html);
        assert_eq!(grid.get(Coord::new(12, 4)), Some("█"));
    }

    #[test]
    fn test_header_cells_count_as_cells() {
        let html = "<table><tr><th>7</th><td>Q</td><th>8</th></tr></table>";
        let grid = extract_grid(html);
        assert_eq!(grid.get(Coord::new(7, 8)), Some("Q"));
    }

    #[test]
    fn test_decode_row_rule() {
        assert_eq!(
            decode_row(&cells(&["0", "A", "0"])),
            Some((Coord::new(0, 0), "A".to_string()))
        );
        assert_eq!(
            decode_row(&cells(&["3", "word", "4", "extra", "more"])),
            Some((Coord::new(3, 4), "word".to_string()))
        );
        assert_eq!(
            decode_row(&cells(&["+1", "", "-2"])),
            Some((Coord::new(1, -2), String::new()))
        );
        assert_eq!(decode_row(&cells(&["0", "A"])), None);
        assert_eq!(decode_row(&cells(&[])), None);
        assert_eq!(decode_row(&cells(&["x", "A", "0"])), None);
        assert_eq!(decode_row(&cells(&["0", "A", "1.5"])), None);
        assert_eq!(decode_row(&cells(&["", "A", "0"])), None);
    }

    #[test]
    fn test_no_panic_on_malformed_markup() {
        let html = "<table><tr><td>1<td>X<td>1</tr><tr><td>2</td></table";
        let grid = extract_grid(html);
        assert_eq!(grid.get(Coord::new(1, 1)), Some("X"));
        assert_eq!(grid.len(), 1);
    }
}
