//! Print a grid onto its canvas, highest row first.

use std::io::Write;

use crate::types::{Coord, Grid};

/// Render the canvas `[0, max_x] × [0, max_y]` as lines, `y = max_y` first.
///
/// Missing cells become a single space and trailing spaces are kept.
/// An empty grid renders to no lines at all.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    let mut lines = Vec::new();
    let _ = for_each_row(grid, |line| {
        lines.push(line.to_string());
        Ok::<(), std::convert::Infallible>(())
    });
    lines
}

/// Write each line followed by `\n` as soon as its row is built.
pub fn render_to<W: Write>(grid: &Grid, writer: &mut W) -> std::io::Result<()> {
    for_each_row(grid, |line| {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")
    })?;
    writer.flush()
}

/// Build rows top to bottom into one reused buffer, handing each to `emit`.
///
/// Stops at the first error from `emit`.
fn for_each_row<E>(grid: &Grid, mut emit: impl FnMut(&str) -> Result<(), E>) -> Result<(), E> {
    let Some(bounds) = grid.bounds() else {
        return Ok(());
    };

    let mut line = String::new();
    for y in (0..=bounds.max_y).rev() {
        line.clear();
        for x in 0..=bounds.max_x {
            line.push_str(grid.get(Coord::new(x, y)).unwrap_or(" "));
        }
        emit(&line)?;
    }
    Ok(())
}
