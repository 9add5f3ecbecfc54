use std::fmt;

use itertools::Itertools;

use crate::grid::Grid;

/// One string per grid row, one character per cell.
///
/// Walls render as `|` and `-`, intersections as `+`, carved cells as a space and any
/// island the carver never reached as `o`.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    grid.iter_rows()
        .map(|row| row.iter().map(|kind| kind.glyph()).collect::<String>())
        .collect()
}

/// The rendered rows joined into one block of text, each row ending in a newline.
pub fn render_text(grid: &Grid) -> String {
    let mut text = render_lines(grid).iter().join("\n");
    text.push('\n');
    text
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self))
    }
}
