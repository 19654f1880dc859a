//! Textual path dumps for debugging.

use crucible_core::Grid;

use crate::path::PathStep;

/// Draw `path` over the digits of `grid`.
///
/// Each visited cell shows the arrow it was entered with; the origin is
/// drawn as `o`. Rows are separated by `'\n'`.
pub fn render_path(grid: &Grid, path: &[PathStep]) -> String {
    let mut canvas: Vec<char> = grid
        .cells()
        .map(|cell| char::from(b'0' + cell.cost))
        .collect();
    for step in path {
        if let Some(i) = grid.index(step.pos) {
            canvas[i] = step.heading.glyph();
        }
    }
    let rows: Vec<String> = canvas
        .chunks(grid.width())
        .map(|row| row.iter().collect())
        .collect();
    rows.join("\n")
}
