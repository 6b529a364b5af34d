//! ASCII rendering for terminals and tests

use crate::spatial::Grid;
use crate::spatial::cell::CellClass;

/// Glyph drawn for one cell class
pub const fn class_glyph(class: CellClass) -> char {
    match class {
        CellClass::Empty => ' ',
        CellClass::Filled => '.',
        CellClass::Border => 'x',
        CellClass::Secondary => 'o',
        CellClass::Tertiary => '*',
    }
}

/// Render a grid as one glyph per cell, one line per row
pub fn grid_to_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for (position, cell) in grid.iter() {
        out.push(class_glyph(cell.class));
        if position.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
