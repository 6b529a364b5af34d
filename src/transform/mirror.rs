//! Axis mirroring
//!
//! Both operations double one dimension, reflecting the source across the new
//! seam. Mirrored halves copy cell values; they never share storage, so later
//! stochastic passes treat the halves independently.

use crate::spatial::Grid;
use crate::spatial::grid::Position;

/// Mirror left-to-right, doubling the column count
///
/// Output columns `c` and `2w - 1 - c` both receive source column `c`.
pub fn mirror_horizontal(grid: &Grid) -> Grid {
    let cols = grid.cols();
    Grid::from_fn(grid.rows(), cols * 2, |position| {
        let source_col = if position.col < cols {
            position.col
        } else {
            2 * cols - 1 - position.col
        };
        grid.get(Position::new(position.row, source_col))
            .copied()
            .unwrap_or_default()
    })
}

/// Mirror top-to-bottom, doubling the row count
///
/// Output rows `r` and `2h - 1 - r` both receive source row `r`.
pub fn mirror_vertical(grid: &Grid) -> Grid {
    let rows = grid.rows();
    Grid::from_fn(rows * 2, grid.cols(), |position| {
        let source_row = if position.row < rows {
            position.row
        } else {
            2 * rows - 1 - position.row
        };
        grid.get(Position::new(source_row, position.col))
            .copied()
            .unwrap_or_default()
    })
}
