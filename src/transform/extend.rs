//! Grid extension with centered content

use crate::spatial::Grid;
use crate::spatial::grid::Position;

/// Grow a grid by `n` in each dimension, centering the old content
///
/// New cells are Empty. The old content lands at offset `n / 2` from the top
/// and left edges.
pub fn extend(grid: &Grid, n: usize) -> Grid {
    let offset = n / 2;
    Grid::from_fn(grid.rows() + n, grid.cols() + n, |position| {
        position
            .row
            .checked_sub(offset)
            .zip(position.col.checked_sub(offset))
            .and_then(|(row, col)| grid.get(Position::new(row, col)))
            .copied()
            .unwrap_or_default()
    })
}
