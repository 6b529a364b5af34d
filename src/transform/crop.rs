//! Bounding-box crop

use crate::io::error::{GenerationError, Result};
use crate::spatial::Grid;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::Position;

/// Shrink a grid to the inclusive bounding box of its non-Empty cells
///
/// Cropping a grid with no Empty border rows or columns returns an identical
/// grid.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyGridOperation`] when every cell is Empty;
/// there is no bounding box to crop to.
pub fn crop(grid: &Grid) -> Result<Grid> {
    let mut bounds: Option<[usize; 4]> = None;
    for (position, cell) in grid.iter() {
        if cell.class == CellClass::Empty {
            continue;
        }
        bounds = Some(match bounds {
            None => [position.row, position.row, position.col, position.col],
            Some([min_row, max_row, min_col, max_col]) => [
                min_row.min(position.row),
                max_row.max(position.row),
                min_col.min(position.col),
                max_col.max(position.col),
            ],
        });
    }

    let Some([min_row, max_row, min_col, max_col]) = bounds else {
        return Err(GenerationError::EmptyGridOperation { operation: "crop" });
    };

    Ok(Grid::from_fn(
        max_row - min_row + 1,
        max_col - min_col + 1,
        |position| {
            grid.get(Position::new(position.row + min_row, position.col + min_col))
                .copied()
                .unwrap_or_default()
        },
    ))
}
