//! Border marking around the filled body

use crate::spatial::Grid;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Direction, Position};
use crate::transform::extend::extend;

/// Wrap every Filled region in a one-cell Border
///
/// Extends the grid by two in each dimension so edge-hugging shapes have room
/// for a border, then marks each in-bounds axis neighbor of every Filled cell
/// as Border unless that neighbor is itself Filled. The set of Filled cells
/// never changes during the pass.
pub fn add_borders(grid: &Grid) -> Grid {
    let mut bordered = extend(grid, 2);
    for row in 0..bordered.rows() {
        for col in 0..bordered.cols() {
            let position = Position::new(row, col);
            if bordered.class_at(position) != Some(CellClass::Filled) {
                continue;
            }
            for direction in Direction::ALL {
                let Some(neighbor) = direction.step(position) else {
                    continue;
                };
                if bordered
                    .class_at(neighbor)
                    .is_some_and(|class| class != CellClass::Filled)
                {
                    bordered.set_class(neighbor, CellClass::Border);
                }
            }
        }
    }
    bordered
}
