//! Depth shading metric

use crate::spatial::Grid;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Direction, Position};

/// Count consecutive same-class cells from `start` in one direction
///
/// The starting cell itself is not counted; the run ends at the first cell of
/// a different class or the grid edge.
fn run_length(grid: &Grid, start: Position, class: CellClass, direction: Direction) -> u32 {
    let mut length = 0;
    let mut cursor = start;
    while let Some(next) = direction.step(cursor) {
        if grid.class_at(next) != Some(class) {
            break;
        }
        length += 1;
        cursor = next;
    }
    length
}

/// Assign every non-Empty, non-Border cell its depth
///
/// Depth is the minimum over the four axis directions of the same-class run
/// length, so cells deep inside a uniform region shade differently from cells
/// at its edge. Classes are never changed; runs only against final classes.
pub fn set_depth(grid: &mut Grid) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let position = Position::new(row, col);
            let Some(class) = grid.class_at(position) else {
                continue;
            };
            if matches!(class, CellClass::Empty | CellClass::Border) {
                continue;
            }
            let depth = Direction::ALL
                .into_iter()
                .map(|direction| run_length(grid, position, class, direction))
                .min()
                .unwrap_or(0);
            if let Some(cell) = grid.get_mut(position) {
                cell.depth = depth;
            }
        }
    }
}
