//! Interior detection

use crate::spatial::Grid;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Direction, Position};

/// Whether a Filled cell lies anywhere along the ray from `start`
///
/// The ray runs to the grid edge; cells of other classes are passed over.
fn filled_along_ray(grid: &Grid, start: Position, direction: Direction) -> bool {
    let mut cursor = start;
    while let Some(next) = direction.step(cursor) {
        match grid.class_at(next) {
            Some(CellClass::Filled) => return true,
            Some(_) => cursor = next,
            None => return false,
        }
    }
    false
}

/// Reclassify fully interior Empty cells as Secondary
///
/// An Empty cell becomes Secondary when a Filled cell lies somewhere along
/// the ray in all four axis directions, regardless of what lies between.
/// Only Empty cells ever change.
pub fn fill_enclosed(grid: &mut Grid) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let position = Position::new(row, col);
            if grid.class_at(position) != Some(CellClass::Empty) {
                continue;
            }
            let enclosed = Direction::ALL
                .into_iter()
                .all(|direction| filled_along_ray(grid, position, direction));
            if enclosed {
                grid.set_class(position, CellClass::Secondary);
            }
        }
    }
}
