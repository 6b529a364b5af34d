//! Interior noise pass

use crate::io::error::Result;
use crate::random::RandomSource;
use crate::spatial::Grid;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Direction, Position};

/// Percent thresholds controlling how interior noise resolves
///
/// A draw in `1..=100` strictly below `border_below` demotes the cell to
/// Border; strictly above `filled_above` promotes it to Filled; anything
/// between leaves it Tertiary. Families tune these independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoisePolicy {
    /// Draws below this percentage demote to Border
    pub border_below: i32,
    /// Draws above this percentage promote to Filled
    pub filled_above: i32,
}

impl NoisePolicy {
    /// Thresholds that never demote or promote
    ///
    /// Carried by families whose pipeline has no noise pass.
    pub const NONE: Self = Self {
        border_below: 0,
        filled_above: 100,
    };
}

/// Whether the nearest decisive cell along the ray from `start` is Filled
///
/// Empty decides against, Filled decides for, Border/Secondary/Tertiary are
/// passed over, the grid edge decides against.
fn filled_before_empty(grid: &Grid, start: Position, direction: Direction) -> bool {
    let mut cursor = start;
    while let Some(next) = direction.step(cursor) {
        match grid.class_at(next) {
            Some(CellClass::Filled) => return true,
            Some(CellClass::Empty) | None => return false,
            Some(_) => cursor = next,
        }
    }
    false
}

/// Speckle enclosed interiors with Tertiary, Border and Filled cells
///
/// Scans row-major and reclassifies in place, so a promotion made early in
/// the pass is visible to the ray scans of later cells. Secondary cells whose
/// four rays all reach Filled before Empty become Tertiary, then roll against
/// the policy thresholds.
///
/// # Errors
///
/// Propagates random source failures.
pub fn apply_noise(
    grid: &mut Grid,
    policy: NoisePolicy,
    rng: &mut impl RandomSource,
) -> Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let position = Position::new(row, col);
            if grid.class_at(position) != Some(CellClass::Secondary) {
                continue;
            }
            let eligible = Direction::ALL
                .into_iter()
                .all(|direction| filled_before_empty(grid, position, direction));
            if !eligible {
                continue;
            }
            grid.set_class(position, CellClass::Tertiary);
            let draw = rng.uniform_int(1, 100)?;
            if draw < policy.border_below {
                grid.set_class(position, CellClass::Border);
            } else if draw > policy.filled_above {
                grid.set_class(position, CellClass::Filled);
            }
        }
    }
    Ok(())
}
