//! Neighbor enumeration and reseed positioning
//!
//! The walk moves between axis-adjacent cells. Candidate moves are the
//! in-bounds subset of the four neighbors, computed directly and drawn from
//! uniformly, so a corner cell simply offers two candidates rather than
//! needing rejection retries.

use crate::io::error::{GenerationError, Result};
use crate::random::RandomSource;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Direction, Grid, Position};

/// An in-bounds axis neighbor tagged with the direction that reaches it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    /// Direction taken from the source position
    pub direction: Direction,
    /// The neighboring position
    pub position: Position,
}

/// The in-bounds axis neighbors of a position, in scan order
pub fn neighbors(grid: &Grid, position: Position) -> Vec<Neighbor> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            direction.step(position).and_then(|candidate| {
                grid.contains(candidate).then_some(Neighbor {
                    direction,
                    position: candidate,
                })
            })
        })
        .collect()
}

/// Draw a uniformly random in-bounds neighbor with its direction
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when the position has no
/// in-bounds neighbors, which only happens on grids narrower than two cells
/// in both dimensions.
pub fn random_neighbor(
    grid: &Grid,
    position: Position,
    rng: &mut impl RandomSource,
) -> Result<Neighbor> {
    let mut candidates = neighbors(grid, position);
    let index = rng.uniform_index(candidates.len())?;
    Ok(candidates.swap_remove(index))
}

/// Draw a uniformly random in-bounds adjacent position
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when the position has no
/// in-bounds neighbors.
pub fn random_adjacent(
    grid: &Grid,
    position: Position,
    rng: &mut impl RandomSource,
) -> Result<Position> {
    random_neighbor(grid, position, rng).map(|neighbor| neighbor.position)
}

/// The last Filled cell encountered by a forward row-major scan
///
/// This is the bottom-most, then right-most Filled cell. Returns `None` when
/// the grid holds no Filled cells.
pub fn last_filled_by_scan(grid: &Grid) -> Option<Position> {
    let mut last = None;
    for (position, cell) in grid.iter() {
        if cell.class == CellClass::Filled {
            last = Some(position);
        }
    }
    last
}

/// Draw a uniformly random Filled position
///
/// # Errors
///
/// Returns [`GenerationError::EmptyGridOperation`] when the grid holds no
/// Filled cells.
pub fn random_filled_position(grid: &Grid, rng: &mut impl RandomSource) -> Result<Position> {
    let mut filled: Vec<Position> = grid
        .iter()
        .filter(|(_, cell)| cell.class == CellClass::Filled)
        .map(|(position, _)| position)
        .collect();
    if filled.is_empty() {
        return Err(GenerationError::EmptyGridOperation {
            operation: "random_filled_position",
        });
    }
    let index = rng.uniform_index(filled.len())?;
    Ok(filled.swap_remove(index))
}
