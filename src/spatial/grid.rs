//! Rectangular cell grid backed by a dense 2-D array
//!
//! Grids are created all-Empty, mutated in place by the walk and the
//! classification passes, and replaced outright by shape-changing transforms.
//! No two grids ever share cell storage.

use ndarray::Array2;

use crate::spatial::cell::{Cell, CellClass, ClassTally};

/// A (row, column) address into a grid
///
/// Validity relative to a grid is a pure bounds check, never a property of
/// the position itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position with row and column swapped
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

/// One of the four axis directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller row indices
    Up,
    /// Toward larger row indices
    Down,
    /// Toward smaller column indices
    Left,
    /// Toward larger column indices
    Right,
}

impl Direction {
    /// Every direction, in scan order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// One step from `position` in this direction
    ///
    /// Returns `None` when the step would leave the non-negative index space;
    /// the upper bound is the grid's concern.
    pub const fn step(self, position: Position) -> Option<Position> {
        match self {
            Self::Up => match position.row.checked_sub(1) {
                Some(row) => Some(Position::new(row, position.col)),
                None => None,
            },
            Self::Down => Some(Position::new(position.row + 1, position.col)),
            Self::Left => match position.col.checked_sub(1) {
                Some(col) => Some(Position::new(position.row, col)),
                None => None,
            },
            Self::Right => Some(Position::new(position.row, position.col + 1)),
        }
    }
}

/// Rectangular grid of classified cells
///
/// Addressed by (row, column). Shape-changing transforms return new grids;
/// classification passes mutate cells in place without touching dimensions,
/// so a grid is never jagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an all-Empty grid of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::default((rows, cols)),
        }
    }

    /// Create a grid by evaluating a constructor for every position
    pub fn from_fn(rows: usize, cols: usize, mut cell_at: impl FnMut(Position) -> Cell) -> Self {
        Self {
            cells: Array2::from_shape_fn((rows, cols), |(row, col)| {
                cell_at(Position::new(row, col))
            }),
        }
    }

    /// Create a grid with every cell set to the given class
    pub fn filled_with(rows: usize, cols: usize, class: CellClass) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::of(class)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Check whether a position lies within the grid
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows() && position.col < self.cols()
    }

    /// Borrow the cell at a position, if in bounds
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get([position.row, position.col])
    }

    /// Mutably borrow the cell at a position, if in bounds
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut([position.row, position.col])
    }

    /// The class at a position, if in bounds
    pub fn class_at(&self, position: Position) -> Option<CellClass> {
        self.get(position).map(|cell| cell.class)
    }

    /// Set the class at a position, leaving depth untouched
    ///
    /// No effect outside the grid.
    pub fn set_class(&mut self, position: Position, class: CellClass) {
        if let Some(cell) = self.get_mut(position) {
            cell.class = class;
        }
    }

    /// Iterate every cell in row-major order with its position
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row, col), cell))
    }

    /// Count cells by class
    pub fn tally(&self) -> ClassTally {
        let mut tally = ClassTally::default();
        for cell in &self.cells {
            tally.record(cell.class);
        }
        tally
    }
}
