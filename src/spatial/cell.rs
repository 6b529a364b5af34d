//! Cell classification model and per-class tallying
//!
//! Every grid cell carries a class from a closed five-value enumeration plus a
//! depth used for shading. The integer codes are a wire contract consumed by
//! the rasterizer and must stay stable.

/// Classification of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Unoccupied background
    #[default]
    Empty,
    /// Solid body of the generated shape
    Filled,
    /// One-cell rim immediately outside the solid body
    Border,
    /// Interior void fully enclosed by Filled cells
    Secondary,
    /// Secondary cell reclassified by the noise pass
    Tertiary,
}

impl CellClass {
    /// Every class in wire-code order
    pub const ALL: [Self; 5] = [
        Self::Empty,
        Self::Filled,
        Self::Border,
        Self::Secondary,
        Self::Tertiary,
    ];

    /// Stable integer code for serialization
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Filled => 1,
            Self::Border => 2,
            Self::Secondary => 3,
            Self::Tertiary => 4,
        }
    }

    /// Decode a wire code back to a class
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Filled),
            2 => Some(Self::Border),
            3 => Some(Self::Secondary),
            4 => Some(Self::Tertiary),
            _ => None,
        }
    }
}

/// A single grid element: classification plus shading depth
///
/// `depth` is the minimum, over the four axis directions, of the count of
/// same-class cells before a different class or the grid edge. It is computed
/// once after classification is final and feeds only the shading math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Current classification
    pub class: CellClass,
    /// Shading depth, zero until the depth pass runs
    pub depth: u32,
}

impl Cell {
    /// Create a cell of the given class with zero depth
    pub const fn of(class: CellClass) -> Self {
        Self { class, depth: 0 }
    }
}

/// Per-class cell counts over a grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassTally {
    /// Count of Empty cells
    pub empty: usize,
    /// Count of Filled cells
    pub filled: usize,
    /// Count of Border cells
    pub border: usize,
    /// Count of Secondary cells
    pub secondary: usize,
    /// Count of Tertiary cells
    pub tertiary: usize,
}

impl ClassTally {
    /// Record one cell of the given class
    pub const fn record(&mut self, class: CellClass) {
        match class {
            CellClass::Empty => self.empty += 1,
            CellClass::Filled => self.filled += 1,
            CellClass::Border => self.border += 1,
            CellClass::Secondary => self.secondary += 1,
            CellClass::Tertiary => self.tertiary += 1,
        }
    }

    /// Total number of cells recorded
    pub const fn total(&self) -> usize {
        self.empty + self.filled + self.border + self.secondary + self.tertiary
    }
}
