//! Per-family policy tables
//!
//! A profile is everything the engine needs to produce one family at one
//! size: base grid dimensions, how it gets filled, the transform pipeline
//! and the acceptance policy. Profiles are plain data so callers and tests
//! can override individual fields.

use crate::generator::family::{ShapeFamily, SizeClass};
use crate::generator::validator::{RatioBound, ValidatorPolicy};
use crate::io::error::Result;
use crate::random::RandomSource;
use crate::spatial::grid::Position;
use crate::transform::noise::NoisePolicy;
use crate::transform::pipeline::TransformOp;

/// Where the walk begins on the base grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPosition {
    /// Middle of the grid
    Center,
    /// Top-right corner
    TopRight,
    /// Bottom-right corner
    BottomRight,
}

impl SeedPosition {
    /// Resolve to a concrete position on a grid of the given dimensions
    pub const fn locate(self, rows: usize, cols: usize) -> Position {
        match self {
            Self::Center => Position::new(rows / 2, cols / 2),
            Self::TopRight => Position::new(0, cols.saturating_sub(1)),
            Self::BottomRight => Position::new(rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }
}

/// How each walk step marks cells and moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStyle {
    /// Fill the current cell, move to a random adjacent position
    Adjacent,
    /// Fill the current cell and its transpose, move to a random adjacent
    /// position; profiles using this keep the base grid square
    TransposeFill,
    /// Fill the current cell, then take a two-cell stride where room allows,
    /// filling the cell passed over
    DirectionalSpan,
}

/// How the walk repositions between outer iterations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReseedPolicy {
    /// Keep walking from wherever the last move landed
    Continue,
    /// Restart every outer iteration from the seed position
    RestartAtSeed,
    /// Reseed from the last Filled cell found by a forward row-major scan
    LastFilledScan,
    /// Run the scan-reseed phase, then a second phase of outer iterations
    /// reseeding from uniformly random Filled cells
    ScanThenRandomFilled,
}

/// Inclusive bounds a walk count is drawn from
///
/// Fixed counts collapse to `low == high` and never consume randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    low: i32,
    high: i32,
}

impl CountRange {
    /// A count that is always the same value
    pub const fn fixed(value: i32) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// A count drawn uniformly from `low..=high` per generation attempt
    pub const fn spanning(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Draw a count
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidRange`] for an inverted span.
    pub fn draw(self, rng: &mut impl RandomSource) -> Result<usize> {
        if self.low == self.high {
            return Ok(self.low as usize);
        }
        let value = rng.uniform_int(self.low, self.high)?;
        Ok(value as usize)
    }
}

/// Walk parameters for one profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkPlan {
    /// Starting corner or center
    pub seed: SeedPosition,
    /// Marking and movement style
    pub style: WalkStyle,
    /// Repositioning between outer iterations
    pub reseed: ReseedPolicy,
    /// Outer iteration count
    pub steps: CountRange,
    /// Inner iteration count per outer iteration
    pub substeps: CountRange,
}

/// How the base grid gets its Filled cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMethod {
    /// Every cell starts Filled; no walk runs
    Solid,
    /// A random walk fills the grid
    Walk(WalkPlan),
}

/// Everything the engine needs to generate one family at one size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyProfile {
    /// Family this profile produces
    pub family: ShapeFamily,
    /// Base grid rows, before any transform
    pub rows: usize,
    /// Base grid columns, before any transform
    pub cols: usize,
    /// How the base grid is populated
    pub fill: FillMethod,
    /// Ordered transform pipeline
    pub pipeline: &'static [TransformOp],
    /// Thresholds consulted by the pipeline's noise pass, if it has one
    pub noise: NoisePolicy,
    /// Acceptance policy for the finished grid
    pub validator: ValidatorPolicy,
}

const VESSEL_PIPELINE: &[TransformOp] = &[
    TransformOp::Crop,
    TransformOp::MirrorHorizontal,
    TransformOp::AddBorders,
    TransformOp::Crop,
    TransformOp::FillEnclosed,
    TransformOp::AddNoise,
    TransformOp::SetDepth,
];

const ASTEROID_PIPELINE: &[TransformOp] = &[
    TransformOp::Crop,
    TransformOp::AddBorders,
    TransformOp::Crop,
    TransformOp::FillEnclosed,
    TransformOp::SetDepth,
];

const STATION_PIPELINE: &[TransformOp] = &[
    TransformOp::Crop,
    TransformOp::MirrorHorizontal,
    TransformOp::MirrorVertical,
    TransformOp::AddBorders,
    TransformOp::Crop,
    TransformOp::FillEnclosed,
    TransformOp::AddNoise,
    TransformOp::SetDepth,
];

const CONSOLE_PIPELINE: &[TransformOp] = &[
    TransformOp::MirrorHorizontal,
    TransformOp::MirrorVertical,
    TransformOp::AddBorders,
    TransformOp::SetDepth,
];

const TILE_PIPELINE: &[TransformOp] = &[
    TransformOp::MirrorHorizontal,
    TransformOp::MirrorVertical,
    TransformOp::AddBorders,
    TransformOp::FillEnclosed,
    TransformOp::SetDepth,
];

/// Secondary held to at most a quarter of the Filled count
const QUARTER_SECONDARY: ValidatorPolicy = ValidatorPolicy {
    secondary: Some(RatioBound {
        min_fraction: 0.0,
        max_fraction: 0.25,
    }),
    max_dims: None,
};

impl FamilyProfile {
    /// Look up the policy record for a family at a size class
    pub const fn resolve(family: ShapeFamily, size: SizeClass) -> Self {
        match family {
            ShapeFamily::Vessel => Self::vessel(size),
            ShapeFamily::Asteroid => Self::asteroid(size),
            ShapeFamily::Station => Self::station(size),
            ShapeFamily::Console => Self::console(),
            ShapeFamily::Tile => Self::tile(),
        }
    }

    const fn vessel(size: SizeClass) -> Self {
        let (rows, cols) = match size {
            SizeClass::Small => (300, 12),
            SizeClass::Medium => (600, 16),
            SizeClass::Large | SizeClass::Random => (1000, 20),
        };
        let (steps, substeps) = match size {
            SizeClass::Small => (CountRange::fixed(8), CountRange::fixed(60)),
            SizeClass::Medium => (CountRange::fixed(10), CountRange::fixed(80)),
            SizeClass::Large => (CountRange::fixed(12), CountRange::fixed(100)),
            SizeClass::Random => (CountRange::spanning(8, 12), CountRange::spanning(60, 100)),
        };
        Self {
            family: ShapeFamily::Vessel,
            rows,
            cols,
            fill: FillMethod::Walk(WalkPlan {
                seed: SeedPosition::TopRight,
                style: WalkStyle::DirectionalSpan,
                reseed: ReseedPolicy::ScanThenRandomFilled,
                steps,
                substeps,
            }),
            pipeline: VESSEL_PIPELINE,
            noise: NoisePolicy {
                border_below: 10,
                filled_above: 90,
            },
            validator: QUARTER_SECONDARY,
        }
    }

    const fn asteroid(size: SizeClass) -> Self {
        let span = match size {
            SizeClass::Small => 100,
            SizeClass::Medium => 200,
            SizeClass::Large | SizeClass::Random => 300,
        };
        let (steps, substeps) = match size {
            SizeClass::Small => (CountRange::fixed(50), CountRange::fixed(50)),
            SizeClass::Medium => (CountRange::fixed(80), CountRange::fixed(130)),
            SizeClass::Large => (CountRange::fixed(120), CountRange::fixed(180)),
            SizeClass::Random => (CountRange::spanning(50, 120), CountRange::spanning(50, 180)),
        };
        Self {
            family: ShapeFamily::Asteroid,
            rows: span,
            cols: span,
            fill: FillMethod::Walk(WalkPlan {
                seed: SeedPosition::Center,
                style: WalkStyle::Adjacent,
                reseed: ReseedPolicy::Continue,
                steps,
                substeps,
            }),
            pipeline: ASTEROID_PIPELINE,
            noise: NoisePolicy::NONE,
            validator: QUARTER_SECONDARY,
        }
    }

    const fn station(size: SizeClass) -> Self {
        let span = match size {
            SizeClass::Small => 100,
            SizeClass::Medium => 200,
            SizeClass::Large | SizeClass::Random => 300,
        };
        let (steps, substeps) = match size {
            SizeClass::Small => (CountRange::spanning(5, 15), CountRange::spanning(5, 30)),
            SizeClass::Medium => (CountRange::spanning(10, 30), CountRange::spanning(10, 40)),
            SizeClass::Large => (CountRange::spanning(20, 50), CountRange::spanning(15, 50)),
            SizeClass::Random => (CountRange::spanning(5, 50), CountRange::spanning(5, 50)),
        };
        Self {
            family: ShapeFamily::Station,
            rows: span,
            cols: span,
            fill: FillMethod::Walk(WalkPlan {
                seed: SeedPosition::BottomRight,
                style: WalkStyle::TransposeFill,
                reseed: ReseedPolicy::LastFilledScan,
                steps,
                substeps,
            }),
            pipeline: STATION_PIPELINE,
            noise: NoisePolicy {
                border_below: 10,
                filled_above: 80,
            },
            validator: QUARTER_SECONDARY,
        }
    }

    const fn console() -> Self {
        Self {
            family: ShapeFamily::Console,
            rows: 19,
            cols: 19,
            fill: FillMethod::Solid,
            pipeline: CONSOLE_PIPELINE,
            noise: NoisePolicy::NONE,
            validator: ValidatorPolicy::ACCEPT_ALL,
        }
    }

    const fn tile() -> Self {
        Self {
            family: ShapeFamily::Tile,
            rows: 19,
            cols: 19,
            fill: FillMethod::Walk(WalkPlan {
                seed: SeedPosition::BottomRight,
                style: WalkStyle::TransposeFill,
                reseed: ReseedPolicy::RestartAtSeed,
                steps: CountRange::fixed(15),
                substeps: CountRange::fixed(50),
            }),
            pipeline: TILE_PIPELINE,
            noise: NoisePolicy::NONE,
            validator: ValidatorPolicy {
                secondary: Some(RatioBound {
                    min_fraction: 0.0,
                    max_fraction: f64::INFINITY,
                }),
                max_dims: Some((50, 50)),
            },
        }
    }
}
