//! Generate-validate engine
//!
//! One engine drives every family: build a base grid (solid or walked), fold
//! it through the family's transform pipeline, test it against the family's
//! acceptance policy. Rejection discards the grid and retries with the same
//! advancing random source, so a single seed reproduces an entire batch.

use crate::generator::family::{ShapeFamily, SizeClass};
use crate::generator::profile::{FamilyProfile, FillMethod, ReseedPolicy, WalkPlan, WalkStyle};
use crate::io::configuration::DEFAULT_MAX_ATTEMPTS;
use crate::io::error::{GenerationError, Result};
use crate::random::WalkRng;
use crate::spatial::cell::CellClass;
use crate::spatial::grid::{Grid, Position};
use crate::spatial::walk::{
    last_filled_by_scan, random_adjacent, random_filled_position, random_neighbor,
};
use crate::transform::apply_pipeline;

/// Immutable knobs for the generate-validate loop
#[derive(Clone, Copy, Debug)]
pub struct SynthesisConfig {
    /// Attempts before generation reports failure
    pub max_attempts: usize,
}

/// Sprite generator: seeded walks, transform pipelines, accept or reject
pub struct SpriteSynthesizer {
    rng: WalkRng,
    config: SynthesisConfig,
}

impl SpriteSynthesizer {
    /// Create a synthesizer with the default retry bound
    pub fn new(seed: u64) -> Self {
        Self::with_config(
            seed,
            SynthesisConfig {
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
        )
    }

    /// Create a synthesizer with an explicit configuration
    pub fn with_config(seed: u64, config: SynthesisConfig) -> Self {
        Self {
            rng: WalkRng::seeded(seed),
            config,
        }
    }

    /// Generate a validated grid for a family at a size class
    ///
    /// Only validated grids are returned; there are no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] when every attempt up
    /// to the configured bound fails validation.
    pub fn generate(&mut self, family: ShapeFamily, size: SizeClass) -> Result<Grid> {
        self.generate_with_profile(&FamilyProfile::resolve(family, size))
    }

    /// Generate a validated grid from an explicit profile
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] when every attempt up
    /// to the configured bound fails validation.
    pub fn generate_with_profile(&mut self, profile: &FamilyProfile) -> Result<Grid> {
        for _ in 0..self.config.max_attempts {
            let base = self.build_base(profile)?;
            let shaped = apply_pipeline(base, profile.pipeline, profile.noise, &mut self.rng)?;
            if profile.validator.accept(&shaped) {
                return Ok(shaped);
            }
        }
        Err(GenerationError::AttemptsExhausted {
            family: profile.family.name(),
            attempts: self.config.max_attempts,
        })
    }

    fn build_base(&mut self, profile: &FamilyProfile) -> Result<Grid> {
        match profile.fill {
            FillMethod::Solid => Ok(Grid::filled_with(
                profile.rows,
                profile.cols,
                CellClass::Filled,
            )),
            FillMethod::Walk(plan) => self.walk_base(profile.rows, profile.cols, plan),
        }
    }

    fn walk_base(&mut self, rows: usize, cols: usize, plan: WalkPlan) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols);
        let seed = plan.seed.locate(rows, cols);
        let steps = plan.steps.draw(&mut self.rng)?;
        let substeps = plan.substeps.draw(&mut self.rng)?;

        match plan.reseed {
            ReseedPolicy::Continue => {
                let mut cursor = seed;
                for _ in 0..steps {
                    cursor = self.walk_segment(&mut grid, cursor, substeps, plan.style)?;
                }
            }
            ReseedPolicy::RestartAtSeed => {
                for _ in 0..steps {
                    self.walk_segment(&mut grid, seed, substeps, plan.style)?;
                }
            }
            ReseedPolicy::LastFilledScan => {
                self.scan_reseed_phase(&mut grid, seed, steps, substeps, plan.style)?;
            }
            ReseedPolicy::ScanThenRandomFilled => {
                self.scan_reseed_phase(&mut grid, seed, steps, substeps, plan.style)?;
                for _ in 0..steps {
                    let start = random_filled_position(&grid, &mut self.rng)?;
                    self.walk_segment(&mut grid, start, substeps, plan.style)?;
                }
            }
        }

        Ok(grid)
    }

    /// Walk `steps` segments, reseeding each after the first from the last
    /// Filled cell found by a forward scan
    fn scan_reseed_phase(
        &mut self,
        grid: &mut Grid,
        seed: Position,
        steps: usize,
        substeps: usize,
        style: WalkStyle,
    ) -> Result<()> {
        let mut cursor = seed;
        for _ in 0..steps {
            self.walk_segment(grid, cursor, substeps, style)?;
            cursor = last_filled_by_scan(grid).ok_or(GenerationError::EmptyGridOperation {
                operation: "last_filled_by_scan",
            })?;
        }
        Ok(())
    }

    fn walk_segment(
        &mut self,
        grid: &mut Grid,
        start: Position,
        substeps: usize,
        style: WalkStyle,
    ) -> Result<Position> {
        let mut cursor = start;
        for _ in 0..substeps {
            match style {
                WalkStyle::Adjacent => {
                    fill_if_empty(grid, cursor);
                    cursor = random_adjacent(grid, cursor, &mut self.rng)?;
                }
                WalkStyle::TransposeFill => {
                    fill_if_empty(grid, cursor);
                    fill_if_empty(grid, cursor.transpose());
                    cursor = random_adjacent(grid, cursor, &mut self.rng)?;
                }
                WalkStyle::DirectionalSpan => {
                    fill_if_empty(grid, cursor);
                    let neighbor = random_neighbor(grid, cursor, &mut self.rng)?;
                    cursor = match neighbor.direction.step(neighbor.position) {
                        Some(past) if grid.contains(past) => {
                            fill_if_empty(grid, neighbor.position);
                            past
                        }
                        _ => neighbor.position,
                    };
                }
            }
        }
        Ok(cursor)
    }
}

fn fill_if_empty(grid: &mut Grid, position: Position) {
    if grid.class_at(position) == Some(CellClass::Empty) {
        grid.set_class(position, CellClass::Filled);
    }
}
