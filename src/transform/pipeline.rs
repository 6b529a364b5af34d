//! Ordered transform pipelines
//!
//! Families differ only in which transforms run and in what order, so the
//! pipeline is data: a slice of ops folded over a grid.

use crate::io::error::Result;
use crate::random::RandomSource;
use crate::spatial::Grid;
use crate::transform::border::add_borders;
use crate::transform::crop::crop;
use crate::transform::depth::set_depth;
use crate::transform::enclose::fill_enclosed;
use crate::transform::extend::extend;
use crate::transform::mirror::{mirror_horizontal, mirror_vertical};
use crate::transform::noise::{NoisePolicy, apply_noise};

/// One step of a family's transform pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOp {
    /// Shrink to the non-Empty bounding box
    Crop,
    /// Double columns with left/right symmetry
    MirrorHorizontal,
    /// Double rows with top/bottom symmetry
    MirrorVertical,
    /// Grow by the given amount in each dimension, content centered
    Extend(usize),
    /// Extend by two and wrap Filled regions in Border cells
    AddBorders,
    /// Reclassify fully interior Empty cells as Secondary
    FillEnclosed,
    /// Speckle interiors per the family's noise policy
    AddNoise,
    /// Compute per-cell shading depth
    SetDepth,
}

/// Fold a grid through an ordered sequence of transforms
///
/// `AddNoise` consults `noise`; every other op ignores it.
///
/// # Errors
///
/// Returns [`crate::GenerationError::EmptyGridOperation`] when `Crop` meets
/// an all-Empty grid, and propagates random source failures from `AddNoise`.
pub fn apply_pipeline(
    grid: Grid,
    ops: &[TransformOp],
    noise: NoisePolicy,
    rng: &mut impl RandomSource,
) -> Result<Grid> {
    let mut current = grid;
    for &op in ops {
        match op {
            TransformOp::Crop => current = crop(&current)?,
            TransformOp::MirrorHorizontal => current = mirror_horizontal(&current),
            TransformOp::MirrorVertical => current = mirror_vertical(&current),
            TransformOp::Extend(n) => current = extend(&current, n),
            TransformOp::AddBorders => current = add_borders(&current),
            TransformOp::FillEnclosed => fill_enclosed(&mut current),
            TransformOp::AddNoise => apply_noise(&mut current, noise, rng)?,
            TransformOp::SetDepth => set_depth(&mut current),
        }
    }
    Ok(current)
}
