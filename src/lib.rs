//! Random-walk sprite silhouette generation for pixel-art game assets
//!
//! The system walks a seeded random path across a cell grid, shapes the result
//! through a pipeline of mirror/border/enclosure transforms, and rejection-samples
//! until the silhouette satisfies per-family statistical acceptance thresholds.

#![forbid(unsafe_code)]

/// Shape synthesis engine, family profiles, and statistical validation
pub mod generator;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Seedable uniform random draws behind a mockable trait seam
pub mod random;
/// Cell grid data structures and neighbor walk primitives
pub mod spatial;
/// Pure grid-to-grid shape transforms and classification passes
pub mod transform;

pub use io::error::{GenerationError, Result};
