//! Grid transform library
//!
//! This module contains the post-walk shaping passes:
//! - Shape changes that return a new grid (crop, extend, mirror, border)
//! - Classification passes that relabel cells in place (enclose, noise)
//! - The depth metric and the pipeline that sequences everything

/// Border marking around the filled body
pub mod border;
/// Bounding-box crop
pub mod crop;
/// Depth shading metric
pub mod depth;
/// Interior detection
pub mod enclose;
/// Grid extension with centered content
pub mod extend;
/// Axis mirroring
pub mod mirror;
/// Interior noise pass
pub mod noise;
/// Pipeline vocabulary and folding
pub mod pipeline;

pub use noise::NoisePolicy;
pub use pipeline::{TransformOp, apply_pipeline};
