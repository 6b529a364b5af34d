//! Randomness plumbing
//!
//! This module contains the seeded random source every stochastic choice in
//! the crate draws from.

/// Uniform integer drawing behind a trait seam
pub mod source;

pub use source::{RandomSource, WalkRng};
