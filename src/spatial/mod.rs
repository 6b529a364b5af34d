//! Spatial data structures and grid traversal
//!
//! This module contains spatial-related functionality including:
//! - Cell classification and per-class tallies
//! - Grid storage, addressing and iteration
//! - Neighbor enumeration and walk positioning

/// Cell classes, cells and class tallies
pub mod cell;
/// Grid storage and position arithmetic
pub mod grid;
/// Neighbor enumeration and reseed positioning
pub mod walk;

pub use grid::Grid;
