//! Acceptance predicates over finished grids
//!
//! Validation is pure and deterministic: count cells by class, compare
//! against the family's thresholds. Rejection is control flow for the
//! generate-validate loop, never an error.

use crate::spatial::Grid;

/// Bounds on a class count as a fraction of the Filled count
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBound {
    /// Inclusive lower fraction
    pub min_fraction: f64,
    /// Inclusive upper fraction
    pub max_fraction: f64,
}

/// Family acceptance policy
///
/// A policy carrying a Secondary bound also rejects a zero Secondary count,
/// which signals a degenerate walk that enclosed no interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatorPolicy {
    /// Bound on the Secondary count relative to Filled; `None` disables it
    pub secondary: Option<RatioBound>,
    /// Maximum (rows, cols) of the finished grid; `None` disables it
    pub max_dims: Option<(usize, usize)>,
}

impl ValidatorPolicy {
    /// Policy that accepts every grid
    pub const ACCEPT_ALL: Self = Self {
        secondary: None,
        max_dims: None,
    };

    /// Whether a finished grid satisfies this policy
    pub fn accept(&self, grid: &Grid) -> bool {
        if let Some((max_rows, max_cols)) = self.max_dims {
            if grid.rows() > max_rows || grid.cols() > max_cols {
                return false;
            }
        }

        if let Some(bound) = self.secondary {
            let tally = grid.tally();
            if tally.secondary == 0 {
                return false;
            }
            let filled = tally.filled as f64;
            let secondary = tally.secondary as f64;
            if secondary < filled * bound.min_fraction || secondary > filled * bound.max_fraction {
                return false;
            }
        }

        true
    }
}
