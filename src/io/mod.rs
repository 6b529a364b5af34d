//! Input/output operations and error handling
//!
//! This module contains the outward-facing surfaces:
//! - Command-line interface and the batch generation driver
//! - Rasterization to PNG sprites and sheets, plus ASCII rendering
//! - Configuration defaults, palette handling and progress display

/// ASCII rendering for terminals and tests
pub mod ascii;
/// Command-line interface and batch driver
pub mod cli;
/// Generation constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Sprite rasterization and PNG export
pub mod image;
/// Color palette and hex parsing
pub mod palette;
/// Batch progress reporting
pub mod progress;
