//! Shape generation
//!
//! This module contains the generation surface:
//! - Families and size classes naming what can be generated
//! - Policy tables binding each family to dimensions, walks and pipelines
//! - Acceptance predicates and the generate-validate engine

/// Generate-validate engine
pub mod engine;
/// Shape families and size classes
pub mod family;
/// Per-family policy tables
pub mod profile;
/// Acceptance predicates
pub mod validator;

pub use engine::{SpriteSynthesizer, SynthesisConfig};
pub use family::{ShapeFamily, SizeClass};
pub use profile::FamilyProfile;
pub use validator::ValidatorPolicy;
