//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of sprites per invocation
pub const DEFAULT_COUNT: usize = 1;

/// Default bound on generate-validate attempts per sprite
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

// Sheet composition settings
/// Pixel gap between sprites on a composed sheet
pub const SHEET_PADDING: u32 = 10;

/// Background color of composed sheets
pub const SHEET_BACKGROUND: [u8; 3] = [0x1E, 0x1E, 0x1E];

// Shading settings for the rasterizer
/// Fraction of the remaining headroom added per unit of cell depth
pub const SHADE_STEP: f32 = 0.05;

/// Ceiling on total lightening from depth
pub const SHADE_CAP: f32 = 0.9;

// Default palette
/// Default hull color for Filled cells
pub const DEFAULT_HULL_COLOR: &str = "#2A2A2A";

/// Default accent color for Secondary cells
pub const DEFAULT_ACCENT_COLOR: &str = "#D25252";

/// Default color for Border cells
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
