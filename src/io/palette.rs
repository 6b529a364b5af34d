//! Sprite color palette and hex parsing

use crate::io::configuration::{SHADE_CAP, SHADE_STEP};
use crate::io::error::{Result, invalid_parameter};

/// RGB colors the rasterizer draws with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpritePalette {
    /// Color of Filled cells before depth shading
    pub hull: [u8; 3],
    /// Color of Secondary cells before depth shading
    pub accent: [u8; 3],
    /// Color of Border cells
    pub border: [u8; 3],
}

impl SpritePalette {
    /// Build a palette from hex color strings
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] when any string
    /// is not a six-digit hex color.
    pub fn from_hex(hull: &str, accent: &str, border: &str) -> Result<Self> {
        Ok(Self {
            hull: parse_hex_color(hull)?,
            accent: parse_hex_color(accent)?,
            border: parse_hex_color(border)?,
        })
    }
}

/// Parse a `#RRGGBB` or `RRGGBB` hex color
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] for anything but six
/// hex digits with an optional leading `#`.
pub fn parse_hex_color(input: &str) -> Result<[u8; 3]> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let channel = |offset: usize| {
        digits
            .get(offset..offset + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (digits.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => Ok([r, g, b]),
        _ => Err(invalid_parameter(
            "color",
            &input,
            &"expected six hex digits with an optional leading '#'",
        )),
    }
}

/// Lighten a color toward white by a cell's depth
///
/// Each depth unit adds [`SHADE_STEP`] of the remaining headroom per channel,
/// capped at [`SHADE_CAP`] so deep interiors never wash out entirely.
pub fn lighten(color: [u8; 3], depth: u32) -> [u8; 3] {
    let amount = (depth as f32 * SHADE_STEP).min(SHADE_CAP);
    let [r, g, b] = color;
    let shade = |channel: u8| {
        let lifted = f32::from(channel) + (255.0 - f32::from(channel)) * amount;
        lifted.round() as u8
    };
    [shade(r), shade(g), shade(b)]
}
