//! Shape families and size classes

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GenerationError, invalid_parameter};

/// The kinds of sprite this crate generates
///
/// Each family binds a base grid policy, a walk plan, a transform pipeline
/// and an acceptance policy; see [`crate::generator::profile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Tall craft, mirrored left to right
    Vessel,
    /// Rough unmirrored lump
    Asteroid,
    /// Installation, mirrored on both axes
    Station,
    /// Small solid plate, no walk
    Console,
    /// Small repeating tile
    Tile,
}

impl ShapeFamily {
    /// Every family, in presentation order
    pub const ALL: [Self; 5] = [
        Self::Vessel,
        Self::Asteroid,
        Self::Station,
        Self::Console,
        Self::Tile,
    ];

    /// Lowercase family name as used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vessel => "vessel",
            Self::Asteroid => "asteroid",
            Self::Station => "station",
            Self::Console => "console",
            Self::Tile => "tile",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeFamily {
    type Err = GenerationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                invalid_parameter(
                    "family",
                    &s,
                    &"expected one of: vessel, asteroid, station, console, tile",
                )
            })
    }
}

/// Named size tier scaling grid dimensions and walk intensity
///
/// Console and Tile are fixed-size assets and ignore the class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Smallest dimensions and walk ranges
    Small,
    /// Middle tier
    #[default]
    Medium,
    /// Largest dimensions and walk ranges
    Large,
    /// Largest dimensions, walk counts drawn from the small-to-large span
    Random,
}

impl SizeClass {
    /// Every size class, smallest first
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Random];

    /// Lowercase class name as used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeClass {
    type Err = GenerationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                invalid_parameter("size", &s, &"expected one of: small, medium, large, random")
            })
    }
}
