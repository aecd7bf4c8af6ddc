use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region \"{0}\"")]
pub struct UnknownRegionError(pub String);

/// Preset views, from the whole set down towards the seahorse valley.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedRegion {
    #[default]
    Full,
    Zoom1,
    Zoom2,
    Zoom3,
}

impl NamedRegion {
    pub const ALL: &'static [Self] = &[Self::Full, Self::Zoom1, Self::Zoom2, Self::Zoom3];

    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Zoom1 => "zoom1",
            Self::Zoom2 => "zoom2",
            Self::Zoom3 => "zoom3",
        }
    }

    /// `(x_min, x_max, y_min, y_max)`.
    pub const fn bounds(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Full => (-2.0, 1.0, -1.5, 1.5),
            Self::Zoom1 => (-0.8, -0.4, -0.2, 0.2),
            Self::Zoom2 => (-0.748, -0.746, 0.099, 0.101),
            Self::Zoom3 => (-0.7485, -0.7465, 0.0995, 0.1005),
        }
    }

    pub fn complex_rect(self) -> Result<ComplexRect, ComplexRectError> {
        let (x_min, x_max, y_min, y_max) = self.bounds();

        ComplexRect::from_bounds(x_min, x_max, y_min, y_max)
    }
}

impl fmt::Display for NamedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for NamedRegion {
    type Err = UnknownRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.identifier() == s)
            .ok_or_else(|| UnknownRegionError(s.to_owned()))
    }
}
