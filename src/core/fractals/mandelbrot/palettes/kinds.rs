use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::cool::cool_palette;
use crate::core::fractals::mandelbrot::palettes::hot::hot_palette;
use crate::core::fractals::mandelbrot::palettes::simple::simple_palette;
use crate::core::fractals::registry::{
    resolve, AlgorithmCategory, RegistryKind, UnknownAlgorithmError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PaletteKind {
    Simple,
    #[default]
    Hot,
    Cool,
}

impl PaletteKind {
    /// Total over every `f64`, including NaN and infinities.
    pub fn colour(self, index: f64) -> Colour {
        match self {
            Self::Simple => simple_palette(index),
            Self::Hot => hot_palette(index),
            Self::Cool => cool_palette(index),
        }
    }
}

impl RegistryKind for PaletteKind {
    const CATEGORY: AlgorithmCategory = AlgorithmCategory::Palette;
    const ALL: &'static [Self] = &[Self::Hot, Self::Simple, Self::Cool];

    fn identifier(self) -> &'static str {
        match self {
            Self::Simple => "simple-palette",
            Self::Hot => "hot-palette",
            Self::Cool => "cool-palette",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Simple => "Greyscale",
            Self::Hot => "Hot",
            Self::Cool => "Cool",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaletteKind {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl TryFrom<String> for PaletteKind {
    type Error = UnknownAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaletteKind> for &'static str {
    fn from(kind: PaletteKind) -> Self {
        kind.identifier()
    }
}
