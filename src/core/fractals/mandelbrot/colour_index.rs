use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::fractals::registry::{
    resolve, AlgorithmCategory, RegistryKind, UnknownAlgorithmError,
};

/// Normalises a potential into the value a palette is sampled at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ColourIndexKind {
    #[default]
    Simple,
}

impl ColourIndexKind {
    /// The result is not bounded to `[0, 1]`; palettes clamp it.
    pub fn index(self, potential: f64, max_iterations: u32) -> f64 {
        match self {
            Self::Simple => potential / f64::from(max_iterations),
        }
    }
}

impl RegistryKind for ColourIndexKind {
    const CATEGORY: AlgorithmCategory = AlgorithmCategory::ColourIndex;
    const ALL: &'static [Self] = &[Self::Simple];

    fn identifier(self) -> &'static str {
        match self {
            Self::Simple => "simple-index",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Simple => "Simple index",
        }
    }
}

impl fmt::Display for ColourIndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColourIndexKind {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl TryFrom<String> for ColourIndexKind {
    type Error = UnknownAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColourIndexKind> for &'static str {
    fn from(kind: ColourIndexKind) -> Self {
        kind.identifier()
    }
}
