use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmCategory {
    Colouring,
    ColourIndex,
    Palette,
}

impl AlgorithmCategory {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Colouring => "colouring",
            Self::ColourIndex => "colour index",
            Self::Palette => "palette",
        }
    }
}

impl fmt::Display for AlgorithmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {category} algorithm \"{identifier}\"")]
pub struct UnknownAlgorithmError {
    pub category: AlgorithmCategory,
    pub identifier: String,
}

/// A closed set of interchangeable algorithms selected by a stable string identifier.
pub trait RegistryKind: Copy + Sized + 'static {
    const CATEGORY: AlgorithmCategory;
    const ALL: &'static [Self];

    fn identifier(self) -> &'static str;

    fn display_name(self) -> &'static str;
}

/// Looks an identifier up in `K`'s registry. Matching is exact; there is no fallback.
pub fn resolve<K: RegistryKind>(identifier: &str) -> Result<K, UnknownAlgorithmError> {
    K::ALL
        .iter()
        .copied()
        .find(|kind| kind.identifier() == identifier)
        .ok_or_else(|| UnknownAlgorithmError {
            category: K::CATEGORY,
            identifier: identifier.to_owned(),
        })
}

pub fn identifiers<K: RegistryKind>() -> Vec<&'static str> {
    K::ALL.iter().map(|kind| kind.identifier()).collect()
}
