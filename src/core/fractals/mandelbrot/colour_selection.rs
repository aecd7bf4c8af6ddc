use serde::{Deserialize, Serialize};

use crate::core::fractals::mandelbrot::colour_index::ColourIndexKind;
use crate::core::fractals::mandelbrot::colouring::ColouringKind;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::registry::UnknownAlgorithmError;

/// Colouring pipeline chosen for a render: potential, then index, then palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourSelection {
    pub colouring: ColouringKind,
    pub colour_index: ColourIndexKind,
    pub palette: PaletteKind,
}

impl ColourSelection {
    /// Resolves each stage by identifier; the first unknown identifier is reported.
    pub fn from_identifiers(
        colouring: &str,
        colour_index: &str,
        palette: &str,
    ) -> Result<Self, UnknownAlgorithmError> {
        Ok(Self {
            colouring: colouring.parse()?,
            colour_index: colour_index.parse()?,
            palette: palette.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::registry::AlgorithmCategory;

    #[test]
    fn test_from_identifiers() {
        let selection =
            ColourSelection::from_identifiers("iteration-count", "simple-index", "cool-palette")
                .unwrap();

        assert_eq!(
            selection,
            ColourSelection {
                colouring: ColouringKind::IterationCount,
                colour_index: ColourIndexKind::Simple,
                palette: PaletteKind::Cool,
            }
        );
    }

    #[test]
    fn test_from_identifiers_reports_the_unknown_stage() {
        let err = ColourSelection::from_identifiers(
            "smooth-iteration-count",
            "simple-index",
            "rainbow-palette",
        )
        .unwrap_err();

        assert_eq!(err.category, AlgorithmCategory::Palette);
        assert_eq!(err.identifier, "rainbow-palette");
    }

    #[test]
    fn test_default_selection() {
        let selection = ColourSelection::default();

        assert_eq!(selection.colouring, ColouringKind::SmoothIterationCount);
        assert_eq!(selection.colour_index, ColourIndexKind::Simple);
        assert_eq!(selection.palette, PaletteKind::Hot);
    }

    #[test]
    fn test_deserialize_partial_selection() {
        let selection: ColourSelection =
            serde_json::from_str(r#"{ "palette": "simple-palette" }"#).unwrap();

        assert_eq!(selection.colouring, ColouringKind::SmoothIterationCount);
        assert_eq!(selection.palette, PaletteKind::Simple);
    }
}
