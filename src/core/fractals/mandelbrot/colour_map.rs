use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::orbit::Escape;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::fractals::registry::RegistryKind;

/// Colours escape results with a [`ColourSelection`].
///
/// Points that never escaped are painted black whatever the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotColourMap {
    params: MandelbrotParams,
    selection: ColourSelection,
}

impl MandelbrotColourMap {
    pub fn new(params: MandelbrotParams, selection: ColourSelection) -> Self {
        Self { params, selection }
    }

    pub fn selection(&self) -> ColourSelection {
        self.selection
    }

    pub fn potential(&self, escape: Escape) -> f64 {
        self.selection.colouring.potential(
            escape,
            self.params.max_iterations(),
            self.params.bailout(),
            self.params.power(),
        )
    }
}

impl ColourMap<Escape> for MandelbrotColourMap {
    fn map(&self, escape: Escape) -> Colour {
        let max_iterations = self.params.max_iterations();

        if escape.escape_time >= max_iterations {
            return Colour::BLACK;
        }

        let index = self
            .selection
            .colour_index
            .index(self.potential(escape), max_iterations);

        self.selection.palette.colour(index)
    }

    fn display_name(&self) -> &str {
        self.selection.palette.display_name()
    }
}
