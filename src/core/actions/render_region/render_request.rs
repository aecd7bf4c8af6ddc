use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Everything that determines a rendered image. Two equal requests always
/// produce identical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    region: ComplexRect,
    pixel_rect: PixelRect,
    params: MandelbrotParams,
    selection: ColourSelection,
}

impl RenderRequest {
    pub fn new(
        region: ComplexRect,
        pixel_rect: PixelRect,
        params: MandelbrotParams,
        selection: ColourSelection,
    ) -> Self {
        Self {
            region,
            pixel_rect,
            params,
            selection,
        }
    }

    pub fn region(&self) -> ComplexRect {
        self.region
    }

    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    pub fn params(&self) -> MandelbrotParams {
        self.params
    }

    pub fn selection(&self) -> ColourSelection {
        self.selection
    }
}
