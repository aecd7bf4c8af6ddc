use num_complex::Complex64;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::orbit::{escape, Escape};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};

const ORIGIN: Complex64 = Complex64::new(0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Escape;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape(
            ORIGIN,
            c,
            self.params.max_iterations(),
            self.params.bailout(),
            self.params.power(),
        ))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(pixel_rect: PixelRect, complex_rect: ComplexRect, params: MandelbrotParams) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            params,
        }
    }

    pub fn params(&self) -> MandelbrotParams {
        self.params
    }
}
