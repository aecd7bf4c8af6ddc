use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::render_region::render_request::RenderRequest;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderRegionError {
    #[error("algorithm error: {0}")]
    Algorithm(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

/// Runs the full pixel pipeline for `request`: coordinates, escape time,
/// potential, index, palette.
///
/// Rows are computed in parallel. Row 0 of the result is `y_min` of the region.
pub fn render_region(request: &RenderRequest) -> Result<PixelBuffer, RenderRegionError> {
    let pixel_rect = request.pixel_rect();
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, request.region(), request.params());
    let colour_map = MandelbrotColourMap::new(request.params(), request.selection());

    let start = Instant::now();
    let escapes = generate_fractal_parallel_rayon(pixel_rect, &algorithm)?;
    let escape_duration = start.elapsed();

    let pixel_buffer = generate_pixel_buffer(escapes, &colour_map, pixel_rect)?;

    debug!(
        "rendered {}x{} pixels: escape {:?}, colour {:?}",
        pixel_rect.width(),
        pixel_rect.height(),
        escape_duration,
        start.elapsed() - escape_duration
    );

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
    use crate::core::fractals::mandelbrot::params::MandelbrotParams;

    fn request(width: u32, height: u32, max_iterations: u32) -> RenderRequest {
        RenderRequest::new(
            ComplexRect::from_bounds(-2.0, 1.0, -1.5, 1.5).unwrap(),
            PixelRect::with_size(width, height).unwrap(),
            MandelbrotParams::with_max_iterations(max_iterations).unwrap(),
            ColourSelection::default(),
        )
    }

    #[test]
    fn test_render_region_buffer_shape() {
        let pixel_buffer = render_region(&request(40, 30, 50)).unwrap();

        assert_eq!(pixel_buffer.width(), 40);
        assert_eq!(pixel_buffer.height(), 30);
        assert_eq!(pixel_buffer.buffer_size(), 40 * 30 * 3);
    }

    #[test]
    fn test_render_region_is_deterministic() {
        let request = request(32, 32, 80);

        assert_eq!(render_region(&request).unwrap(), render_region(&request).unwrap());
    }

    #[test]
    fn test_render_region_matches_serial_pipeline() {
        let request = request(24, 18, 60);
        let algorithm =
            MandelbrotAlgorithm::new(request.pixel_rect(), request.region(), request.params());
        let colour_map = MandelbrotColourMap::new(request.params(), request.selection());
        let escapes = generate_fractal_serial(request.pixel_rect(), &algorithm).unwrap();
        let expected = generate_pixel_buffer(escapes, &colour_map, request.pixel_rect()).unwrap();

        assert_eq!(render_region(&request).unwrap(), expected);
    }

    #[test]
    fn test_render_region_paints_interior_black() {
        // Pixel (20, 15) of a 41x31 grid over the full view maps to -0.5 + 0i.
        let pixel_buffer = render_region(&request(41, 31, 100)).unwrap();

        assert_eq!(pixel_buffer.pixel(Point { x: 20, y: 15 }).unwrap(), Colour::BLACK);
        assert_ne!(pixel_buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }
}
