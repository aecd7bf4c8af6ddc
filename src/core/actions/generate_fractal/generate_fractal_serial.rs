use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Computes every pixel of `pixel_rect` on the calling thread, in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;

    (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .flat_map(|y| (x_start..=x_end).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
