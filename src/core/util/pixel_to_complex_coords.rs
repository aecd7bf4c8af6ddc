use num_complex::Complex64;
use thiserror::Error;

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        .point.x,
        .point.y,
        .pixel_rect.top_left().x,
        .pixel_rect.top_left().y,
        .pixel_rect.bottom_right().x,
        .pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Linear, inclusive mapping: the corner pixels land exactly on the corners of
/// `complex_rect`, and pixel rows grow from `y_min` towards `y_max`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex64, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let real = complex_rect.x_min()
        + relative_pixel_x * complex_rect.width() / f64::from(pixel_rect.width() - 1);
    let imag = complex_rect.y_min()
        + relative_pixel_y * complex_rect.height() / f64::from(pixel_rect.height() - 1);

    Ok(Complex64::new(real, imag))
}
