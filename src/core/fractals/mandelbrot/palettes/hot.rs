use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::band;

/// Red, then yellow, then white.
pub fn hot_palette(index: f64) -> Colour {
    let band = band(index);
    let ramp = band.fraction * 255.0;

    match band.index {
        0 => Colour::from_channels(ramp, 0.0, 0.0),
        1 => Colour::from_channels(255.0, ramp, 0.0),
        _ => Colour::from_channels(255.0, 255.0, ramp),
    }
}
