use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::band;

/// Cyan, then blue, then green.
pub fn cool_palette(index: f64) -> Colour {
    let band = band(index);
    let ramp = band.fraction * 255.0;
    let fade = (1.0 - band.fraction) * 255.0;

    match band.index {
        0 => Colour::from_channels(0.0, ramp, ramp),
        1 => Colour::from_channels(0.0, fade, 255.0),
        _ => Colour::from_channels(0.0, ramp, fade),
    }
}
