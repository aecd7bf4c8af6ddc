use crate::core::data::colour::Colour;

/// Greyscale ramp, black at 0 and white at 1 and above.
pub fn simple_palette(index: f64) -> Colour {
    let level = if index.is_nan() { 0.0 } else { index.clamp(0.0, 1.0) };

    Colour::grey(level * 255.0)
}
