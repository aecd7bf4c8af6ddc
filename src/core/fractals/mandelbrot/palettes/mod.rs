pub mod cool;
pub mod hot;
pub mod kinds;
pub mod simple;

/// Scale applied to the colour index by the banded palettes, so an index of
/// 0.4 already reaches the end of the ramp.
pub const BAND_SCALE: f64 = 2.5;

const BAND_COUNT: f64 = 3.0;

/// Position within one of three equal bands of a banded palette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Band {
    pub index: u8,
    pub fraction: f64,
}

/// Scales and clamps a colour index to `[0, 1]`. NaN maps to 0 and +inf to 1.
pub fn intensity(index: f64) -> f64 {
    if index.is_nan() {
        return 0.0;
    }

    (index * BAND_SCALE).clamp(0.0, 1.0)
}

pub fn band(index: f64) -> Band {
    let scaled = intensity(index) * BAND_COUNT;
    let band = scaled.floor().min(BAND_COUNT - 1.0);

    Band {
        index: band as u8,
        fraction: scaled - band,
    }
}
