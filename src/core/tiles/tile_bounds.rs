use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::tiles::tile_address::{tiles_per_side, TileAddress};

/// Real and imaginary extent of a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// The area covered by the single tile at zoom 0.
pub const BASE_VIEW: TileBounds = TileBounds {
    x_min: -2.0,
    x_max: 1.0,
    y_min: -1.5,
    y_max: 1.5,
};

impl TileBounds {
    pub fn to_complex_rect(self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::from_bounds(self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Maps a tile address onto the complex plane.
///
/// Edges are computed as `origin + i * (span / 2^zoom)`. The division by a
/// power of two is exact, so a tile's edges coincide bit-for-bit with the outer
/// edges of its four children.
pub fn tile_bounds(address: TileAddress) -> TileBounds {
    let tiles = tiles_per_side(address.zoom()) as f64;
    let step_re = (BASE_VIEW.x_max - BASE_VIEW.x_min) / tiles;
    let step_im = (BASE_VIEW.y_max - BASE_VIEW.y_min) / tiles;
    let (x, y) = (address.x() as f64, address.y() as f64);

    TileBounds {
        x_min: BASE_VIEW.x_min + x * step_re,
        x_max: BASE_VIEW.x_min + (x + 1.0) * step_re,
        y_min: BASE_VIEW.y_max - (y + 1.0) * step_im,
        y_max: BASE_VIEW.y_max - y * step_im,
    }
}
