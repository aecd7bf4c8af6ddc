use std::fmt;

use thiserror::Error;

/// Width and height of every tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Deepest supported zoom level. Beyond this, adjacent tile edges stop being
/// representable as distinct `f64` values.
pub const MAX_TILE_ZOOM: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileAddressError {
    #[error("zoom {zoom} exceeds the maximum tile zoom {max}")]
    ZoomTooDeep { zoom: u32, max: u32 },
    #[error("tile {x}/{y} is outside the {tiles_per_side}x{tiles_per_side} grid at zoom {zoom}")]
    OutOfRange {
        zoom: u32,
        x: u64,
        y: u64,
        tiles_per_side: u64,
    },
}

/// A tile in the pyramid. At zoom `z` the base view is split into `2^z` by
/// `2^z` tiles, with `y = 0` along the top (largest imaginary part).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileAddress {
    zoom: u32,
    x: u64,
    y: u64,
}

impl TileAddress {
    pub fn new(zoom: u32, x: u64, y: u64) -> Result<Self, TileAddressError> {
        if zoom > MAX_TILE_ZOOM {
            return Err(TileAddressError::ZoomTooDeep {
                zoom,
                max: MAX_TILE_ZOOM,
            });
        }

        let tiles_per_side = tiles_per_side(zoom);

        if x >= tiles_per_side || y >= tiles_per_side {
            return Err(TileAddressError::OutOfRange {
                zoom,
                x,
                y,
                tiles_per_side,
            });
        }

        Ok(Self { zoom, x, y })
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    /// The four tiles one zoom level deeper that cover this one, in
    /// top-left, top-right, bottom-left, bottom-right order.
    pub fn children(&self) -> Result<[Self; 4], TileAddressError> {
        let zoom = self.zoom + 1;
        let (x, y) = (self.x * 2, self.y * 2);

        Ok([
            Self::new(zoom, x, y)?,
            Self::new(zoom, x + 1, y)?,
            Self::new(zoom, x, y + 1)?,
            Self::new(zoom, x + 1, y + 1)?,
        ])
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

pub fn tiles_per_side(zoom: u32) -> u64 {
    1_u64 << zoom
}
