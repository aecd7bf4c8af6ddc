use std::error::Error as StdError;

use thiserror::Error;

use crate::core::actions::render_region::render_region::RenderRegionError;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::registry::UnknownAlgorithmError;
use crate::core::tiles::tile_address::TileAddressError;

/// Every way a region or tile request can fail.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid region: {0}")]
    InvalidRegion(#[from] ComplexRectError),
    #[error("invalid resolution: {0}")]
    InvalidResolution(#[from] PixelRectError),
    #[error("invalid parameters: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmError),
    #[error("invalid tile: {0}")]
    InvalidTile(#[from] TileAddressError),
    #[error("failed to encode tile: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),
    #[error("failed to generate pixels: {0}")]
    Generate(#[from] RenderRegionError),
}
