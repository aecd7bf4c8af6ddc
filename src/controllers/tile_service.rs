use std::sync::Arc;

use log::info;

use crate::config::{AutoIterations, TileConfig};
use crate::controllers::ports::tile_encoder::TileEncoderPort;
use crate::core::actions::render_region::render_region::render_region;
use crate::core::actions::render_region::render_request::RenderRequest;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::tiles::tile_address::{TileAddress, TILE_SIZE};
use crate::core::tiles::tile_bounds::tile_bounds;
use crate::core::tiles::tile_cache::{CacheStats, TileCache};
use crate::core::tiles::tile_params::{TileKey, TileParams};
use crate::errors::RenderError;
use crate::presenters::png::png_encoder::PngTileEncoder;

/// Serves `TILE_SIZE` x `TILE_SIZE` tiles from a shared cache.
///
/// Tiles are north-up: row 0 holds the largest imaginary part, so tile
/// `(x, y + 1)` continues directly below tile `(x, y)`. Encoded tiles are
/// cached separately, so a repeated encoded request does no work.
pub struct TileService<E: TileEncoderPort = PngTileEncoder> {
    cache: TileCache,
    encoded: TileCache<Vec<u8>>,
    encoder: E,
    auto_iterations: AutoIterations,
}

impl TileService<PngTileEncoder> {
    #[must_use]
    pub fn with_png_encoder(config: &TileConfig) -> Self {
        Self::new(config, PngTileEncoder::new())
    }

    pub fn render_tile_png(
        &self,
        zoom: u32,
        x: u64,
        y: u64,
        params: &TileParams,
    ) -> Result<Arc<Vec<u8>>, RenderError> {
        self.render_tile_encoded(zoom, x, y, params)
    }
}

impl<E: TileEncoderPort> TileService<E> {
    pub fn new(config: &TileConfig, encoder: E) -> Self {
        Self {
            cache: TileCache::new(config.cache_capacity_bytes),
            encoded: TileCache::new(config.encoded_cache_capacity_bytes),
            encoder,
            auto_iterations: config.auto_iterations,
        }
    }

    /// Pixels of tile `zoom/x/y`, rendered on the first request and cached after.
    pub fn render_tile(
        &self,
        zoom: u32,
        x: u64,
        y: u64,
        params: &TileParams,
    ) -> Result<Arc<PixelBuffer>, RenderError> {
        let (key, params) = self.resolve_tile(zoom, x, y, params)?;

        self.render_pixels(key, &params)
    }

    /// Like [`render_tile`](Self::render_tile), encoded by the service's encoder.
    pub fn render_tile_encoded(
        &self,
        zoom: u32,
        x: u64,
        y: u64,
        params: &TileParams,
    ) -> Result<Arc<Vec<u8>>, RenderError> {
        let (key, params) = self.resolve_tile(zoom, x, y, params)?;

        self.encoded.get_or_render(key, || {
            let tile = self.render_pixels(key, &params)?;

            self.encoder
                .encode(&tile)
                .map_err(|err| RenderError::Encode(Box::new(err)))
        })
    }

    pub fn content_type(&self) -> &'static str {
        self.encoder.content_type()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        self.encoded.clear();
    }

    /// Stats of the pixel cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn encoded_cache_stats(&self) -> CacheStats {
        self.encoded.stats()
    }

    // The key hashes the params after auto iterations are applied.
    fn resolve_tile(
        &self,
        zoom: u32,
        x: u64,
        y: u64,
        params: &TileParams,
    ) -> Result<(TileKey, TileParams), RenderError> {
        let address = TileAddress::new(zoom, x, y)?;
        let params = self.auto_iterations.apply(*params, zoom)?;

        Ok((TileKey::new(address, &params), params))
    }

    fn render_pixels(
        &self,
        key: TileKey,
        params: &TileParams,
    ) -> Result<Arc<PixelBuffer>, RenderError> {
        self.cache
            .get_or_render(key, || render_uncached_tile(key.address, params))
    }
}

impl Default for TileService<PngTileEncoder> {
    fn default() -> Self {
        Self::with_png_encoder(&TileConfig::default())
    }
}

/// Builds tile params from algorithm identifiers with the default bailout and power.
pub fn tile_params(
    max_iterations: u32,
    colouring: &str,
    colour_index: &str,
    palette: &str,
) -> Result<TileParams, RenderError> {
    Ok(TileParams::new(
        MandelbrotParams::with_max_iterations(max_iterations)?,
        ColourSelection::from_identifiers(colouring, colour_index, palette)?,
    ))
}

fn render_uncached_tile(
    address: TileAddress,
    params: &TileParams,
) -> Result<PixelBuffer, RenderError> {
    let request = RenderRequest::new(
        tile_bounds(address).to_complex_rect()?,
        PixelRect::with_size(TILE_SIZE, TILE_SIZE)?,
        params.params,
        params.selection,
    );

    info!(
        "rendering tile {} with {} iterations",
        address,
        params.params.max_iterations()
    );

    Ok(render_region(&request)?.flipped_vertically())
}
