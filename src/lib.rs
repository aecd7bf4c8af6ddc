pub mod config;
mod controllers;
mod core;
pub mod errors;
mod presenters;

pub use config::{AutoIterations, ConfigError, ExplorerConfig, RenderDefaults, TileConfig};
pub use controllers::ports::tile_encoder::TileEncoderPort;
pub use controllers::render_region::{render_named_region, render_region};
pub use controllers::tile_service::{tile_params, TileService};
pub use errors::RenderError;
pub use presenters::png::png_encoder::PngTileEncoder;

pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_region::render_region::{
    render_region as render_request, RenderRegionError,
};
pub use crate::core::actions::render_region::render_request::RenderRequest;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::named_region::{NamedRegion, UnknownRegionError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_index::ColourIndexKind;
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
pub use crate::core::fractals::mandelbrot::colouring::ColouringKind;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::orbit::{escape, orbit, Escape, Orbit};
pub use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::core::fractals::mandelbrot::seed::seed;
pub use crate::core::fractals::registry::{
    identifiers, resolve, AlgorithmCategory, RegistryKind, UnknownAlgorithmError,
};
pub use crate::core::tiles::tile_address::{
    tiles_per_side, TileAddress, TileAddressError, MAX_TILE_ZOOM, TILE_SIZE,
};
pub use crate::core::tiles::tile_bounds::{tile_bounds, TileBounds, BASE_VIEW};
pub use crate::core::tiles::tile_cache::{
    CacheStats, CachedTile, TileCache, DEFAULT_CACHE_CAPACITY_BYTES,
    DEFAULT_ENCODED_CACHE_CAPACITY_BYTES,
};
pub use crate::core::tiles::tile_params::{TileKey, TileParams};
pub use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};
