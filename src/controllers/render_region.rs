use std::time::Instant;

use log::info;

use crate::core::actions::render_region::render_region::render_region as render_request;
use crate::core::actions::render_region::render_request::RenderRequest;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::named_region::NamedRegion;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::tiles::tile_params::TileParams;
use crate::errors::RenderError;

/// Renders `width` x `height` pixels spanning the given rectangle.
///
/// Algorithms are selected by identifier, e.g. `"smooth-iteration-count"`,
/// `"simple-index"` and `"hot-palette"`. Every argument is validated before
/// any pixel is computed. Row 0 of the result lies along `y_min`.
#[allow(clippy::too_many_arguments)]
pub fn render_region(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: u32,
    height: u32,
    max_iterations: u32,
    colouring: &str,
    colour_index: &str,
    palette: &str,
    bailout: f64,
    power: u32,
) -> Result<PixelBuffer, RenderError> {
    let region = ComplexRect::from_bounds(x_min, x_max, y_min, y_max)?;
    let pixel_rect = PixelRect::with_size(width, height)?;
    let params = MandelbrotParams::new(max_iterations, bailout, power)?;
    let selection = ColourSelection::from_identifiers(colouring, colour_index, palette)?;

    render(&RenderRequest::new(region, pixel_rect, params, selection))
}

/// Renders one of the preset views.
pub fn render_named_region(
    region: NamedRegion,
    width: u32,
    height: u32,
    params: &TileParams,
) -> Result<PixelBuffer, RenderError> {
    let request = RenderRequest::new(
        region.complex_rect()?,
        PixelRect::with_size(width, height)?,
        params.params,
        params.selection,
    );

    render(&request)
}

fn render(request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
    let start = Instant::now();
    let pixel_buffer = render_request(request)?;
    let region = request.region();

    info!(
        "rendered region [{}, {}] x [{}, {}] at {}x{} with {} iterations in {:?}",
        region.x_min(),
        region.x_max(),
        region.y_min(),
        region.y_max(),
        pixel_buffer.width(),
        pixel_buffer.height(),
        request.params().max_iterations(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}
