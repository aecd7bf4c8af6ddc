use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::controllers::ports::tile_encoder::TileEncoderPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngTileEncoder {}

impl PngTileEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TileEncoderPort for PngTileEncoder {
    type Failure = ImageError;

    fn encode(&self, pixel_buffer: &PixelBuffer) -> Result<Vec<u8>, Self::Failure> {
        let mut bytes = Vec::new();

        PngEncoder::new(&mut bytes).write_image(
            pixel_buffer.buffer(),
            pixel_buffer.width(),
            pixel_buffer.height(),
            ExtendedColorType::Rgb8,
        )?;

        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }
}
