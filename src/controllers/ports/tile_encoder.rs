use std::error::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Turns a rendered tile into the bytes served to clients.
pub trait TileEncoderPort {
    type Failure: Error + Send + Sync + 'static;

    fn encode(&self, pixel_buffer: &PixelBuffer) -> Result<Vec<u8>, Self::Failure>;

    fn content_type(&self) -> &'static str;
}
