//! Decoding uploads into pixel buffers and encoding results for delivery.

use std::io::Cursor;

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, ImageFormat};
use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{EnhanceError, Result};

/// MIME type of encoded enhancement results.
pub const PNG_MIME: &str = "image/png";

/// Decode an encoded image (PNG, JPEG) into an RGBA buffer.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let image = image::load_from_memory(bytes).map_err(EnhanceError::Decode)?;
    debug!(
        "decoded {}x{} source image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );
    PixelBuffer::from_rgba_image(image.to_rgba8())
}

/// Encode a buffer as PNG.
///
/// PNG has no representation for zero-sized images, so those fail here.
pub fn encode_png(buffer: &PixelBuffer) -> std::result::Result<Vec<u8>, ImageError> {
    if buffer.is_empty() {
        return Err(parameter_error("cannot encode a zero-sized image"));
    }
    let image = buffer
        .to_rgba_image()
        .ok_or_else(|| parameter_error("image dimensions exceed u32"))?;

    let mut out = Vec::new();
    image.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

fn parameter_error(message: &str) -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::Generic(
        message.to_string(),
    )))
}
