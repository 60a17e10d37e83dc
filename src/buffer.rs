//! RGBA pixel buffer shared by every filter.
//!
//! The buffer is an `ndarray::Array3<u8>` of shape (height, width, 4). Filters
//! read it through [`PixelBuffer::view`] and hand back a freshly allocated
//! array, so a result never aliases its source.

use image::RgbaImage;
use ndarray::{Array3, ArrayView3};

use crate::error::{EnhanceError, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned width x height grid of 8-bit RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Fully transparent black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Buffer where every pixel has the same RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let pixels = Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| rgba[c]);
        Self { pixels }
    }

    /// Wrap interleaved RGBA bytes in row-major order.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(EnhanceError::InvalidDimensions {
                width,
                height,
                len: data.len(),
                expected,
            });
        }
        let len = data.len();
        let pixels = Array3::from_shape_vec((height, width, CHANNELS), data).map_err(|_| {
            EnhanceError::InvalidDimensions {
                width,
                height,
                len,
                expected,
            }
        })?;
        Ok(Self { pixels })
    }

    /// Wrap an existing (height, width, channels) array; channels must be 4.
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (_, _, channels) = pixels.dim();
        if channels != CHANNELS {
            return Err(EnhanceError::UnsupportedChannels(channels));
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Total byte length, always `width * height * 4`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// RGBA value at column `x`, row `y`.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        [
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
            self.pixels[[y, x, 3]],
        ]
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// Interleaved RGBA bytes in row-major order.
    pub fn into_raw(self) -> Vec<u8> {
        if self.pixels.is_standard_layout() {
            let (data, _) = self.pixels.into_raw_vec_and_offset();
            data
        } else {
            self.pixels.iter().copied().collect()
        }
    }

    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut data = image.into_raw();
        data.truncate(width * height * CHANNELS);
        Self::from_raw(width, height, data)
    }

    /// Copy into an `image` crate buffer; `None` if a dimension exceeds `u32`.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;
        RgbaImage::from_raw(width, height, self.clone().into_raw())
    }
}
