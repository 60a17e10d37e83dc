//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma coefficients (0.299, 0.587, 0.114).

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.601 luma coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Luma of one RGB triple, rounded to the nearest byte.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert RGBA u8 image to grayscale (luma method).
///
/// Output is RGBA with R=G=B=luma, A preserved.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values (0-255)
///
/// # Returns
/// New array with grayscale values in RGB channels, alpha preserved
pub fn grayscale_rgba_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let gray = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);

            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_grayscale_u8_red() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        for y in 0..2 {
            for x in 0..2 {
                img[[y, x, 0]] = 255; // R
                img[[y, x, 3]] = 255; // A
            }
        }

        let result = grayscale_rgba_u8(img.view());

        // round(0.299 * 255) = 76
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(result[[y, x, 0]], 76);
                assert_eq!(result[[y, x, 1]], 76);
                assert_eq!(result[[y, x, 2]], 76);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_grayscale_u8_green() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 1]] = 255; // G
        img[[0, 0, 3]] = 255; // A

        let result = grayscale_rgba_u8(img.view());

        // 0.587 * 255 = 149.685
        assert_eq!(result[[0, 0, 0]], 150);
    }

    #[test]
    fn test_grayscale_u8_white_stays_white() {
        let mut img = Array3::<u8>::from_elem((1, 1, 4), 255);
        img[[0, 0, 3]] = 255;

        let result = grayscale_rgba_u8(img.view());
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_grayscale_u8_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 128;
        img[[0, 0, 1]] = 128;
        img[[0, 0, 2]] = 128;
        img[[0, 0, 3]] = 100;

        let result = grayscale_rgba_u8(img.view());
        assert_eq!(result[[0, 0, 3]], 100);
        assert_eq!(result[[0, 0, 0]], 128);
    }

    #[test]
    fn test_grayscale_u8_channels_equal_luma() {
        let img = Array3::<u8>::from_shape_fn((3, 4, 4), |(y, x, c)| {
            ((y * 53 + x * 31 + c * 97) % 256) as u8
        });

        let result = grayscale_rgba_u8(img.view());

        for y in 0..3 {
            for x in 0..4 {
                let expected = luma_u8(img[[y, x, 0]], img[[y, x, 1]], img[[y, x, 2]]);
                assert_eq!(result[[y, x, 0]], expected);
                assert_eq!(result[[y, x, 1]], expected);
                assert_eq!(result[[y, x, 2]], expected);
                assert_eq!(result[[y, x, 3]], img[[y, x, 3]]);
            }
        }
    }
}
