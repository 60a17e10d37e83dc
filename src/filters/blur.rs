//! Low-pass (box blur) filter for RGBA images.

use ndarray::{Array3, ArrayView3};

/// Neighborhood radius of the low-pass filter (3x3 window).
const LOW_PASS_RADIUS: isize = 1;

/// Apply a 3x3 box blur to an RGBA image.
///
/// Each color channel is the average of the pixel and its in-bounds
/// neighbors. Neighbors outside the image are left out of both the sum and
/// the count, so corners average 4 samples and edges 6. The average is
/// truncated. Alpha is copied from the center pixel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Blurred RGBA image with same dimensions
pub fn low_pass_rgba_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut result = Array3::<u8>::zeros((height, width, 4));
    let r = LOW_PASS_RADIUS;

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for dy in -r..=r {
                let sy = y as isize + dy;
                if sy < 0 || sy >= height as isize {
                    continue;
                }

                for dx in -r..=r {
                    let sx = x as isize + dx;
                    if sx < 0 || sx >= width as isize {
                        continue;
                    }

                    for (c, total) in sum.iter_mut().enumerate() {
                        *total += input[[sy as usize, sx as usize, c]] as u32;
                    }
                    count += 1;
                }
            }

            // count >= 1: the center pixel is always in bounds
            for (c, total) in sum.iter().enumerate() {
                result[[y, x, c]] = (total / count) as u8;
            }
            result[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    result
}
