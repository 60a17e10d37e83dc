//! Sharpen filter: fixed 3x3 convolution.
//!
//! ## Boundary Handling
//!
//! Taps that fall outside the image contribute nothing and the remaining
//! weights are not renormalized. Border pixels therefore receive a partial
//! sum (the center weight of 5 dominates) and come out brighter than the
//! interior would for the same neighborhood. The low-pass filter instead
//! drops missing taps from its divisor.

use ndarray::{Array3, ArrayView3};

/// Sharpening kernel:
///  0 -1  0
/// -1  5 -1
///  0 -1  0
const SHARPEN_KERNEL: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Apply the 3x3 sharpen kernel to an RGBA image - u8 version.
///
/// R, G and B are convolved independently and clamped to 0-255. Alpha is
/// copied from the center pixel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Sharpened RGBA image with same dimensions
pub fn sharpen_rgba_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0i32; 3];

            for (ky, row) in SHARPEN_KERNEL.iter().enumerate() {
                let sy = y as isize + ky as isize - 1;
                if sy < 0 || sy >= height as isize {
                    continue;
                }

                for (kx, &weight) in row.iter().enumerate() {
                    let sx = x as isize + kx as isize - 1;
                    if sx < 0 || sx >= width as isize || weight == 0 {
                        continue;
                    }

                    for (c, total) in sum.iter_mut().enumerate() {
                        *total += input[[sy as usize, sx as usize, c]] as i32 * weight;
                    }
                }
            }

            for (c, total) in sum.iter().enumerate() {
                output[[y, x, c]] = (*total).clamp(0, 255) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}
