//! Gamma correction.
//!
//! Pixel-wise operation with no spatial context. Alpha is preserved unchanged.

use ndarray::{Array3, ArrayView3};

/// Gamma used by the enhancement pipeline unless configured otherwise.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Build the 256-entry lookup table for `255 * (v / 255)^(1 / gamma)`.
///
/// Non-positive gamma is raised to 0.001 rather than dividing by zero.
pub fn gamma_lut(gamma: f32) -> [u8; 256] {
    let inv_gamma = 1.0 / gamma.max(0.001);
    let mut lut = [0u8; 256];
    for (v, entry) in lut.iter_mut().enumerate() {
        let corrected = 255.0 * (v as f32 / 255.0).powf(inv_gamma);
        *entry = corrected.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Apply gamma correction (u8 version).
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `gamma` - Gamma value: > 1.0 brightens midtones, < 1.0 darkens, 1.0 = no change
///
/// # Returns
/// Gamma-corrected image with same dimensions
pub fn gamma_rgba_u8(input: ArrayView3<u8>, gamma: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let lut = gamma_lut(gamma);

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = lut[input[[y, x, c]] as usize];
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}
