//! Histogram equalization in the HSL lightness domain.
//!
//! Hue and saturation are kept; only lightness is remapped through the
//! cumulative distribution of its 256 quantized levels. This spreads global
//! contrast without shifting colors the way per-channel equalization would.

use log::debug;
use ndarray::{Array3, ArrayView3};

use super::color_science::{hsl_to_rgb, rgb_to_hsl};

/// Number of quantized lightness levels.
pub const LUMINANCE_LEVELS: usize = 256;

/// Quantize a 0.0-1.0 lightness to its level index.
#[inline]
fn quantize(l: f64) -> usize {
    let max_level = (LUMINANCE_LEVELS - 1) as f64;
    (l * max_level).round().clamp(0.0, max_level) as usize
}

/// Count pixels per quantized lightness level.
pub fn lightness_histogram(input: ArrayView3<u8>) -> [u64; LUMINANCE_LEVELS] {
    let (height, width, _) = input.dim();
    let mut histogram = [0u64; LUMINANCE_LEVELS];
    for y in 0..height {
        for x in 0..width {
            let (_, _, l) = rgb_to_hsl(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            histogram[quantize(l)] += 1;
        }
    }
    histogram
}

/// Running sum of a histogram, plus the first nonzero cumulative count.
///
/// The second value is 0 only when the histogram is empty.
pub fn cumulative_distribution(
    histogram: &[u64; LUMINANCE_LEVELS],
) -> ([u64; LUMINANCE_LEVELS], u64) {
    let mut cdf = [0u64; LUMINANCE_LEVELS];
    let mut cumulative = 0u64;
    let mut cdf_min = 0u64;

    for (level, &count) in histogram.iter().enumerate() {
        cumulative += count;
        cdf[level] = cumulative;
        if cdf_min == 0 && cumulative > 0 {
            cdf_min = cumulative;
        }
    }

    (cdf, cdf_min)
}

/// Equalize the lightness histogram of an RGBA image (u8 version).
///
/// Each pixel's lightness level becomes
/// `(cdf[level] - cdf_min) / (total - cdf_min)`; hue and saturation are
/// kept and alpha is copied.
///
/// When every pixel shares one lightness level the mapping is undefined
/// (`total == cdf_min`). The image is then returned unchanged.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Equalized RGBA image with same dimensions
pub fn equalize_histogram_rgba_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let total = (height * width) as u64;

    let mut hsl = Vec::with_capacity(height * width);
    let mut histogram = [0u64; LUMINANCE_LEVELS];
    for y in 0..height {
        for x in 0..width {
            let (h, s, l) = rgb_to_hsl(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            let level = quantize(l);
            histogram[level] += 1;
            hsl.push((h, s, level));
        }
    }

    let (cdf, cdf_min) = cumulative_distribution(&histogram);
    if total == cdf_min {
        debug!("single lightness level across {total} pixels, skipping equalization");
        return input.to_owned();
    }

    let range = (total - cdf_min) as f64;
    let mut output = Array3::<u8>::zeros((height, width, 4));
    for (i, &(h, s, level)) in hsl.iter().enumerate() {
        let (y, x) = (i / width, i % width);
        let new_l = (cdf[level] - cdf_min) as f64 / range;
        let (r, g, b) = hsl_to_rgb(h, s, new_l);

        output[[y, x, 0]] = r;
        output[[y, x, 1]] = g;
        output[[y, x, 2]] = b;
        output[[y, x, 3]] = input[[y, x, 3]];
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_ramp(values: &[u8]) -> Array3<u8> {
        Array3::from_shape_fn((1, values.len(), 4), |(_, x, c)| {
            if c == 3 { 255 } else { values[x] }
        })
    }

    #[test]
    fn test_equalize_single_pixel_is_identity() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 200;
        img[[0, 0, 1]] = 30;
        img[[0, 0, 2]] = 90;
        img[[0, 0, 3]] = 111;

        let result = equalize_histogram_rgba_u8(img.view());
        assert_eq!(result, img);
    }

    #[test]
    fn test_equalize_uniform_is_identity() {
        let img = Array3::from_shape_fn((3, 3, 4), |(_, _, c)| [10, 200, 60, 255][c]);
        let result = equalize_histogram_rgba_u8(img.view());
        assert_eq!(result, img);
    }

    #[test]
    fn test_equalize_stretches_gray_levels() {
        let img = gray_ramp(&[100, 110, 120, 130]);
        let result = equalize_histogram_rgba_u8(img.view());

        // cdf = 1, 2, 3, 4; cdf_min = 1 -> 0, 1/3, 2/3, 1
        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 1, 0]], 85);
        assert_eq!(result[[0, 2, 0]], 170);
        assert_eq!(result[[0, 3, 0]], 255);
        for x in 0..4 {
            assert_eq!(result[[0, x, 0]], result[[0, x, 1]]);
            assert_eq!(result[[0, x, 1]], result[[0, x, 2]]);
            assert_eq!(result[[0, x, 3]], 255);
        }
    }

    #[test]
    fn test_equalize_preserves_alpha_and_shape() {
        let img = Array3::from_shape_fn((3, 5, 4), |(y, x, c)| {
            ((y * 71 + x * 29 + c * 13) % 256) as u8
        });
        let result = equalize_histogram_rgba_u8(img.view());

        assert_eq!(result.dim(), img.dim());
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(result[[y, x, 3]], img[[y, x, 3]]);
            }
        }
    }

    #[test]
    fn test_cumulative_distribution_monotonic() {
        let img = Array3::from_shape_fn((8, 8, 4), |(y, x, c)| {
            ((y * 37 + x * 11 + c * 5) % 256) as u8
        });
        let histogram = lightness_histogram(img.view());
        let (cdf, cdf_min) = cumulative_distribution(&histogram);

        for pair in cdf.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(cdf[LUMINANCE_LEVELS - 1], 64);
        let first = cdf.iter().copied().find(|&v| v > 0).unwrap();
        assert_eq!(cdf_min, first);
    }

    #[test]
    fn test_equalize_empty_image() {
        let img = Array3::<u8>::zeros((0, 0, 4));
        let result = equalize_histogram_rgba_u8(img.view());
        assert_eq!(result.dim(), (0, 0, 4));
    }
}
