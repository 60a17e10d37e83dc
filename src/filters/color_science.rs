//! RGB <-> HSL conversion used by histogram equalization.
//!
//! All three HSL components are normalized to 0.0-1.0 (hue is a fraction of
//! a full turn, not degrees). Conversions run in f64 so that quantizing
//! lightness to 256 levels is stable for odd max+min sums.

const EPSILON: f64 = 1e-12;

/// Convert an 8-bit RGB triple to HSL.
/// Output: (h, s, l), each in 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Piecewise hue ramp over the six sextants of the color wheel.
#[inline]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert HSL (each in 0.0-1.0) back to 8-bit RGB, rounding to nearest.
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let (r, g, b) = if s.abs() < EPSILON {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hsl_roundtrip() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(51) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let (h, s, l) = rgb_to_hsl(r, g, b);
                    let (nr, ng, nb) = hsl_to_rgb(h, s, l);

                    assert!((r as i32 - nr as i32).abs() <= 1, "{r},{g},{b}");
                    assert!((g as i32 - ng as i32).abs() <= 1, "{r},{g},{b}");
                    assert!((b as i32 - nb as i32).abs() <= 1, "{r},{g},{b}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let (h, s, l) = rgb_to_hsl(255, 0, 0);
        assert!(h.abs() < 1e-9);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((l - 0.5).abs() < 1e-9);

        let (h, _, _) = rgb_to_hsl(0, 255, 0);
        assert!((h - 1.0 / 3.0).abs() < 1e-9);

        let (h, _, _) = rgb_to_hsl(0, 0, 255);
        assert!((h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_hue_wraps_for_magenta_side() {
        // max is red and g < b: hue lands in the last sextant
        let (h, _, _) = rgb_to_hsl(255, 0, 128);
        assert!(h > 5.0 / 6.0 && h < 1.0);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let (h, s, l) = rgb_to_hsl(128, 128, 128);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(hsl_to_rgb(h, s, l), (128, 128, 128));
    }
}
