//! The closed set of enhancement filters and their display metadata.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

use crate::error::EnhanceError;
use crate::filters;

/// One of the five deterministic enhancement filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Grayscale,
    LowPass,
    Gamma,
    Histogram,
    Sharpen,
}

impl FilterKind {
    /// Every filter, in the order results are presented.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Grayscale,
        FilterKind::LowPass,
        FilterKind::Gamma,
        FilterKind::Histogram,
        FilterKind::Sharpen,
    ];

    /// Stable identifier used in settings and bindings.
    pub fn id(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::LowPass => "low-pass",
            FilterKind::Gamma => "gamma",
            FilterKind::Histogram => "histogram",
            FilterKind::Sharpen => "sharpen",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "Grayscale",
            FilterKind::LowPass => "Low-pass",
            FilterKind::Gamma => "Gamma",
            FilterKind::Histogram => "Histogram",
            FilterKind::Sharpen => "Sharpen",
        }
    }

    /// Default user-facing description, shown when no AI explanation exists.
    pub fn description(self) -> &'static str {
        match self {
            FilterKind::Grayscale => {
                "Converts the image to shades of gray, removing all color information. Useful for focusing on texture and luminance."
            }
            FilterKind::LowPass => {
                "Applies a blur filter to smoothen the image and reduce noise by averaging pixel values in a neighborhood."
            }
            FilterKind::Gamma => {
                "Adjusts the image's brightness and contrast by applying a non-linear transformation to the pixel values."
            }
            FilterKind::Histogram => {
                "Redistributes pixel intensities to enhance global contrast by spreading out the most frequent intensity values."
            }
            FilterKind::Sharpen => {
                "Emphasizes edges and fine detail with a 3x3 sharpening convolution."
            }
        }
    }

    /// Whether the AI advisor may recommend this filter.
    ///
    /// Sharpen is reserved for the AI regeneration path.
    pub fn is_suggestible(self) -> bool {
        !matches!(self, FilterKind::Sharpen)
    }

    /// Run this filter against an RGBA view.
    pub fn apply(self, input: ArrayView3<u8>, gamma: f32) -> Array3<u8> {
        match self {
            FilterKind::Grayscale => filters::grayscale_rgba_u8(input),
            FilterKind::LowPass => filters::low_pass_rgba_u8(input),
            FilterKind::Gamma => filters::gamma_rgba_u8(input, gamma),
            FilterKind::Histogram => filters::equalize_histogram_rgba_u8(input),
            FilterKind::Sharpen => filters::sharpen_rgba_u8(input),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FilterKind {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" => Ok(FilterKind::Grayscale),
            "low-pass" | "lowpass" | "low_pass" => Ok(FilterKind::LowPass),
            "gamma" => Ok(FilterKind::Gamma),
            "histogram" => Ok(FilterKind::Histogram),
            "sharpen" => Ok(FilterKind::Sharpen),
            other => Err(EnhanceError::UnknownFilter(other.to_string())),
        }
    }
}
