//! Error types for the enhancement engine.

use thiserror::Error;

use crate::enhancement::FilterKind;

/// Errors that abort an enhancement request.
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("pixel data has {len} bytes, expected {expected} for a {width}x{height} RGBA image")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
        expected: usize,
    },
    #[error("expected 4 channels (RGBA), got {0}")]
    UnsupportedChannels(usize),
    #[error("gamma must be finite and greater than zero, got {0}")]
    InvalidGamma(f32),
    #[error("unknown filter '{0}'; expected one of grayscale, low-pass, gamma, histogram, sharpen")]
    UnknownFilter(String),
    #[error("failed to decode source image")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode {filter} result")]
    Encode {
        filter: FilterKind,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid enhancement settings: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnhanceError>;

/// Failure reported by an external AI collaborator.
///
/// Never fatal to the engine; callers degrade to "no recommendation".
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("advisor returned no usable output")]
    EmptyResponse,
}
