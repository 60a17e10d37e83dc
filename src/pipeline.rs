//! Enhancement pipeline orchestrator.
//!
//! Fans one source buffer out to every requested filter. Filters never see
//! each other's output: each one reads the same immutable view of the source
//! and returns its own buffer, so the fan-out runs on the rayon pool without
//! any synchronization. Results always come back in request order.

use log::debug;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::codec::{decode_image, encode_png};
use crate::config::EnhanceSettings;
use crate::enhancement::FilterKind;
use crate::error::{EnhanceError, Result};

/// One filter's output for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementResult {
    pub id: FilterKind,
    pub buffer: PixelBuffer,
}

/// One filter's output, PNG-encoded for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEnhancement {
    pub id: FilterKind,
    pub png: Vec<u8>,
}

/// Run a single filter against `source`.
pub fn apply_filter(source: &PixelBuffer, filter: FilterKind, gamma: f32) -> Result<PixelBuffer> {
    PixelBuffer::from_array(filter.apply(source.view(), gamma))
}

/// Run every filter in `settings` against the original `source`.
pub fn enhance(source: &PixelBuffer, settings: &EnhanceSettings) -> Result<Vec<EnhancementResult>> {
    settings.validate()?;
    debug!(
        "enhancing {}x{} image with {} filter(s), parallel={}",
        source.width(),
        source.height(),
        settings.filters.len(),
        settings.parallel
    );

    let run = |&id: &FilterKind| -> Result<EnhancementResult> {
        Ok(EnhancementResult {
            id,
            buffer: apply_filter(source, id, settings.gamma)?,
        })
    };

    if settings.parallel {
        settings.filters.par_iter().map(run).collect()
    } else {
        settings.filters.iter().map(run).collect()
    }
}

/// PNG-encode every result; the first failure fails the whole batch.
pub fn encode_results(results: &[EnhancementResult]) -> Result<Vec<EncodedEnhancement>> {
    results
        .iter()
        .map(|result| {
            let png = encode_png(&result.buffer).map_err(|source| EnhanceError::Encode {
                filter: result.id,
                source,
            })?;
            debug!("encoded {} result ({} bytes)", result.id, png.len());
            Ok(EncodedEnhancement { id: result.id, png })
        })
        .collect()
}

/// Decode an uploaded image, enhance it and encode every result.
///
/// Any decode or encode failure aborts the request; no partial results are
/// returned.
pub fn process_image(bytes: &[u8], settings: &EnhanceSettings) -> Result<Vec<EncodedEnhancement>> {
    let source = decode_image(bytes)?;
    let results = enhance(&source, settings)?;
    encode_results(&results)
}
