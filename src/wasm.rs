//! WebAssembly exports for the enhancement filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Image data is
//! passed as the flat RGBA bytes of a canvas `ImageData` (length =
//! width * height * 4) and returned in the same layout.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::config::EnhanceSettings;
use crate::enhancement::FilterKind;
use crate::error::EnhanceError;
use crate::pipeline::apply_filter;

fn to_js(err: EnhanceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn run(data: &[u8], width: usize, height: usize, filter: FilterKind, gamma: f32) -> Result<Vec<u8>, JsValue> {
    let settings = EnhanceSettings::only(filter).with_gamma(gamma);
    settings.validate().map_err(to_js)?;

    let source = PixelBuffer::from_raw(width, height, data.to_vec()).map_err(to_js)?;
    let result = apply_filter(&source, filter, settings.gamma).map_err(to_js)?;
    Ok(result.into_raw())
}

// ============================================================================
// Filters
// ============================================================================

/// Convert RGBA bytes to grayscale using BT.601 luma.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGBA bytes with grayscale values
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Grayscale, 1.0)
}

#[wasm_bindgen]
pub fn low_pass_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::LowPass, 1.0)
}

/// Gamma-correct RGBA bytes; `gamma` must be positive.
#[wasm_bindgen]
pub fn gamma_wasm(data: &[u8], width: usize, height: usize, gamma: f32) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Gamma, gamma)
}

#[wasm_bindgen]
pub fn histogram_equalize_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Histogram, 1.0)
}

#[wasm_bindgen]
pub fn sharpen_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    run(data, width, height, FilterKind::Sharpen, 1.0)
}

// ============================================================================
// Dispatch by id
// ============================================================================

/// Apply the filter named by `id` ("grayscale", "low-pass", "gamma",
/// "histogram" or "sharpen"). Gamma uses the default of 2.2.
#[wasm_bindgen]
pub fn enhance_wasm(data: &[u8], width: usize, height: usize, id: &str) -> Result<Vec<u8>, JsValue> {
    let filter: FilterKind = id.parse().map_err(to_js)?;
    run(data, width, height, filter, EnhanceSettings::default().gamma)
}

/// Filter ids in presentation order.
#[wasm_bindgen]
pub fn filter_ids_wasm() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.id().to_string()).collect()
}
