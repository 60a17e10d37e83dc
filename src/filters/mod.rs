//! Filter modules for the enhancement engine.
//!
//! ## Supported Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | Red, green, blue, alpha, 0-255 |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - `ArrayView3<u8>` in, freshly allocated `Array3<u8>` out
//! - **Alpha preservation** - Alpha is copied from the source pixel
//! - **Total** - Any valid RGBA array is accepted, including zero-sized ones
//! - **Independent** - No filter reads another filter's output
//!
//! ## Filters
//!
//! - **grayscale**: BT.601 luma
//! - **blur**: 3x3 low-pass box blur
//! - **color_adjust**: gamma correction
//! - **histogram**: lightness histogram equalization (uses `color_science`)
//! - **sharpen**: 3x3 sharpen convolution

pub mod blur;
pub mod color_adjust;
pub mod color_science;
pub mod grayscale;
pub mod histogram;
pub mod sharpen;

pub use blur::low_pass_rgba_u8;
pub use color_adjust::{gamma_rgba_u8, DEFAULT_GAMMA};
pub use grayscale::grayscale_rgba_u8;
pub use histogram::equalize_histogram_rgba_u8;
pub use sharpen::sharpen_rgba_u8;
