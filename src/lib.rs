//! Photo Enhance
//!
//! Pixel-level photo enhancement engine with optional Python bindings via
//! PyO3 and WASM bindings for the browser.
//!
//! ## Image Format
//! Every filter works on 8-bit RGBA images laid out as an `ndarray` of shape
//! (height, width, 4). Alpha is carried through unchanged.
//!
//! ## Filters
//! - **Grayscale**: BT.601 luma
//! - **Low-pass**: 3x3 box blur
//! - **Gamma**: power-law correction, default gamma 2.2
//! - **Histogram**: equalization of HSL lightness
//! - **Sharpen**: 3x3 sharpen convolution
//!
//! ## Pipeline
//! [`pipeline::enhance`] runs each requested filter against the same source
//! image and returns one result per filter. Filters are alternatives, not
//! stages: none of them sees another's output.

pub mod advisor;
pub mod buffer;
pub mod codec;
pub mod config;
pub mod enhancement;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use config::EnhanceSettings;
pub use enhancement::FilterKind;
pub use error::{AdvisorError, EnhanceError, Result};
pub use pipeline::{enhance, process_image, EncodedEnhancement, EnhancementResult};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::ArrayView3;
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::{PixelBuffer, CHANNELS};
    use crate::config::EnhanceSettings;
    use crate::error::EnhanceError;
    use crate::filters;
    use crate::pipeline::enhance;

    impl From<EnhanceError> for PyErr {
        fn from(err: EnhanceError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    fn rgba_view<'a>(image: &'a PyReadonlyArray3<'_, u8>) -> PyResult<ArrayView3<'a, u8>> {
        let view = image.as_array();
        let (_, _, channels) = view.dim();
        if channels != CHANNELS {
            return Err(EnhanceError::UnsupportedChannels(channels).into());
        }
        Ok(view)
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Convert RGBA u8 image to grayscale using BT.601 luma.
    ///
    /// Output is RGBA with R=G=B=luma, alpha preserved.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::grayscale_rgba_u8(rgba_view(&image)?);
        Ok(result.into_pyarray(py))
    }

    /// 3x3 box blur; out-of-bounds neighbors are left out of the average.
    #[pyfunction]
    pub fn low_pass<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::low_pass_rgba_u8(rgba_view(&image)?);
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    #[pyo3(signature = (image, gamma_val=2.2))]
    pub fn gamma<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        gamma_val: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        if !gamma_val.is_finite() || gamma_val <= 0.0 {
            return Err(EnhanceError::InvalidGamma(gamma_val).into());
        }
        let result = filters::gamma_rgba_u8(rgba_view(&image)?, gamma_val);
        Ok(result.into_pyarray(py))
    }

    /// Equalize the HSL lightness histogram, keeping hue and saturation.
    #[pyfunction]
    pub fn histogram_equalize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::equalize_histogram_rgba_u8(rgba_view(&image)?);
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    pub fn sharpen<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::sharpen_rgba_u8(rgba_view(&image)?);
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// Run every filter against the image.
    ///
    /// Returns a list of `(filter_id, image)` tuples in presentation order.
    #[pyfunction]
    #[pyo3(signature = (image, gamma=2.2, parallel=true))]
    pub fn enhance_all<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        gamma: f32,
        parallel: bool,
    ) -> PyResult<Vec<(String, Bound<'py, PyArray3<u8>>)>> {
        let source = PixelBuffer::from_array(rgba_view(&image)?.to_owned())?;
        let settings = EnhanceSettings {
            gamma,
            parallel,
            ..EnhanceSettings::default()
        };

        let results = py.allow_threads(|| enhance(&source, &settings))?;
        Ok(results
            .into_iter()
            .map(|r| (r.id.id().to_string(), r.buffer.into_array().into_pyarray(py)))
            .collect())
    }

    // ========================================================================
    // Module Registration
    // ========================================================================

    #[pymodule]
    pub fn photo_enhance(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(low_pass, m)?)?;
        m.add_function(wrap_pyfunction!(gamma, m)?)?;
        m.add_function(wrap_pyfunction!(histogram_equalize, m)?)?;
        m.add_function(wrap_pyfunction!(sharpen, m)?)?;
        m.add_function(wrap_pyfunction!(enhance_all, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photo_enhance;
