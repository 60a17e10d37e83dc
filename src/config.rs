//! Enhancement settings.
//!
//! Settings are plain serde structs with defaults for every field so a
//! partial JSON document (or none at all) yields the stock pipeline: all five
//! filters, gamma 2.2, parallel fan-out.

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::enhancement::FilterKind;
use crate::error::{EnhanceError, Result};
use crate::filters::DEFAULT_GAMMA;

/// Which filters to run and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceSettings {
    /// Exponent for the gamma filter; must be finite and positive.
    pub gamma: f32,
    /// Filters to run, in result order. Duplicates are run again.
    pub filters: Vec<FilterKind>,
    /// Run filters on the rayon pool instead of one after another.
    pub parallel: bool,
}

impl Default for EnhanceSettings {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            filters: FilterKind::ALL.to_vec(),
            parallel: true,
        }
    }
}

impl EnhanceSettings {
    /// Settings that run a single filter.
    pub fn only(filter: FilterKind) -> Self {
        Self {
            filters: vec![filter],
            ..Self::default()
        }
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(EnhanceError::InvalidGamma(self.gamma));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading enhancement settings from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
