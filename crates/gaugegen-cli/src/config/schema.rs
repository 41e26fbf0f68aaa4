use serde::Deserialize;
use gaugegen_core::error::{GaugeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaugeConfig {
    pub version: u32,

    #[serde(default)]
    pub gauge: GaugeSection,
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GaugeError::Config(format!(
                "unsupported config version {} (expected 1)",
                self.version
            )));
        }

        self.gauge.validate()?;

        Ok(())
    }
}

/// Every key is optional; unset keys fall through to flag defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GaugeSection {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub jitter: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub clamp: Option<bool>,
}

impl GaugeSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(j) = self.jitter {
            if !(j >= 0.0) || !j.is_finite() {
                return Err(GaugeError::Config(format!(
                    "gauge.jitter must be a non-negative number (got {j})"
                )));
            }
        }
        // Range checks wait until flags are merged: a flag may fix a bad bound.
        Ok(())
    }
}
