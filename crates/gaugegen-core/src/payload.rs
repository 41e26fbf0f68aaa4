//! Metric wire envelope (JSON).
//!
//! `MetricPayload` is adjacently tagged, so a gauge serializes as
//! `{"type":"gauge","data":{"min":..,"max":..,"value":..,"unit":..}}`.
//! Parsing is strict: unknown keys at either level are rejected.

use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, Result};

/// Metric envelope (the full JSON document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", deny_unknown_fields)]
pub enum MetricPayload {
    #[serde(rename = "gauge")]
    Gauge(GaugePayload),
}

impl MetricPayload {
    /// Compact single-line JSON. Non-ASCII text is written literally.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| GaugeError::Internal(format!("serialize payload failed: {e}")))
    }

    /// Parse a payload previously produced by [`MetricPayload::to_json`].
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| GaugeError::Internal(format!("invalid payload json: {e}")))
    }
}

/// Gauge reading within a declared range (the `data` object).
///
/// Built by [`crate::PayloadBuilder`]; numeric fields are already rounded to
/// two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaugePayload {
    /// Lower bound of the declared range.
    pub min: f64,
    /// Upper bound of the declared range.
    pub max: f64,
    /// Computed reading.
    pub value: f64,
    /// Unit label, passed through untouched.
    pub unit: String,
}

impl GaugePayload {
    /// Wrap into the envelope and serialize.
    pub fn into_json(self) -> Result<String> {
        MetricPayload::from(self).to_json()
    }
}

impl From<GaugePayload> for MetricPayload {
    fn from(g: GaugePayload) -> Self {
        MetricPayload::Gauge(g)
    }
}
