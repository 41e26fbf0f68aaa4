//! Gauge defaults file loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use gaugegen_core::error::{GaugeError, Result};

pub use schema::{GaugeConfig, GaugeSection};

pub fn load_from_file(path: &Path) -> Result<GaugeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GaugeError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GaugeConfig> {
    let cfg: GaugeConfig = serde_yaml::from_str(s)
        .map_err(|e| GaugeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
