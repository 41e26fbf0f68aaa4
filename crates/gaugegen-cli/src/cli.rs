use std::path::PathBuf;

use clap::Parser;

use gaugegen_core::GaugeParams;

use crate::config::GaugeSection;

/// Flags are optional so a defaults file can fill the gaps; the documented
/// defaults apply when neither source sets a field.
#[derive(Debug, Parser, Clone)]
#[command(name = "gaugegen")]
#[command(about = "Emit a valid gauge payload for a metrics consumer")]
pub struct Cli {
    /// Gauge minimum [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Gauge maximum [default: 100.0]
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Gauge current value [default: 80.0]
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Gauge unit [default: %]
    #[arg(long)]
    pub unit: Option<String>,

    /// Random +/- jitter for value [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub jitter: Option<f64>,

    /// Optional random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clamp value into [min, max] range
    #[arg(long)]
    pub no_clamp: bool,

    /// YAML file with gauge defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over `file` over built-in defaults.
    pub fn resolve(&self, file: Option<&GaugeSection>) -> GaugeParams {
        let d = GaugeParams::default();
        let f = file.cloned().unwrap_or_default();

        GaugeParams {
            min_value: self.min.or(f.min).unwrap_or(d.min_value),
            max_value: self.max.or(f.max).unwrap_or(d.max_value),
            value: self.value.or(f.value).unwrap_or(d.value),
            unit: self.unit.clone().or(f.unit).unwrap_or(d.unit),
            jitter: self.jitter.or(f.jitter).unwrap_or(d.jitter),
            seed: self.seed.or(f.seed),
            clamp: !self.no_clamp && f.clamp.unwrap_or(d.clamp),
        }
    }
}
