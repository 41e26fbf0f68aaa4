//! gaugegen command-line library entry.
//!
//! Wires the clap surface, the optional YAML defaults file and the core
//! builder together. Consumed by the binary (`main.rs`) and by integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cli;
pub mod config;

use gaugegen_core::{PayloadBuilder, Result};

pub use cli::Cli;

/// Resolve parameters, build the payload and return the JSON line to print.
///
/// Nothing is returned on error, so callers never emit a partial payload.
pub fn run(cli: &Cli) -> Result<String> {
    let file = match &cli.config {
        Some(path) => {
            let cfg = config::load_from_file(path)?;
            tracing::info!(path = %path.display(), "loaded gauge defaults");
            Some(cfg.gauge)
        }
        None => None,
    };

    let params = cli.resolve(file.as_ref());
    tracing::debug!(
        min = params.min_value,
        max = params.max_value,
        value = params.value,
        jitter = params.jitter,
        seed = ?params.seed,
        clamp = params.clamp,
        "building gauge payload"
    );

    PayloadBuilder::new(params).build()?.into_json()
}
