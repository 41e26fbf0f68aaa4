//! gaugegen binary: prints one gauge payload as a single JSON line.
//!
//! Logs go to stderr (`RUST_LOG`), stdout carries only the payload.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use gaugegen_cli::Cli;

fn main() {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match gaugegen_cli::run(&cli) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            tracing::warn!(code = e.code().as_str(), "gauge payload rejected");
            // Usage error: message + usage line on stderr, exit status 2.
            let msg = format!("{e} [{}]", e.code().as_str());
            Cli::command().error(ErrorKind::ValueValidation, msg).exit()
        }
    }
}
