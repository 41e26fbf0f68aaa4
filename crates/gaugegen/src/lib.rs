//! Top-level facade crate for gaugegen.
//!
//! Re-exports the core builder and the CLI library so users can depend on a single crate.

pub mod core {
    pub use gaugegen_core::*;
}

pub mod cli {
    pub use gaugegen_cli::*;
}
