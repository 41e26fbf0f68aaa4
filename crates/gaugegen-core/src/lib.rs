//! gaugegen core: gauge payload construction, wire envelope, and error types.
//!
//! This crate owns the only decision logic in gaugegen: range validation,
//! optional jitter, optional clamping and rounding. It carries no CLI or
//! logging-subscriber dependencies so it can be embedded in other test
//! harnesses as a plain library.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `GaugeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod builder;
pub mod error;
pub mod payload;

pub use builder::{GaugeParams, PayloadBuilder};
pub use payload::{GaugePayload, MetricPayload};

/// Shared result type.
pub use error::{GaugeError, Result};
