//! Shared error type across gaugegen crates.

use thiserror::Error;

/// Stable error codes, appended to CLI usage errors as `[CODE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `max` is not strictly greater than `min`.
    InvalidRange,
    /// Negative or NaN jitter.
    InvalidJitter,
    /// A numeric input is NaN or infinite.
    NonFinite,
    /// Defaults file could not be read or parsed.
    Config,
    /// Internal failure (serialization).
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::InvalidJitter => "INVALID_JITTER",
            ErrorCode::NonFinite => "NON_FINITE",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Unified error type used by core and cli.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("--max must be greater than --min (min={min}, max={max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("--jitter must be a non-negative number (got {0})")]
    InvalidJitter(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GaugeError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GaugeError::InvalidRange { .. } => ErrorCode::InvalidRange,
            GaugeError::InvalidJitter(_) => ErrorCode::InvalidJitter,
            GaugeError::NonFinite(_) => ErrorCode::NonFinite,
            GaugeError::Config(_) => ErrorCode::Config,
            GaugeError::Internal(_) => ErrorCode::Internal,
        }
    }
}
