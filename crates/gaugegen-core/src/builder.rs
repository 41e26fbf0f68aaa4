//! Gauge value computation.
//!
//! Order of operations: validate range -> jitter -> clamp -> round.
//! Randomness is always owned by the call: a seeded `StdRng` when a seed is
//! given, otherwise the thread-local generator. Nothing seeds global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GaugeError, Result};
use crate::payload::GaugePayload;

/// Inputs for one gauge payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeParams {
    /// Lower bound of the declared range.
    pub min_value: f64,
    /// Upper bound of the declared range.
    pub max_value: f64,
    /// Nominal reading before jitter.
    pub value: f64,
    /// Free-form unit label.
    pub unit: String,
    /// Max magnitude of the symmetric perturbation. `0.0` disables it.
    pub jitter: f64,
    /// Seed for reproducible jitter.
    pub seed: Option<u64>,
    /// Saturate the value into `[min_value, max_value]`.
    pub clamp: bool,
}

impl Default for GaugeParams {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            value: 80.0,
            unit: "%".into(),
            jitter: 0.0,
            seed: None,
            clamp: true,
        }
    }
}

impl GaugeParams {
    pub fn validate(&self) -> Result<()> {
        // Written as a negation so NaN bounds fail too.
        if !(self.max_value > self.min_value) {
            return Err(GaugeError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if !self.min_value.is_finite() {
            return Err(GaugeError::NonFinite("--min"));
        }
        if !self.max_value.is_finite() {
            return Err(GaugeError::NonFinite("--max"));
        }
        if !self.value.is_finite() {
            return Err(GaugeError::NonFinite("--value"));
        }
        if !(self.jitter >= 0.0) || !self.jitter.is_finite() {
            return Err(GaugeError::InvalidJitter(self.jitter));
        }
        Ok(())
    }
}

/// Builds a [`GaugePayload`] from [`GaugeParams`].
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    params: GaugeParams,
}

impl PayloadBuilder {
    pub fn new(params: GaugeParams) -> Self {
        Self { params }
    }

    /// Validate and compute, choosing the random source from `seed`.
    pub fn build(&self) -> Result<GaugePayload> {
        self.params.validate()?;
        match self.params.seed {
            Some(seed) => self.compute(&mut StdRng::seed_from_u64(seed)),
            None => self.compute(&mut rand::rng()),
        }
    }

    /// Validate and compute with a caller-supplied generator. `seed` is ignored.
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> Result<GaugePayload> {
        self.params.validate()?;
        self.compute(rng)
    }

    fn compute<R: Rng>(&self, rng: &mut R) -> Result<GaugePayload> {
        let p = &self.params;
        let mut value = p.value;

        if p.jitter > 0.0 {
            // Scale a unit draw instead of sampling [-j, j] directly: the
            // width 2*j overflows for jitter near f64::MAX.
            let offset = rng.random_range(-1.0_f64..=1.0) * p.jitter;
            value += offset;
            tracing::debug!(jitter = p.jitter, offset, value, "jitter applied");
        }

        if p.clamp {
            let clamped = value.clamp(p.min_value, p.max_value);
            if clamped != value {
                tracing::debug!(from = value, to = clamped, "value clamped");
            }
            value = clamped;
        }

        if !value.is_finite() {
            return Err(GaugeError::NonFinite("jittered value"));
        }

        Ok(GaugePayload {
            min: round2(p.min_value),
            max: round2(p.max_value),
            value: round2(value),
            unit: p.unit.clone(),
        })
    }
}

/// Round to two decimals, half away from zero (`f64::round`).
///
/// Magnitudes from 1e15 up carry no fractional digits and are returned as is;
/// scaling them by 100 could overflow to infinity. Negative zero is
/// normalized so `-0.001` prints as `0.0`.
pub fn round2(x: f64) -> f64 {
    if x.abs() >= 1e15 {
        return x;
    }
    (x * 100.0).round() / 100.0 + 0.0
}
