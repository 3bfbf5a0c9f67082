//! Distance estimation by double integration of acceleration magnitude
//!
//! The estimator is deliberately crude and matches the deployed firmware
//! step for step: each sample contributes `0.5 * |a| * Δt²` where Δt is the
//! time since the previous sample (or since reset, for the first one). No
//! velocity state is carried across steps, no gravity compensation, no
//! drift correction. Accuracy is not the contract here - parity is.

use crate::time::Timestamp;
use crate::traits::Sample;

/// Accumulates an estimated scalar distance from successive samples
#[derive(Debug, Clone)]
pub struct DistanceEstimator {
    total_m: f32,
    last_ts: Timestamp,
}

impl DistanceEstimator {
    /// Create an estimator with zero accumulated distance
    pub fn new() -> Self {
        Self {
            total_m: 0.0,
            last_ts: 0,
        }
    }

    /// Zero the accumulated distance and set the reference timestamp
    pub fn reset(&mut self, at: Timestamp) {
        self.total_m = 0.0;
        self.last_ts = at;
    }

    /// Fold one sample into the running total, returning the distance added
    ///
    /// A sample carrying the same timestamp as the reference contributes
    /// exactly zero. Timestamps behind the reference saturate to Δt = 0, so
    /// a misbehaving sensor can never make the total go backwards or NaN.
    pub fn update(&mut self, sample: &Sample) -> f32 {
        let dt_ms = sample.timestamp.saturating_sub(self.last_ts);
        self.last_ts = sample.timestamp;

        if dt_ms == 0 {
            return 0.0;
        }

        let dt_s = dt_ms as f32 / 1000.0;
        let step_m = 0.5 * sample.magnitude() * dt_s * dt_s;
        self.total_m += step_m;
        step_m
    }

    /// Accumulated distance in meters since the last reset
    pub fn total(&self) -> f32 {
        self.total_m
    }
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        Self::new()
    }
}
