//! Capability traits for the device peripherals
//!
//! These traits are the seams between the controller and the hardware.
//! Keep them narrow - each peripheral exposes exactly the operations the
//! state machine consumes, so alternate hardware backends or test doubles
//! drop in without touching the controller.

use alloc::string::String;

use crate::errors::{TagError, TransportError};
use crate::signals::Rgb;
use crate::time::Timestamp;

/// Single timestamped 3-axis acceleration reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Monotonic capture time in milliseconds
    pub timestamp: Timestamp,

    /// Acceleration in m/s² along x, y, z
    pub accel: [f32; 3],
}

impl Sample {
    /// Create a sample from a timestamp and the three axis readings
    pub const fn new(timestamp: Timestamp, ax: f32, ay: f32, az: f32) -> Self {
        Self {
            timestamp,
            accel: [ax, ay, az],
        }
    }

    /// Euclidean magnitude of the acceleration vector
    pub fn magnitude(&self) -> f32 {
        let [ax, ay, az] = self.accel;
        libm::sqrtf(ax * ax + ay * ay + az * az)
    }
}

/// Pull-based inertial sensor
///
/// Produces a lazy, infinite, non-restartable sequence of samples - one per
/// `poll`. The controller only calls this while measuring. Sensitivity and
/// filter bandwidth are fixed at probe time by the driver, not configurable
/// through this trait.
pub trait SampleSource {
    /// Take the next acceleration sample
    fn poll(&mut self) -> Sample;
}

/// LED color and buzzer signaling
///
/// Fire-and-forget: no feedback is consulted. `tone` starts a tone that the
/// driver ends on its own after `duration_ms`; the controller blocks through
/// its [`Clock`](crate::time::Clock) when the cue must be heard in full.
pub trait Actuator {
    /// Show a steady color
    fn set_color(&mut self, color: Rgb);

    /// Sound a tone at `freq_hz` for `duration_ms` milliseconds
    fn tone(&mut self, freq_hz: u16, duration_ms: u32);
}

/// Near-field tag sink
///
/// Receives the serialized session record. Failures are logged by the
/// caller and never escalated.
pub trait TagWriter {
    /// Write the payload to the tag
    fn write(&mut self, payload: &[u8]) -> Result<(), TagError>;
}

/// Response obtained from the remote service
///
/// Any HTTP status lands here; only a dead link is an error at the
/// transport level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, may be empty
    pub body: String,
}

/// Synchronous, blocking network access
///
/// Each call runs to completion within the current tick - there is no
/// cancellation and no background work. Implementations live outside the
/// core (see the connectors crate for the ureq-backed one).
pub trait Transport {
    /// Issue a GET request
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Issue a POST request with the given content type and body
    fn post(
        &mut self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_axis_aligned_sample() {
        let sample = Sample::new(0, 3.0, 0.0, 4.0);
        assert!((sample.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        let sample = Sample::new(10, 0.0, 0.0, 0.0);
        assert_eq!(sample.magnitude(), 0.0);
    }
}
