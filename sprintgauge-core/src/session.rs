//! Measurement lifecycle state machine
//!
//! ## Overview
//!
//! One `SessionController` owns everything mutable on the device: the state
//! enum, the live config, the distance estimator, and the session timing.
//! An external scheduler calls [`SessionController::tick`] forever; each
//! tick runs exactly one state's logic and returns. There is no concurrency
//! anywhere in this module - blocking calls (network, countdown delays) run
//! to completion inside the tick that issued them.
//!
//! ## State machine
//!
//! ```text
//! AwaitingConfig ──fetch ok──▶ Ready ──▶ Countdown ──▶ Measuring
//!       ▲  │ fetch failed:                                 │ total ≥ target
//!       │  └ warn, yellow, 5 s delay                       ▼
//!       │                                              Completed
//!       └───────────── Ready ◀── Uploading ◀───────────────┘
//! ```
//!
//! The load-bearing correctness property: a state handler invoked N times
//! while its guard condition is false has no cumulative side effect beyond
//! the first invocation. Concretely, the Measuring entry action (zero the
//! estimator, record the start time) runs exactly once per session, gated
//! by the `measurement_started` flag, which is cleared only when the
//! session's upload tick hands control back to Ready.

use heapless::String;

use crate::config::{SessionConfig, SessionResult};
use crate::errors::{FetchError, InitError, UploadError};
use crate::estimator::DistanceEstimator;
use crate::signals;
use crate::time::{Clock, Timestamp};
use crate::traits::{Actuator, SampleSource, TagWriter, Transport};

/// Maximum endpoint URL length, fixed so the controller stays heap-free
pub const MAX_URL_LEN: usize = 128;

/// Lifecycle state of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// Fetching (and re-fetching) the session config
    AwaitingConfig,
    /// Config in hand, about to start a session
    Ready,
    /// Running the visible/audible countdown
    Countdown,
    /// Polling the sensor and accumulating distance
    Measuring,
    /// Target reached, signaling completion
    Completed,
    /// Uploading the session result
    Uploading,
}

/// Remote endpoints the controller talks to
#[derive(Debug, Clone)]
pub struct Endpoints {
    config_url: String<MAX_URL_LEN>,
    data_url: String<MAX_URL_LEN>,
}

impl Endpoints {
    /// Store the config and data URLs, rejecting oversized ones
    pub fn new(config_url: &str, data_url: &str) -> Result<Self, InitError> {
        Ok(Self {
            config_url: String::try_from(config_url).map_err(|_| InitError::EndpointTooLong)?,
            data_url: String::try_from(data_url).map_err(|_| InitError::EndpointTooLong)?,
        })
    }
}

/// The orchestrator: owns all device state and drives the peripherals
///
/// Generic over the peripheral capabilities so hardware drivers and test
/// doubles are interchangeable. The tag writer is optional - a device whose
/// NFC module failed to probe runs every session with tag writes disabled.
pub struct SessionController<T, S, A, W, C>
where
    T: Transport,
    S: SampleSource,
    A: Actuator,
    W: TagWriter,
    C: Clock,
{
    endpoints: Endpoints,
    transport: T,
    sensor: S,
    actuator: A,
    tag: Option<W>,
    clock: C,

    state: DeviceState,
    config: SessionConfig,
    estimator: DistanceEstimator,
    measurement_started: bool,
    started_at: Timestamp,
    finished_at: Timestamp,
}

impl<T, S, A, W, C> SessionController<T, S, A, W, C>
where
    T: Transport,
    S: SampleSource,
    A: Actuator,
    W: TagWriter,
    C: Clock,
{
    /// Build a controller in `AwaitingConfig` with the firmware boot defaults
    pub fn new(
        endpoints: Endpoints,
        transport: T,
        sensor: S,
        actuator: A,
        tag: Option<W>,
        clock: C,
    ) -> Self {
        Self {
            endpoints,
            transport,
            sensor,
            actuator,
            tag,
            clock,
            state: DeviceState::AwaitingConfig,
            config: SessionConfig::default(),
            estimator: DistanceEstimator::new(),
            measurement_started: false,
            started_at: 0,
            finished_at: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Live session config (boot defaults until the first fetch succeeds)
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Distance accumulated so far in the current session, in meters
    pub fn distance(&self) -> f32 {
        self.estimator.total()
    }

    /// Run one scheduling tick: exactly one state's logic
    pub fn tick(&mut self) {
        match self.state {
            DeviceState::AwaitingConfig => self.await_config(),
            DeviceState::Ready => self.state = DeviceState::Countdown,
            DeviceState::Countdown => {
                self.run_countdown();
                self.state = DeviceState::Measuring;
            }
            DeviceState::Measuring => self.measure(),
            DeviceState::Completed => self.complete(),
            DeviceState::Uploading => self.upload(),
        }
    }

    /// AwaitingConfig: one fetch attempt per tick, fixed delay on failure
    fn await_config(&mut self) {
        match self.fetch_config() {
            Ok(config) => {
                log::info!(
                    "config received: target {} m, tag {}",
                    config.target_distance_m,
                    if config.use_tag { "enabled" } else { "disabled" }
                );
                self.config = config;
                self.state = DeviceState::Ready;
            }
            Err(err) => {
                log::warn!("config fetch failed: {}", err);
                self.actuator.set_color(signals::WARNING);
                self.clock.delay_ms(signals::FETCH_RETRY_DELAY_MS);
            }
        }
    }

    fn fetch_config(&mut self) -> Result<SessionConfig, FetchError> {
        let response = self.transport.get(self.endpoints.config_url.as_str())?;
        if response.status != 200 {
            return Err(FetchError::Status {
                status: response.status,
            });
        }
        SessionConfig::from_json(&response.body)
    }

    /// The blocking countdown: 3 × (red 500 ms, green 500 ms), then the
    /// start tone. Monopolizes the tick for ~3.5 s; nothing is measuring yet.
    fn run_countdown(&mut self) {
        for _ in 0..signals::COUNTDOWN_ROUNDS {
            self.actuator.set_color(signals::COUNTDOWN_HOLD);
            self.clock.delay_ms(signals::COUNTDOWN_PHASE_MS);
            self.actuator.set_color(signals::COUNTDOWN_GO);
            self.clock.delay_ms(signals::COUNTDOWN_PHASE_MS);
        }
        self.actuator.tone(signals::START_TONE_HZ, signals::TONE_MS);
        self.clock.delay_ms(signals::TONE_MS);
    }

    /// Measuring: one sample per tick; entry action guarded by a one-shot
    /// flag so re-entry never re-zeroes a session in progress
    fn measure(&mut self) {
        if !self.measurement_started {
            self.measurement_started = true;
            self.started_at = self.clock.now();
            self.estimator.reset(self.started_at);
        }

        let sample = self.sensor.poll();
        self.estimator.update(&sample);

        // Equality satisfies the target
        if self.estimator.total() >= self.config.target_distance_m {
            self.state = DeviceState::Completed;
        }
    }

    /// Completed: record the end time and emit the completion cue
    fn complete(&mut self) {
        self.finished_at = self.clock.now();
        self.actuator.set_color(signals::COMPLETE);
        self.actuator.tone(signals::END_TONE_HZ, signals::TONE_MS);
        self.clock.delay_ms(signals::TONE_MS);
        self.state = DeviceState::Uploading;
    }

    /// Uploading: single attempt, result dropped on failure, then back to
    /// Ready either way
    fn upload(&mut self) {
        self.actuator.set_color(signals::UPLOADING);

        let result = SessionResult {
            distance_m: self.estimator.total(),
            elapsed_ms: self.finished_at.saturating_sub(self.started_at),
            use_tag: self.config.use_tag,
        };

        if let Err(err) = self.upload_result(&result) {
            log::warn!("upload failed, result dropped: {}", err);
        }

        self.measurement_started = false;
        self.state = DeviceState::Ready;
    }

    fn upload_result(&mut self, result: &SessionResult) -> Result<(), UploadError> {
        let payload = result.to_json();
        let response =
            self.transport
                .post(self.endpoints.data_url.as_str(), "application/json", &payload)?;

        if response.status != 200 {
            return Err(UploadError::Status {
                status: response.status,
            });
        }

        log::info!("result uploaded: {}", response.body);

        if result.use_tag {
            self.write_tag(payload.as_bytes());
        }

        Ok(())
    }

    /// Forward the serialized record to the tag, diagnostics only
    fn write_tag(&mut self, payload: &[u8]) {
        match self.tag.as_mut() {
            Some(tag) => {
                if let Err(err) = tag.write(payload) {
                    log::warn!("tag write failed: {}", err);
                }
            }
            None => log::warn!("tag write skipped: module absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_reject_oversized_urls() {
        let bytes = [b'a'; MAX_URL_LEN + 1];
        let long = core::str::from_utf8(&bytes).unwrap();
        assert!(matches!(
            Endpoints::new(long, "http://host/data"),
            Err(InitError::EndpointTooLong)
        ));
        assert!(Endpoints::new("http://host/config", "http://host/data").is_ok());
    }
}
