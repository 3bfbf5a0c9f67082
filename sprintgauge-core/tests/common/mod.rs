//! Test doubles for the session lifecycle tests
//!
//! Everything here is shared-handle based (`Rc<RefCell<..>>`): the
//! controller takes ownership of its peripherals, so the test keeps a clone
//! of each fake to script responses and inspect what the controller did.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use sprintgauge_core::errors::{TagError, TransportError};
use sprintgauge_core::signals::Rgb;
use sprintgauge_core::time::{Clock, FixedClock, Timestamp};
use sprintgauge_core::traits::{
    Actuator, HttpResponse, Sample, SampleSource, TagWriter, Transport,
};

/// Shorthand for a scripted HTTP response
pub fn http(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        body: body.into(),
    })
}

/// Deterministic clock the test and the controller both hold
#[derive(Clone)]
pub struct SharedClock(Rc<RefCell<FixedClock>>);

impl SharedClock {
    pub fn new(start: Timestamp) -> Self {
        Self(Rc::new(RefCell::new(FixedClock::new(start))))
    }

    pub fn now_ms(&self) -> Timestamp {
        self.0.borrow_mut().now()
    }

    pub fn advance(&self, ms: u64) {
        self.0.borrow_mut().advance(ms);
    }
}

impl Clock for SharedClock {
    fn now(&mut self) -> Timestamp {
        self.0.borrow_mut().now()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().delay_ms(ms);
    }
}

/// One recorded POST request
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub url: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Default)]
struct TransportScript {
    get_responses: VecDeque<Result<HttpResponse, TransportError>>,
    post_responses: VecDeque<Result<HttpResponse, TransportError>>,
    gets: Vec<String>,
    posts: Vec<PostRecord>,
}

/// Transport whose responses are scripted by the test
///
/// An exhausted script behaves like a dead link, so a runaway controller
/// fails loudly instead of seeing phantom 200s.
#[derive(Clone, Default)]
pub struct ScriptedTransport(Rc<RefCell<TransportScript>>);

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_get(&self, response: Result<HttpResponse, TransportError>) {
        self.0.borrow_mut().get_responses.push_back(response);
    }

    pub fn push_post(&self, response: Result<HttpResponse, TransportError>) {
        self.0.borrow_mut().post_responses.push_back(response);
    }

    pub fn get_count(&self) -> usize {
        self.0.borrow().gets.len()
    }

    pub fn posts(&self) -> Vec<PostRecord> {
        self.0.borrow().posts.clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut script = self.0.borrow_mut();
        script.gets.push(url.into());
        script
            .get_responses
            .pop_front()
            .unwrap_or(Err(TransportError::NoLink))
    }

    fn post(
        &mut self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        let mut script = self.0.borrow_mut();
        script.posts.push(PostRecord {
            url: url.into(),
            content_type: content_type.into(),
            body: body.into(),
        });
        script
            .post_responses
            .pop_front()
            .unwrap_or(Err(TransportError::NoLink))
    }
}

/// Sensor that advances the shared clock by a fixed step on every poll
///
/// Models a sensor read taking `step_ms`, which keeps sample timestamps and
/// the controller's clock coherent. With magnitude `m` and step `s` seconds,
/// every update adds `0.5 * m * s²` meters.
pub struct PacedSource {
    clock: SharedClock,
    step_ms: u64,
    accel: [f32; 3],
}

impl PacedSource {
    pub fn new(clock: SharedClock, step_ms: u64, accel: [f32; 3]) -> Self {
        Self {
            clock,
            step_ms,
            accel,
        }
    }
}

impl SampleSource for PacedSource {
    fn poll(&mut self) -> Sample {
        self.clock.advance(self.step_ms);
        let [ax, ay, az] = self.accel;
        Sample::new(self.clock.now_ms(), ax, ay, az)
    }
}

/// One actuator cue as the controller emitted it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Color(Rgb),
    Tone { freq_hz: u16, duration_ms: u32 },
}

/// Actuator that records every cue in order
#[derive(Clone, Default)]
pub struct RecordingActuator(Rc<RefCell<Vec<Cue>>>);

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Actuator for RecordingActuator {
    fn set_color(&mut self, color: Rgb) {
        self.0.borrow_mut().push(Cue::Color(color));
    }

    fn tone(&mut self, freq_hz: u16, duration_ms: u32) {
        self.0.borrow_mut().push(Cue::Tone {
            freq_hz,
            duration_ms,
        });
    }
}

/// Tag writer that records payloads, optionally failing every write
#[derive(Clone, Default)]
pub struct RecordingTag {
    writes: Rc<RefCell<Vec<Vec<u8>>>>,
    fail: bool,
}

impl RecordingTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            writes: Rc::default(),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.borrow().clone()
    }
}

impl TagWriter for RecordingTag {
    fn write(&mut self, payload: &[u8]) -> Result<(), TagError> {
        if self.fail {
            return Err(TagError::WriteFailed);
        }
        self.writes.borrow_mut().push(payload.to_vec());
        Ok(())
    }
}
