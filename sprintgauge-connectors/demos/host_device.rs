//! Host demo of a complete SprintGauge device
//!
//! Wires the controller to a real HTTP link and simulated peripherals so the
//! full lifecycle can be exercised on a workstation:
//! - config fetch from `SPRINTGAUGE_CONFIG_URL` (default http://localhost:8080/config)
//! - upload to `SPRINTGAUGE_DATA_URL` (default http://localhost:8080/endpoint)
//! - LED/buzzer cues printed to stdout
//! - inertial samples synthesized as a noisy forward push
//!
//! Startup mirrors the firmware: the inertial sensor is mandatory (set
//! `SPRINTGAUGE_NO_IMU=1` to watch the device halt in its idle loop), the
//! tag module is optional (`SPRINTGAUGE_NO_TAG=1` runs with tag writes
//! disabled).

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use sprintgauge_connectors::{HttpConfig, HttpLink};
use sprintgauge_core::errors::{InitError, TagError};
use sprintgauge_core::signals::Rgb;
use sprintgauge_core::time::SystemClock;
use sprintgauge_core::traits::{Actuator, Sample, SampleSource, TagWriter};
use sprintgauge_core::{Endpoints, SessionController};

/// Sampling period of the simulated sensor
const SAMPLE_PERIOD: Duration = Duration::from_millis(20);

/// Simulated inertial sensor: a steady push with a bit of stride wobble
struct SimulatedImu {
    epoch: Instant,
}

impl SimulatedImu {
    fn probe() -> Result<Self, InitError> {
        if env::var_os("SPRINTGAUGE_NO_IMU").is_some() {
            return Err(InitError::SensorMissing);
        }
        Ok(Self {
            epoch: Instant::now(),
        })
    }
}

impl SampleSource for SimulatedImu {
    fn poll(&mut self) -> Sample {
        thread::sleep(SAMPLE_PERIOD);
        let t_ms = self.epoch.elapsed().as_millis() as u64;
        let t_s = t_ms as f32 / 1000.0;
        let stride = (t_s * 3.0).sin();
        Sample::new(t_ms, 2.5 + 0.5 * stride, 0.2 * stride, 9.81)
    }
}

/// LED and buzzer rendered as console lines
struct ConsoleActuator;

impl Actuator for ConsoleActuator {
    fn set_color(&mut self, color: Rgb) {
        println!("[led] #{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    }

    fn tone(&mut self, freq_hz: u16, duration_ms: u32) {
        println!("[buzzer] {} Hz for {} ms", freq_hz, duration_ms);
    }
}

/// Tag module rendered as a console line
struct ConsoleTag;

impl ConsoleTag {
    fn probe() -> Result<Self, InitError> {
        if env::var_os("SPRINTGAUGE_NO_TAG").is_some() {
            return Err(InitError::TagModuleMissing);
        }
        Ok(Self)
    }
}

impl TagWriter for ConsoleTag {
    fn write(&mut self, payload: &[u8]) -> Result<(), TagError> {
        println!("[tag] {}", String::from_utf8_lossy(payload));
        Ok(())
    }
}

/// Missing mandatory hardware: never enter the state machine
fn halt() -> ! {
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}

fn main() {
    let config_url = env::var("SPRINTGAUGE_CONFIG_URL")
        .unwrap_or_else(|_| "http://localhost:8080/config".into());
    let data_url = env::var("SPRINTGAUGE_DATA_URL")
        .unwrap_or_else(|_| "http://localhost:8080/endpoint".into());

    let imu = match SimulatedImu::probe() {
        Ok(imu) => imu,
        Err(err) => {
            eprintln!("fatal: {}", err);
            halt();
        }
    };

    let tag = match ConsoleTag::probe() {
        Ok(tag) => Some(tag),
        Err(err) => {
            eprintln!("{}; running without tag writes", err);
            None
        }
    };

    let endpoints = match Endpoints::new(&config_url, &data_url) {
        Ok(endpoints) => endpoints,
        Err(err) => {
            eprintln!("fatal: {}", err);
            halt();
        }
    };

    let link = match HttpLink::new(HttpConfig::new().timeout_secs(10)) {
        Ok(link) => link,
        Err(err) => {
            eprintln!("fatal: {}", err);
            halt();
        }
    };

    let mut device =
        SessionController::new(endpoints, link, imu, ConsoleActuator, tag, SystemClock::new());

    println!("device up, config from {}", config_url);
    loop {
        device.tick();
    }
}
