//! Core measurement engine for SprintGauge
//!
//! Drives one sprint-drill measurement unit: fetch a session config, count
//! down, integrate accelerometer samples into a distance estimate, signal
//! progress over LED/buzzer, upload the result, optionally mirror it to an
//! NFC tag. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - Single-threaded cooperative tick loop, no async, no locking
//! - No heap allocation outside payload (de)serialization
//! - All peripherals behind narrow capability traits
//!
//! ```no_run
//! use sprintgauge_core::{Endpoints, SessionController};
//! # use sprintgauge_core::{errors::{TagError, TransportError}, signals::Rgb,
//! #     time::{Clock, Timestamp}, traits::*};
//! # struct Imu; impl SampleSource for Imu { fn poll(&mut self) -> Sample { Sample::new(0, 0.0, 0.0, 0.0) } }
//! # struct Led; impl Actuator for Led { fn set_color(&mut self, _: Rgb) {} fn tone(&mut self, _: u16, _: u32) {} }
//! # struct Tag; impl TagWriter for Tag { fn write(&mut self, _: &[u8]) -> Result<(), TagError> { Ok(()) } }
//! # struct Link; impl Transport for Link {
//! #     fn get(&mut self, _: &str) -> Result<HttpResponse, TransportError> { Err(TransportError::NoLink) }
//! #     fn post(&mut self, _: &str, _: &str, _: &str) -> Result<HttpResponse, TransportError> { Err(TransportError::NoLink) }
//! # }
//! # struct Timer; impl Clock for Timer { fn now(&mut self) -> Timestamp { 0 } fn delay_ms(&mut self, _: u32) {} }
//!
//! let endpoints = Endpoints::new("http://api.local/config", "http://api.local/endpoint")?;
//! let mut device = SessionController::new(endpoints, Link, Imu, Led, Some(Tag), Timer);
//!
//! // The surrounding runtime calls this forever
//! device.tick();
//! # Ok::<(), sprintgauge_core::errors::InitError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod errors;
pub mod estimator;
pub mod session;
pub mod signals;
pub mod time;
pub mod traits;

// Public API
pub use config::{SessionConfig, SessionResult};
pub use errors::{FetchError, InitError, TagError, TransportError, UploadError};
pub use estimator::DistanceEstimator;
pub use session::{DeviceState, Endpoints, SessionController};
pub use traits::{Actuator, HttpResponse, Sample, SampleSource, TagWriter, Transport};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
