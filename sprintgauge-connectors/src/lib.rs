//! Network connectors for SprintGauge
//!
//! ## Overview
//!
//! The core crate talks to the remote service through the narrow
//! [`Transport`](sprintgauge_core::Transport) trait: a synchronous GET or
//! POST that either yields a status code plus body, or fails because the
//! link itself is down. This crate provides the real implementations of that
//! trait for host-class devices.
//!
//! ## Why blocking HTTP?
//!
//! The device runs a single-threaded cooperative tick loop with no
//! preemption; a network call is *expected* to monopolize its tick until it
//! completes. A blocking `ureq` agent matches that model exactly - an async
//! runtime would add machinery the scheduler could never exploit.
//!
//! Error mapping rules (the core depends on these):
//! - Any HTTP status, including 4xx/5xx, is a *response*, not an error.
//!   Status handling is the state machine's job.
//! - Only transport-level faults (DNS, socket, TLS, timeout) map to
//!   [`TransportError::NoLink`](sprintgauge_core::TransportError).
//! - No retries here: the state machine owns its own retry policy
//!   (fixed-delay refetch for config, drop-on-failure for uploads).

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod http;

pub use http::{HttpConfig, HttpLink};

use thiserror::Error;

/// Connector construction errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Invalid configuration (bad URL scheme, zero timeout)
    #[error("configuration error: {0}")]
    Config(String),
}
