//! Error Types for the Measurement Lifecycle
//!
//! ## Design Philosophy
//!
//! The error system follows the same constraints as the rest of the core:
//!
//! 1. **Small Size**: every variant is a few bytes; errors are returned on
//!    every failed tick and must be cheap to move around.
//!
//! 2. **No Heap Allocation**: no `String` anywhere - status codes and
//!    `&'static str` only, so memory usage stays deterministic on bare metal.
//!
//! 3. **Copy Semantics**: all error enums are `Copy`, so handlers can log an
//!    error and still match on it without clone ceremony.
//!
//! ## Error Categories
//!
//! ### Transport-level
//! - `TransportError`: the link itself is down. Any HTTP *status* is not an
//!   error at this level - it comes back inside the response.
//!
//! ### Operation-level
//! - `FetchError`: config fetch failed (link, status, or payload). All
//!   variants are handled identically by the state machine (warn, warning
//!   color, fixed retry delay); the split exists so logs can tell a dead
//!   link from a broken backend.
//! - `UploadError`: result upload failed. The result is dropped, never
//!   queued.
//! - `TagError`: tag write failed. Logged, never escalated.
//!
//! ### Startup
//! - `InitError`: a mandatory peripheral is absent. Missing inertial sensor
//!   is fatal (the device must not enter the state machine); missing tag
//!   module only disables the tag-write feature.

use thiserror_no_std::Error;

/// Transport faults - the link is unusable, no status code was obtained
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No network link available (Wi-Fi down, DNS failure, socket error)
    #[error("no network link")]
    NoLink,
}

/// Config fetch failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a status code
    #[error("fetch transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Server answered with something other than HTTP 200
    #[error("fetch rejected with status {status}")]
    Status {
        /// HTTP status code returned by the config endpoint
        status: u16,
    },

    /// Body was not the expected payload (bad JSON, missing fields, or a
    /// non-positive target distance)
    #[error("malformed config payload")]
    MalformedPayload,
}

/// Result upload failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    /// The request never produced a status code
    #[error("upload transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Server answered with something other than HTTP 200
    #[error("upload rejected with status {status}")]
    Status {
        /// HTTP status code returned by the data endpoint
        status: u16,
    },
}

/// Tag write failures - diagnostic only, never changes control flow
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// The tag module refused or aborted the write
    #[error("tag write failed")]
    WriteFailed,
}

/// Startup failures detected while probing peripherals
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// Inertial sensor not detected - fatal, the device must halt
    #[error("inertial sensor not detected")]
    SensorMissing,

    /// NFC/RFID module not detected - non-fatal, disables tag writes
    #[error("tag module not detected")]
    TagModuleMissing,

    /// Endpoint URL exceeds the fixed-capacity buffer
    #[error("endpoint URL too long")]
    EndpointTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_converts_into_operation_errors() {
        let fetch: FetchError = TransportError::NoLink.into();
        assert_eq!(fetch, FetchError::Transport(TransportError::NoLink));

        let upload: UploadError = TransportError::NoLink.into();
        assert_eq!(upload, UploadError::Transport(TransportError::NoLink));
    }

    #[test]
    fn errors_stay_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<TransportError>();
        assert_copy::<FetchError>();
        assert_copy::<UploadError>();
        assert_copy::<TagError>();
        assert_copy::<InitError>();
    }
}
