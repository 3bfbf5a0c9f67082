//! Session configuration and result records, with their wire forms
//!
//! The remote service speaks a flat JSON dialect inherited from the deployed
//! firmware: the config endpoint answers `{"distance": <meters>, "useNFC":
//! <bool>}` and the data endpoint accepts `{"distance": <meters>, "time":
//! <seconds>, "useNFC": <bool>}`. The wire structs keep those field names;
//! the in-memory types use the crate's own vocabulary.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::errors::FetchError;
use crate::time::Timestamp;

/// One session's configuration, replaced wholesale on every successful fetch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Distance at which a measurement completes, in meters. Always > 0.
    pub target_distance_m: f32,

    /// Whether the session result is also written to the NFC tag
    pub use_tag: bool,
}

impl Default for SessionConfig {
    /// Boot defaults of the deployed firmware. Only reachable if measuring
    /// starts before any fetch succeeds, which the state machine prevents.
    fn default() -> Self {
        Self {
            target_distance_m: 100.0,
            use_tag: false,
        }
    }
}

/// Config endpoint response body
#[derive(Debug, Deserialize)]
struct ConfigPayload {
    distance: f32,
    #[serde(rename = "useNFC")]
    use_nfc: bool,
}

impl SessionConfig {
    /// Parse a config-fetch response body
    ///
    /// Bad JSON, missing fields, and a non-positive or non-finite distance
    /// are all `MalformedPayload` - the state machine treats every fetch
    /// failure the same way, the variant only shapes the log line.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let payload: ConfigPayload =
            serde_json::from_str(body).map_err(|_| FetchError::MalformedPayload)?;

        if !payload.distance.is_finite() || payload.distance <= 0.0 {
            return Err(FetchError::MalformedPayload);
        }

        Ok(Self {
            target_distance_m: payload.distance,
            use_tag: payload.use_nfc,
        })
    }
}

/// Outcome of one completed measurement, consumed exactly once by the upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    /// Total estimated distance in meters
    pub distance_m: f32,

    /// Elapsed measurement time in milliseconds
    pub elapsed_ms: Timestamp,

    /// Copied from the session's config at upload time
    pub use_tag: bool,
}

/// Data endpoint request body
#[derive(Debug, Serialize)]
struct ResultPayload {
    distance: f32,
    time: f32,
    #[serde(rename = "useNFC")]
    use_nfc: bool,
}

impl SessionResult {
    /// Serialize to the upload wire form, `time` in seconds
    pub fn to_json(&self) -> String {
        let payload = ResultPayload {
            distance: self.distance_m,
            time: self.elapsed_ms as f32 / 1000.0,
            use_nfc: self.use_tag,
        };

        // A flat struct of primitives cannot fail to serialize
        serde_json::to_string(&payload).unwrap_or_default()
    }
}
