//! Blocking HTTP transport over `ureq`
//!
//! Implements the core [`Transport`] trait for devices with a Wi-Fi or
//! Ethernet link and a std environment. Kept intentionally small: no
//! pooling knobs beyond what the agent does itself, no auth, no
//! compression - the measurement payloads are a few dozen bytes.

use std::time::Duration;

use sprintgauge_core::errors::TransportError;
use sprintgauge_core::traits::{HttpResponse, Transport};

use crate::ConnectorError;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("SprintGauge/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the user agent string
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// The device's network link, backed by a blocking ureq agent
pub struct HttpLink {
    agent: ureq::Agent,
}

impl HttpLink {
    /// Create a link with the given configuration
    pub fn new(config: HttpConfig) -> Result<Self, ConnectorError> {
        if config.timeout.is_zero() {
            return Err(ConnectorError::Config("timeout must be non-zero".into()));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self { agent })
    }

    /// Fold a ureq outcome into the core's transport contract: every status
    /// code is a response, only a dead link is an error
    fn into_response(
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<HttpResponse, TransportError> {
        match result {
            Ok(response) => Ok(Self::read_body(response)),
            Err(ureq::Error::Status(_, response)) => Ok(Self::read_body(response)),
            Err(ureq::Error::Transport(err)) => {
                log::warn!("transport fault: {}", err);
                Err(TransportError::NoLink)
            }
        }
    }

    fn read_body(response: ureq::Response) -> HttpResponse {
        let status = response.status();
        let body = response.into_string().unwrap_or_default();
        HttpResponse { status, body }
    }
}

impl Transport for HttpLink {
    fn get(&mut self, url: &str) -> Result<HttpResponse, TransportError> {
        Self::into_response(self.agent.get(url).call())
    }

    fn post(
        &mut self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        Self::into_response(
            self.agent
                .post(url)
                .set("Content-Type", content_type)
                .send_string(body),
        )
    }
}
