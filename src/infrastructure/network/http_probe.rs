//! Public address lookup over HTTP
//!
//! Asks a "what is my IP" endpoint that answers with the bare address.

use std::net::IpAddr;
use std::time::Duration;

use crate::domain::ports::{AddressProbe, ProbeError};

pub const DEFAULT_PROBE_URL: &str = "https://api.ipify.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct HttpIpProbe {
    url: String,
    timeout: Duration,
}

impl HttpIpProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpIpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_URL, DEFAULT_TIMEOUT)
    }
}

/// Parse an endpoint's body into an address
pub fn parse_answer(body: &str) -> Result<IpAddr, ProbeError> {
    let trimmed = body.trim();
    trimmed
        .parse::<IpAddr>()
        .map_err(|_| ProbeError::Unparseable(trimmed.chars().take(64).collect()))
}

impl AddressProbe for HttpIpProbe {
    fn name(&self) -> &str {
        "public IP lookup"
    }

    fn probe(&self) -> Result<IpAddr, ProbeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("statstack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Request(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| ProbeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProbeError::Request(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|e| ProbeError::Request(e.to_string()))?;
        parse_answer(&body)
    }
}
