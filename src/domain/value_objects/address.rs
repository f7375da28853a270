//! Address Value Objects
//!
//! Hostnames, host addresses and contact emails end up verbatim in the
//! Caddyfile, so they are validated here and renderers never escape them.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

/// Rejected operator input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}: {reason}")]
pub struct InvalidValue {
    pub kind: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl InvalidValue {
    fn new(kind: &'static str, value: &str, reason: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            reason,
        }
    }
}

/// DNS hostname (lowercased, without scheme, port or path)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hostname(String);

impl Hostname {
    pub fn parse(input: &str) -> Result<Self, InvalidValue> {
        let value = input.trim().trim_end_matches('.').to_lowercase();
        let invalid = |reason| InvalidValue::new("hostname", input.trim(), reason);

        if value.is_empty() {
            return Err(invalid("hostname is empty"));
        }
        if value.contains("://") || value.contains('/') {
            return Err(invalid("enter the bare hostname without scheme or path"));
        }
        if value.len() > 253 {
            return Err(invalid("hostname is longer than 253 characters"));
        }

        for label in value.split('.') {
            if label.is_empty() {
                return Err(invalid("hostname contains an empty label"));
            }
            if label.len() > 63 {
                return Err(invalid("label is longer than 63 characters"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid("label starts or ends with '-'"));
            }
            if !label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            {
                return Err(invalid("only letters, digits, '-' and '.' are allowed"));
            }
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hostname {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Address the stack is reachable at in direct-address mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostAddress {
    Ip(IpAddr),
    Name(Hostname),
}

impl HostAddress {
    /// Placeholder used when every detection method failed
    pub fn localhost() -> Self {
        Self::Name(Hostname("localhost".to_string()))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Name(h) if h.as_str() == "localhost")
    }

    /// Form usable inside a URL authority (IPv6 is bracketed)
    pub fn url_host(&self) -> String {
        match self {
            Self::Ip(IpAddr::V6(ip)) => format!("[{}]", ip),
            Self::Ip(ip) => ip.to_string(),
            Self::Name(name) => name.to_string(),
        }
    }

    pub fn http_url(&self, port: u16) -> String {
        format!("http://{}:{}", self.url_host(), port)
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => write!(f, "{}", ip),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for HostAddress {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ip) = trimmed.parse::<IpAddr>() {
            return Ok(Self::Ip(ip));
        }
        Hostname::parse(trimmed).map(Self::Name)
    }
}

/// Contact address for ACME certificate issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(input: &str) -> Result<Self, InvalidValue> {
        let value = input.trim();
        let invalid = |reason| InvalidValue::new("email address", value, reason);

        let Some((local, domain)) = value.split_once('@') else {
            return Err(invalid("missing '@'"));
        };
        if local.is_empty() {
            return Err(invalid("missing the part before '@'"));
        }
        if domain.contains('@') {
            return Err(invalid("more than one '@'"));
        }
        if local
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "{}\"'#\\".contains(c))
        {
            return Err(invalid("contains characters that are not allowed"));
        }
        if Hostname::parse(domain).is_err() || !domain.contains('.') {
            return Err(invalid("the domain part is not a valid hostname"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
