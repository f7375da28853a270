//! AddressProbe port - discovery of the host's reachable address

use std::net::IpAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected answer '{0}'")]
    Unparseable(String),

    #[error("no usable address: {0}")]
    Unusable(String),
}

/// One strategy for finding the address clients should use
pub trait AddressProbe {
    /// Short name shown in warnings
    fn name(&self) -> &str;

    fn probe(&self) -> Result<IpAddr, ProbeError>;
}
