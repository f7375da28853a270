//! Local interface address
//!
//! Connecting a UDP socket sends nothing, but makes the kernel pick the
//! interface it would route through; that interface's address is the answer.

use std::net::{IpAddr, SocketAddr, UdpSocket};

use crate::domain::ports::{AddressProbe, ProbeError};

/// Any routable address works; no packet leaves the host
const ROUTE_TARGET: &str = "192.0.2.1:53";

#[derive(Debug, Clone, Default)]
pub struct LocalInterfaceProbe;

impl LocalInterfaceProbe {
    pub fn new() -> Self {
        Self
    }
}

/// Loopback and unspecified addresses are useless to remote clients
pub fn usable(ip: IpAddr) -> Result<IpAddr, ProbeError> {
    if ip.is_loopback() || ip.is_unspecified() {
        return Err(ProbeError::Unusable(ip.to_string()));
    }
    Ok(ip)
}

impl AddressProbe for LocalInterfaceProbe {
    fn name(&self) -> &str {
        "local interface"
    }

    fn probe(&self) -> Result<IpAddr, ProbeError> {
        let socket = UdpSocket::bind("0.0.0.0:0").map_err(|e| ProbeError::Request(e.to_string()))?;
        socket
            .connect(ROUTE_TARGET)
            .map_err(|e| ProbeError::Request(e.to_string()))?;
        let local: SocketAddr = socket
            .local_addr()
            .map_err(|e| ProbeError::Request(e.to_string()))?;
        usable(local.ip())
    }
}
