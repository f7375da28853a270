//! Host address detection
//!
//! Probes are tried in order. Each failure is reported as a warning and the
//! next probe runs; when none succeed the placeholder `localhost` is used.

use crate::domain::ports::{AddressProbe, StatusSink};
use crate::domain::value_objects::HostAddress;

pub fn detect_host_address(probes: &[&dyn AddressProbe], sink: &dyn StatusSink) -> HostAddress {
    for probe in probes {
        match probe.probe() {
            Ok(ip) => {
                sink.info(&format!("Detected address {} ({})", ip, probe.name()));
                return HostAddress::Ip(ip);
            }
            Err(e) => sink.warn(&format!("Address lookup via {} failed: {}", probe.name(), e)),
        }
    }

    let fallback = HostAddress::localhost();
    sink.warn(&format!(
        "Could not detect this host's address; using '{}'. Clients on other machines will not reach the services.",
        fallback
    ));
    fallback
}
