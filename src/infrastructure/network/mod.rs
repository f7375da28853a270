//! Host address probes

mod http_probe;
mod local_probe;

pub use http_probe::{parse_answer, HttpIpProbe, DEFAULT_PROBE_URL, DEFAULT_TIMEOUT};
pub use local_probe::LocalInterfaceProbe;
