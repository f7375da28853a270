//! Service catalog
//!
//! The services the operator can reach from outside. Everything else in the
//! stack (Prometheus, Loki, Promtail, Postgres) stays on the internal network.

use serde::{Deserialize, Serialize};

/// A publicly reachable service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    Umami,
    UptimeKuma,
    Grafana,
    /// Session replay; only present when the sub-stack is enabled
    OpenReplay,
}

impl ServiceId {
    /// Services of the primary manifest, in prompt order
    pub const CORE: [ServiceId; 3] = [ServiceId::Umami, ServiceId::UptimeKuma, ServiceId::Grafana];

    /// Service name inside the compose manifest (also its DNS name on the network)
    pub fn compose_service(&self) -> &'static str {
        match self {
            Self::Umami => "umami",
            Self::UptimeKuma => "uptime-kuma",
            Self::Grafana => "grafana",
            Self::OpenReplay => "openreplay-frontend",
        }
    }

    /// Port the service listens on inside its container
    pub fn container_port(&self) -> u16 {
        match self {
            Self::Umami => 3000,
            Self::UptimeKuma => 3001,
            Self::Grafana => 3000,
            Self::OpenReplay => 8080,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Umami => "Umami (web analytics)",
            Self::UptimeKuma => "Uptime Kuma (status monitoring)",
            Self::Grafana => "Grafana (dashboards, logs, metrics)",
            Self::OpenReplay => "OpenReplay (session replay)",
        }
    }

    pub fn example_hostname(&self) -> &'static str {
        match self {
            Self::Umami => "analytics.example.com",
            Self::UptimeKuma => "status.example.com",
            Self::Grafana => "grafana.example.com",
            Self::OpenReplay => "replay.example.com",
        }
    }

    pub fn is_substack(&self) -> bool {
        matches!(self, Self::OpenReplay)
    }

    /// `service:port` as seen from the proxy
    pub fn upstream(&self) -> String {
        format!("{}:{}", self.compose_service(), self.container_port())
    }
}

/// A service together with the host port it is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposedService {
    pub id: ServiceId,
    pub host_port: u16,
}

impl ExposedService {
    pub fn new(id: ServiceId, host_port: u16) -> Self {
        Self { id, host_port }
    }
}
