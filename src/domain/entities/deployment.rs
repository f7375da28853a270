//! Deployment configuration
//!
//! Built once per `setup` run from validated answers and settings, then handed
//! to every renderer. Nothing downstream reads the environment or the terminal.

use std::collections::BTreeMap;

use crate::domain::entities::service::{ExposedService, ServiceId};
use crate::domain::services::secrets::{StackSecrets, SubstackSecrets};
use crate::domain::value_objects::{AccessMode, ContactEmail, HostAddress, Hostname};

/// Host ports per exposed service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePorts {
    pub umami: u16,
    pub uptime_kuma: u16,
    pub grafana: u16,
    pub openreplay: u16,
}

impl ServicePorts {
    pub fn port_for(&self, id: ServiceId) -> u16 {
        match id {
            ServiceId::Umami => self.umami,
            ServiceId::UptimeKuma => self.uptime_kuma,
            ServiceId::Grafana => self.grafana,
            ServiceId::OpenReplay => self.openreplay,
        }
    }
}

impl Default for ServicePorts {
    fn default() -> Self {
        Self {
            umami: 3000,
            uptime_kuma: 3001,
            grafana: 3002,
            openreplay: 3003,
        }
    }
}

/// Values that come from configuration rather than from prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSettings {
    /// Compose project name; also the prefix of every resource the stack creates
    pub project: String,
    pub timezone: String,
    /// Loki retention period, e.g. `744h`
    pub log_retention: String,
    pub grafana_admin_user: String,
    pub postgres_user: String,
    pub postgres_db: String,
    pub ports: ServicePorts,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            project: "statstack".to_string(),
            timezone: "UTC".to_string(),
            log_retention: "744h".to_string(),
            grafana_admin_user: "admin".to_string(),
            postgres_user: "umami".to_string(),
            postgres_db: "umami".to_string(),
            ports: ServicePorts::default(),
        }
    }
}

/// How the services are reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Domain {
        hostnames: BTreeMap<ServiceId, Hostname>,
        email: Option<ContactEmail>,
    },
    DirectAddress {
        address: HostAddress,
    },
    Tunnel,
}

impl Access {
    pub fn mode(&self) -> AccessMode {
        match self {
            Access::Domain { .. } => AccessMode::Domain,
            Access::DirectAddress { .. } => AccessMode::DirectAddress,
            Access::Tunnel => AccessMode::Tunnel,
        }
    }
}

/// Optional session-replay sub-stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstackConfig {
    pub secrets: SubstackSecrets,
}

/// Everything the renderers need, decided up front
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub settings: StackSettings,
    pub access: Access,
    pub substack: Option<SubstackConfig>,
    pub secrets: StackSecrets,
}

impl DeploymentConfig {
    pub fn new(
        settings: StackSettings,
        access: Access,
        substack: Option<SubstackConfig>,
        secrets: StackSecrets,
    ) -> Self {
        Self {
            settings,
            access,
            substack,
            secrets,
        }
    }

    pub fn mode(&self) -> AccessMode {
        self.access.mode()
    }

    pub fn project(&self) -> &str {
        &self.settings.project
    }

    pub fn substack_enabled(&self) -> bool {
        self.substack.is_some()
    }

    /// Exposed services in a stable order; OpenReplay last when enabled
    pub fn services(&self) -> Vec<ExposedService> {
        let mut ids: Vec<ServiceId> = ServiceId::CORE.to_vec();
        if self.substack_enabled() {
            ids.push(ServiceId::OpenReplay);
        }
        ids.into_iter()
            .map(|id| ExposedService::new(id, self.settings.ports.port_for(id)))
            .collect()
    }

    /// Where the operator opens each service once the stack is up
    pub fn public_url(&self, service: &ExposedService) -> Option<String> {
        match &self.access {
            Access::Domain { hostnames, .. } => hostnames
                .get(&service.id)
                .map(|host| format!("https://{}", host)),
            Access::DirectAddress { address } => Some(address.http_url(service.host_port)),
            Access::Tunnel => Some(format!("http://localhost:{}", service.host_port)),
        }
    }

    pub fn endpoints(&self) -> Vec<(ServiceId, String)> {
        self.services()
            .iter()
            .filter_map(|s| self.public_url(s).map(|url| (s.id, url)))
            .collect()
    }
}
