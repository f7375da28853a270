//! Compose override files publishing host ports
//!
//! Direct-address mode publishes the proxy's listeners; tunnel mode binds each
//! service to loopback so only the local tunnel agent can reach it. Domain
//! mode needs neither.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{RenderError, Stamp};
use crate::domain::entities::{Access, DeploymentConfig, ServiceId};

const PROXY_SERVICE: &str = "caddy";
const LOOPBACK: &str = "127.0.0.1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortOverride {
    pub ports: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeOverride {
    pub services: BTreeMap<String, PortOverride>,
}

impl ComposeOverride {
    /// Override for the primary manifest
    pub fn primary(config: &DeploymentConfig) -> Option<Self> {
        let mut services = BTreeMap::new();
        match &config.access {
            Access::Domain { .. } => return None,
            Access::DirectAddress { .. } => {
                let ports = config
                    .services()
                    .iter()
                    .map(|s| format!("{0}:{0}", s.host_port))
                    .collect();
                services.insert(PROXY_SERVICE.to_string(), PortOverride { ports });
            }
            Access::Tunnel => {
                for service in config.services().iter().filter(|s| !s.id.is_substack()) {
                    services.insert(
                        service.id.compose_service().to_string(),
                        loopback(service.id, service.host_port),
                    );
                }
            }
        }
        Some(Self { services })
    }

    /// Override for the sub-stack manifest; tunnel mode only
    pub fn substack(config: &DeploymentConfig) -> Option<Self> {
        if !matches!(config.access, Access::Tunnel) || !config.substack_enabled() {
            return None;
        }
        let id = ServiceId::OpenReplay;
        let mut services = BTreeMap::new();
        services.insert(
            id.compose_service().to_string(),
            loopback(id, config.settings.ports.port_for(id)),
        );
        Some(Self { services })
    }

    pub fn ports_for(&self, service: &str) -> &[String] {
        self.services
            .get(service)
            .map(|s| s.ports.as_slice())
            .unwrap_or_default()
    }

    pub fn render(&self, stamp: &Stamp) -> Result<String, RenderError> {
        let body = serde_yaml_ng::to_string(self).map_err(|e| RenderError::Serialize {
            artifact: "compose override",
            message: e.to_string(),
        })?;
        Ok(format!("{}\n{}", stamp.header("#"), body))
    }
}

fn loopback(id: ServiceId, host_port: u16) -> PortOverride {
    PortOverride {
        ports: vec![format!("{}:{}:{}", LOOPBACK, host_port, id.container_port())],
    }
}
