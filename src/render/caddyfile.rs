//! Reverse-proxy configuration

use crate::domain::entities::{Access, DeploymentConfig};
use crate::domain::value_objects::ContactEmail;

use super::Stamp;

/// Certificate handling for the whole proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tls {
    /// ACME issuance, optionally registering a contact email
    Automatic { email: Option<ContactEmail> },
    /// Plain HTTP only
    Disabled,
}

/// One public address forwarded to one internal upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBlock {
    pub address: String,
    pub upstream: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caddyfile {
    pub tls: Tls,
    pub sites: Vec<SiteBlock>,
}

impl Caddyfile {
    /// The proxy configuration for `config`; `None` in tunnel mode
    pub fn for_config(config: &DeploymentConfig) -> Option<Self> {
        match &config.access {
            Access::Domain { hostnames, email } => Some(Self {
                tls: Tls::Automatic {
                    email: email.clone(),
                },
                sites: config
                    .services()
                    .iter()
                    .filter_map(|service| {
                        hostnames.get(&service.id).map(|host| SiteBlock {
                            address: host.to_string(),
                            upstream: service.id.upstream(),
                        })
                    })
                    .collect(),
            }),
            Access::DirectAddress { address } => Some(Self {
                tls: Tls::Disabled,
                sites: config
                    .services()
                    .iter()
                    .map(|service| SiteBlock {
                        address: address.http_url(service.host_port),
                        upstream: service.id.upstream(),
                    })
                    .collect(),
            }),
            Access::Tunnel => None,
        }
    }

    pub fn render(&self, stamp: &Stamp) -> String {
        let mut out = stamp.header("#");
        out.push_str("\n{\n");
        match &self.tls {
            Tls::Automatic { email: Some(email) } => {
                out.push_str(&format!("\temail {}\n", email));
            }
            Tls::Automatic { email: None } => {}
            Tls::Disabled => out.push_str("\tauto_https off\n"),
        }
        // Metrics endpoint for Prometheus on the internal network
        out.push_str("\tadmin :2019\n\tservers {\n\t\tmetrics\n\t}\n}\n");

        for site in &self.sites {
            out.push_str(&format!(
                "\n{} {{\n\tencode gzip\n\treverse_proxy {}\n}}\n",
                site.address, site.upstream
            ));
        }
        out
    }
}
