//! statstack - interactive setup and teardown for a self-hosted analytics stack
//!
//! The stack (Umami, Uptime Kuma, Grafana with Loki and Prometheus, an optional
//! OpenReplay sub-stack and a Caddy proxy) is described by bundled compose
//! manifests. statstack asks how the stack is reached, renders the env files,
//! overrides and proxy config, then drives `docker compose`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod render;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{DeploymentConfig, StackLayout};
pub use domain::value_objects::AccessMode;
pub use error::{StatstackError, StatstackResult};
