//! Domain Entities

pub mod deployment;
pub mod layout;
pub mod manifest;
pub mod service;

pub use deployment::{Access, DeploymentConfig, ServicePorts, StackSettings, SubstackConfig};
pub use layout::StackLayout;
pub use manifest::{ComposeManifest, ManifestResource, ManifestService};
pub use service::{ExposedService, ServiceId};
