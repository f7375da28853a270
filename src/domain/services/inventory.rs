//! Resource inventory for teardown
//!
//! The set of engine resources the stack owns, derived from the manifests
//! plus a prefix sweep for anything the orchestrator created on its own.

use std::collections::BTreeSet;

use crate::domain::entities::ComposeManifest;
use crate::domain::ports::ResourceKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceInventory {
    project: String,
    containers: BTreeSet<String>,
    volumes: BTreeSet<String>,
    networks: BTreeSet<String>,
}

impl ResourceInventory {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Add the resources `manifest` creates when run as compose project `project`
    pub fn add_manifest(&mut self, project: &str, manifest: &ComposeManifest) {
        self.containers.extend(manifest.container_names(project));
        self.volumes.extend(manifest.volume_names(project));
        self.networks.extend(manifest.network_names(project));
    }

    /// True when `name` belongs to the stack: declared, or carrying the project prefix
    pub fn matches(&self, kind: ResourceKind, name: &str) -> bool {
        self.set(kind).contains(name) || self.has_project_prefix(name)
    }

    /// Names from `present` that belong to the stack, preserving order
    pub fn select<'a>(&self, kind: ResourceKind, present: &'a [String]) -> Vec<&'a str> {
        present
            .iter()
            .map(String::as_str)
            .filter(|name| self.matches(kind, name))
            .collect()
    }

    fn has_project_prefix(&self, name: &str) -> bool {
        if self.project.is_empty() {
            return false;
        }
        name.strip_prefix(self.project.as_str())
            .is_some_and(|rest| rest.len() > 1 && (rest.starts_with('_') || rest.starts_with('-')))
    }

    fn set(&self, kind: ResourceKind) -> &BTreeSet<String> {
        match kind {
            ResourceKind::Container => &self.containers,
            ResourceKind::Volume => &self.volumes,
            ResourceKind::Network => &self.networks,
        }
    }
}
