//! Compose manifest model
//!
//! Only the parts teardown needs to know which resources a manifest creates.
//! Everything else in the file is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root of a compose file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComposeManifest {
    #[serde(default)]
    pub services: BTreeMap<String, Option<ManifestService>>,

    #[serde(default)]
    pub volumes: BTreeMap<String, Option<ManifestResource>>,

    #[serde(default)]
    pub networks: BTreeMap<String, Option<ManifestResource>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestService {
    #[serde(default)]
    pub container_name: Option<String>,

    #[serde(default)]
    pub profiles: Vec<String>,
}

/// A top-level volume or network definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestResource {
    /// Explicit engine-level name, bypassing the project prefix
    #[serde(default)]
    pub name: Option<String>,

    /// Created outside this manifest; never removed on its behalf
    #[serde(default)]
    pub external: bool,
}

impl ComposeManifest {
    /// Container names the orchestrator assigns for `project`
    pub fn container_names(&self, project: &str) -> Vec<String> {
        self.services
            .iter()
            .map(|(service, def)| {
                def.as_ref()
                    .and_then(|d| d.container_name.clone())
                    .unwrap_or_else(|| format!("{}-{}-1", project, service))
            })
            .collect()
    }

    pub fn volume_names(&self, project: &str) -> Vec<String> {
        resource_names(&self.volumes, project)
    }

    /// Network names, including the implicit `<project>_default`
    pub fn network_names(&self, project: &str) -> Vec<String> {
        let mut names = resource_names(&self.networks, project);
        let default = format!("{}_default", project);
        if !names.contains(&default) {
            names.push(default);
        }
        names
    }
}

fn resource_names(defs: &BTreeMap<String, Option<ManifestResource>>, project: &str) -> Vec<String> {
    defs.iter()
        .filter(|(_, def)| !def.as_ref().is_some_and(|d| d.external))
        .map(|(key, def)| {
            def.as_ref()
                .and_then(|d| d.name.clone())
                .unwrap_or_else(|| format!("{}_{}", project, key))
        })
        .collect()
}
