//! Stack file layout
//!
//! Every path statstack reads or writes, relative to the working directory.

use std::path::{Path, PathBuf};

pub const PRIMARY_MANIFEST: &str = "docker-compose.yml";
pub const SUBSTACK_MANIFEST: &str = "docker-compose.openreplay.yml";
pub const ENV_FILE: &str = ".env";
pub const SUBSTACK_ENV_FILE: &str = "openreplay.env";
pub const CADDYFILE: &str = "Caddyfile";
pub const PRIMARY_OVERRIDE: &str = "docker-compose.override.yml";
pub const SUBSTACK_OVERRIDE: &str = "docker-compose.openreplay.override.yml";
pub const GRAFANA_DATASOURCES: &str = "grafana/provisioning/datasources/statstack.yml";
pub const GRAFANA_DASHBOARD_PROVIDER: &str = "grafana/provisioning/dashboards/statstack.yml";
pub const GRAFANA_OVERVIEW_DASHBOARD: &str = "grafana/dashboards/stack-overview.json";
pub const PROMETHEUS_CONFIG: &str = "prometheus/prometheus.yml";
pub const LOCK_FILE: &str = ".statstack.lock";
pub const PROJECT_CONFIG: &str = "statstack.toml";

/// Files produced by `setup` and removed by `teardown`
pub const GENERATED_FILES: [&str; 9] = [
    ENV_FILE,
    SUBSTACK_ENV_FILE,
    CADDYFILE,
    PRIMARY_OVERRIDE,
    SUBSTACK_OVERRIDE,
    GRAFANA_DATASOURCES,
    GRAFANA_DASHBOARD_PROVIDER,
    GRAFANA_OVERVIEW_DASHBOARD,
    PROMETHEUS_CONFIG,
];

/// Compose profile that contains the Caddy service
pub const PROXY_PROFILE: &str = "proxy";

/// Compose project of the sub-stack, so neither project sees the other's
/// containers as orphans
pub fn substack_project(project: &str) -> String {
    format!("{}-openreplay", project)
}

/// Paths of one stack checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLayout {
    root: PathBuf,
}

impl StackLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn primary_manifest(&self) -> PathBuf {
        self.path(PRIMARY_MANIFEST)
    }

    pub fn substack_manifest(&self) -> PathBuf {
        self.path(SUBSTACK_MANIFEST)
    }

    pub fn env_file(&self) -> PathBuf {
        self.path(ENV_FILE)
    }

    pub fn substack_env_file(&self) -> PathBuf {
        self.path(SUBSTACK_ENV_FILE)
    }

    pub fn primary_override(&self) -> PathBuf {
        self.path(PRIMARY_OVERRIDE)
    }

    pub fn substack_override(&self) -> PathBuf {
        self.path(SUBSTACK_OVERRIDE)
    }

    pub fn lock_file(&self) -> PathBuf {
        self.path(LOCK_FILE)
    }

    pub fn generated_files(&self) -> Vec<PathBuf> {
        GENERATED_FILES.iter().map(|f| self.path(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_joined_to_root() {
        let layout = StackLayout::new("/srv/stack");
        assert_eq!(layout.env_file(), PathBuf::from("/srv/stack/.env"));
        assert_eq!(
            layout.substack_manifest(),
            PathBuf::from("/srv/stack/docker-compose.openreplay.yml")
        );
    }

    #[test]
    fn substack_project_shares_the_prefix() {
        assert_eq!(substack_project("statstack"), "statstack-openreplay");
    }

    #[test]
    fn generated_files_never_include_manifests() {
        assert!(!GENERATED_FILES.contains(&PRIMARY_MANIFEST));
        assert!(!GENERATED_FILES.contains(&SUBSTACK_MANIFEST));
    }
}
