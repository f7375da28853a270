//! Artifact rendering
//!
//! Typed models for every generated file, each with its own writer. The whole
//! set is rendered in memory before anything touches the disk.

mod caddyfile;
mod compose_override;
mod env_file;
mod provisioning;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::domain::entities::layout::{
    CADDYFILE, ENV_FILE, GENERATED_FILES, GRAFANA_DASHBOARD_PROVIDER, GRAFANA_DATASOURCES,
    GRAFANA_OVERVIEW_DASHBOARD, PRIMARY_OVERRIDE, PROMETHEUS_CONFIG, SUBSTACK_ENV_FILE,
    SUBSTACK_OVERRIDE,
};
use crate::domain::entities::DeploymentConfig;

pub use caddyfile::{Caddyfile, SiteBlock, Tls};
pub use compose_override::{ComposeOverride, PortOverride};
pub use env_file::{quote_value, stack_env, substack_env, EnvFile};
pub use provisioning::{dashboard_provider, datasources, overview_dashboard, prometheus_config};

/// Marker carried by every generated file; teardown only deletes files that have it
pub const GENERATED_MARKER: &str = "Generated by statstack";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid environment key '{key}': keys must match [A-Z_][A-Z0-9_]*")]
    InvalidEnvKey { key: String },

    #[error("value for '{key}' contains a line break")]
    MultilineValue { key: String },

    #[error("failed to serialize {artifact}: {message}")]
    Serialize {
        artifact: &'static str,
        message: String,
    },
}

/// True when `content` was produced by statstack
pub fn has_marker(content: &str) -> bool {
    content.contains(GENERATED_MARKER)
}

/// Generation time written into file headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(DateTime<Utc>);

impl Stamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        Self(time)
    }

    /// Header comment using `prefix` as the comment leader
    pub fn header(&self, prefix: &str) -> String {
        format!(
            "{prefix} {GENERATED_MARKER} at {}. DO NOT EDIT.\n{prefix} Re-run `statstack setup` to regenerate.\n",
            self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    pub fn description(&self) -> String {
        format!(
            "{GENERATED_MARKER} at {}",
            self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

/// One rendered file, relative to the stack root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: &'static str,
    pub content: String,
    /// Holds credentials; written with owner-only permissions
    pub private: bool,
}

impl Artifact {
    fn public(path: &'static str, content: String) -> Self {
        Self {
            path,
            content,
            private: false,
        }
    }

    fn private(path: &'static str, content: String) -> Self {
        Self {
            path,
            content,
            private: true,
        }
    }
}

/// Everything one setup run writes, plus the generated files it no longer produces
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub files: Vec<Artifact>,
    pub stale: Vec<&'static str>,
}

impl ArtifactSet {
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.files.iter().find(|a| a.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }
}

/// Render every artifact the configuration calls for
pub fn render_all(config: &DeploymentConfig, stamp: &Stamp) -> Result<ArtifactSet, RenderError> {
    let mut files = vec![Artifact::private(
        ENV_FILE,
        stack_env(config)?.render(&stamp.header("#")),
    )];

    if let Some(env) = substack_env(config)? {
        files.push(Artifact::private(
            SUBSTACK_ENV_FILE,
            env.render(&stamp.header("#")),
        ));
    }

    if let Some(caddyfile) = Caddyfile::for_config(config) {
        files.push(Artifact::public(CADDYFILE, caddyfile.render(stamp)));
    }

    if let Some(ports) = ComposeOverride::primary(config) {
        files.push(Artifact::public(PRIMARY_OVERRIDE, ports.render(stamp)?));
    }
    if let Some(ports) = ComposeOverride::substack(config) {
        files.push(Artifact::public(SUBSTACK_OVERRIDE, ports.render(stamp)?));
    }

    files.push(Artifact::public(GRAFANA_DATASOURCES, datasources(stamp)?));
    files.push(Artifact::public(
        GRAFANA_DASHBOARD_PROVIDER,
        dashboard_provider(stamp)?,
    ));
    files.push(Artifact::public(
        GRAFANA_OVERVIEW_DASHBOARD,
        overview_dashboard(config, stamp)?,
    ));
    files.push(Artifact::public(
        PROMETHEUS_CONFIG,
        prometheus_config(config, stamp)?,
    ));

    let stale = GENERATED_FILES
        .iter()
        .copied()
        .filter(|path| !files.iter().any(|a| a.path == *path))
        .collect();

    Ok(ArtifactSet { files, stale })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::entities::{Access, ServiceId, StackSettings, SubstackConfig};
    use crate::domain::services::{generate_stack_secrets, generate_substack_secrets};
    use crate::domain::value_objects::{ContactEmail, HostAddress, Hostname};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    pub(crate) fn stamp() -> Stamp {
        Stamp::at(Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap())
    }

    pub(crate) fn domain_access(substack: bool) -> Access {
        let mut hostnames = BTreeMap::new();
        hostnames.insert(ServiceId::Umami, Hostname::parse("analytics.example.com").unwrap());
        hostnames.insert(ServiceId::UptimeKuma, Hostname::parse("status.example.com").unwrap());
        hostnames.insert(ServiceId::Grafana, Hostname::parse("grafana.example.com").unwrap());
        if substack {
            hostnames.insert(ServiceId::OpenReplay, Hostname::parse("replay.example.com").unwrap());
        }
        Access::Domain {
            hostnames,
            email: Some(ContactEmail::parse("ops@example.com").unwrap()),
        }
    }

    pub(crate) fn direct_access() -> Access {
        Access::DirectAddress {
            address: "203.0.113.7".parse::<HostAddress>().unwrap(),
        }
    }

    pub(crate) fn config(access: Access, substack: bool) -> DeploymentConfig {
        DeploymentConfig::new(
            StackSettings::default(),
            access,
            substack.then(|| SubstackConfig {
                secrets: generate_substack_secrets(),
            }),
            generate_stack_secrets(),
        )
    }

    fn paths(set: &ArtifactSet) -> Vec<&'static str> {
        set.files.iter().map(|a| a.path).collect()
    }

    #[test]
    fn domain_mode_renders_proxy_but_no_override() {
        let set = render_all(&config(domain_access(false), false), &stamp()).unwrap();
        assert!(set.contains(CADDYFILE));
        assert!(!set.contains(PRIMARY_OVERRIDE));
        assert!(set.stale.contains(&PRIMARY_OVERRIDE));
        assert!(set.stale.contains(&SUBSTACK_ENV_FILE));
    }

    #[test]
    fn direct_mode_renders_proxy_and_override() {
        let set = render_all(&config(direct_access(), false), &stamp()).unwrap();
        assert!(set.contains(CADDYFILE));
        assert!(set.contains(PRIMARY_OVERRIDE));
        assert!(!set.contains(SUBSTACK_OVERRIDE));
    }

    #[test]
    fn tunnel_mode_skips_proxy() {
        let set = render_all(&config(Access::Tunnel, true), &stamp()).unwrap();
        assert!(!set.contains(CADDYFILE));
        assert!(set.stale.contains(&CADDYFILE));
        assert!(set.contains(PRIMARY_OVERRIDE));
        assert!(set.contains(SUBSTACK_OVERRIDE));
        assert!(set.contains(SUBSTACK_ENV_FILE));
    }

    #[test]
    fn every_artifact_carries_the_marker() {
        for access in [domain_access(true), direct_access(), Access::Tunnel] {
            let set = render_all(&config(access, true), &stamp()).unwrap();
            for artifact in &set.files {
                assert!(has_marker(&artifact.content), "{} lacks marker", artifact.path);
            }
        }
    }

    #[test]
    fn only_env_files_are_private() {
        let set = render_all(&config(Access::Tunnel, true), &stamp()).unwrap();
        let private: Vec<_> = set.files.iter().filter(|a| a.private).map(|a| a.path).collect();
        assert_eq!(private, vec![ENV_FILE, SUBSTACK_ENV_FILE]);
    }

    #[test]
    fn written_and_stale_partition_generated_files() {
        let set = render_all(&config(direct_access(), false), &stamp()).unwrap();
        let mut all: Vec<_> = paths(&set);
        all.extend(set.stale.iter().copied());
        all.sort_unstable();
        let mut expected = GENERATED_FILES.to_vec();
        expected.sort_unstable();
        assert_eq!(all, expected);
    }

    #[test]
    fn header_is_stable_for_a_fixed_stamp() {
        assert_eq!(
            stamp().header("#"),
            "# Generated by statstack at 2026-10-16T09:30:00Z. DO NOT EDIT.\n# Re-run `statstack setup` to regenerate.\n"
        );
    }
}
