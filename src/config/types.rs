//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ServicePorts, StackSettings};
use crate::error::{StatstackError, StatstackResult};

use super::loader::{self, ConfigWarning};

/// `[stack]`: compose project and values written to `.env`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub project: String,
    pub timezone: String,
    pub log_retention: String,
    pub grafana_admin_user: String,
    pub postgres_user: String,
    pub postgres_db: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        let settings = StackSettings::default();
        Self {
            project: settings.project,
            timezone: settings.timezone,
            log_retention: settings.log_retention,
            grafana_admin_user: settings.grafana_admin_user,
            postgres_user: settings.postgres_user,
            postgres_db: settings.postgres_db,
        }
    }
}

/// `[ports]`: host ports of the exposed services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortsConfig {
    pub umami: u16,
    pub uptime_kuma: u16,
    pub grafana: u16,
    pub openreplay: u16,
}

impl Default for PortsConfig {
    fn default() -> Self {
        let ports = ServicePorts::default();
        Self {
            umami: ports.umami,
            uptime_kuma: ports.uptime_kuma,
            grafana: ports.grafana,
            openreplay: ports.openreplay,
        }
    }
}

/// `[network]`: public address detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ip_probe_url: String,
    pub probe_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ip_probe_url: crate::infrastructure::network::DEFAULT_PROBE_URL.to_string(),
            probe_timeout_secs: crate::infrastructure::network::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// `[engine]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Container engine executable
    pub docker: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            docker: "docker".to_string(),
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub ports: PortsConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load a single TOML file
    pub fn load(path: &Path) -> StatstackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load a single TOML file and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StatstackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (STATSTACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Reject values the stack cannot run with; `source` names the origin in errors
    pub fn validate(&self, source: &Path) -> StatstackResult<()> {
        let invalid = |message: String| StatstackError::InvalidConfig {
            file: source.to_path_buf(),
            message,
        };

        if !is_valid_project_name(&self.stack.project) {
            return Err(invalid(format!(
                "stack.project '{}' must be lowercase letters, digits, '-' or '_', starting with a letter or digit",
                self.stack.project
            )));
        }

        if !is_valid_retention(&self.stack.log_retention) {
            return Err(invalid(format!(
                "stack.log_retention '{}' must be a number followed by s, m, h, d or w (e.g. 744h)",
                self.stack.log_retention
            )));
        }

        for (key, value) in [
            ("stack.timezone", &self.stack.timezone),
            ("stack.grafana_admin_user", &self.stack.grafana_admin_user),
            ("stack.postgres_user", &self.stack.postgres_user),
            ("stack.postgres_db", &self.stack.postgres_db),
        ] {
            if value.trim().is_empty() || value.contains(['\n', '\r']) {
                return Err(invalid(format!("{} must be a non-empty single line", key)));
            }
        }

        let ports = [
            ("ports.umami", self.ports.umami),
            ("ports.uptime_kuma", self.ports.uptime_kuma),
            ("ports.grafana", self.ports.grafana),
            ("ports.openreplay", self.ports.openreplay),
        ];
        for (i, (key, port)) in ports.iter().enumerate() {
            if *port == 0 {
                return Err(invalid(format!("{} must not be 0", key)));
            }
            if PROXY_PORTS.contains(port) {
                return Err(invalid(format!(
                    "{} uses port {}, which is reserved for the reverse proxy",
                    key, port
                )));
            }
            if let Some((other, _)) = ports[..i].iter().find(|(_, p)| p == port) {
                return Err(invalid(format!(
                    "{} and {} both use port {}",
                    other, key, port
                )));
            }
        }

        if self.engine.docker.trim().is_empty() {
            return Err(invalid("engine.docker must not be empty".to_string()));
        }
        if self.network.probe_timeout_secs == 0 {
            return Err(invalid("network.probe_timeout_secs must be at least 1".to_string()));
        }

        Ok(())
    }

    pub fn stack_settings(&self) -> StackSettings {
        StackSettings {
            project: self.stack.project.clone(),
            timezone: self.stack.timezone.clone(),
            log_retention: self.stack.log_retention.clone(),
            grafana_admin_user: self.stack.grafana_admin_user.clone(),
            postgres_user: self.stack.postgres_user.clone(),
            postgres_db: self.stack.postgres_db.clone(),
            ports: ServicePorts {
                umami: self.ports.umami,
                uptime_kuma: self.ports.uptime_kuma,
                grafana: self.ports.grafana,
                openreplay: self.ports.openreplay,
            },
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.network.probe_timeout_secs)
    }
}

/// Host ports Caddy publishes in domain and direct-address modes
const PROXY_PORTS: [u16; 2] = [80, 443];

/// Compose project names: lowercase alphanumerics, `-` and `_`, not starting with a separator
fn is_valid_project_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Loki durations as used for retention: digits then one unit
fn is_valid_retention(value: &str) -> bool {
    let Some(unit) = value.chars().last() else {
        return false;
    };
    let digits = &value[..value.len() - unit.len_utf8()];
    matches!(unit, 's' | 'm' | 'h' | 'd' | 'w')
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
}
