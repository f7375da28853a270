//! Environment files consumed by the orchestrator
//!
//! Values are quoted so the orchestrator reads them back verbatim: plain
//! tokens stay bare, everything else is single-quoted (no interpolation) or,
//! when it contains a single quote, double-quoted with `\`, `"` and `$` escaped.

use std::borrow::Cow;

use super::RenderError;
use crate::domain::entities::{Access, DeploymentConfig, ExposedService, ServiceId};

/// Ordered key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, keeping its original position when it already exists
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), RenderError> {
        let value = value.into();
        if !is_valid_key(key) {
            return Err(RenderError::InvalidEnvKey {
                key: key.to_string(),
            });
        }
        if value.contains(['\n', '\r']) {
            return Err(RenderError::MultilineValue {
                key: key.to_string(),
            });
        }

        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `header` is emitted verbatim before the entries
    pub fn render(&self, header: &str) -> String {
        let mut out = String::from(header);
        if !header.is_empty() {
            out.push('\n');
        }
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(&quote_value(value));
            out.push('\n');
        }
        out
    }
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn is_plain(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_-.:/@+,=".contains(c))
}

/// Quote a value for an env file
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if is_plain(value) {
        return Cow::Borrowed(value);
    }
    if !value.contains('\'') {
        return Cow::Owned(format!("'{}'", value));
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("$$"),
            c => out.push(c),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// `.env` for the primary manifest
pub fn stack_env(config: &DeploymentConfig) -> Result<EnvFile, RenderError> {
    let settings = &config.settings;
    let secrets = &config.secrets;

    let mut env = EnvFile::new();
    env.set("TZ", settings.timezone.as_str())?;
    env.set("GRAFANA_ADMIN_USER", settings.grafana_admin_user.as_str())?;
    env.set(
        "GRAFANA_ADMIN_PASSWORD",
        secrets.grafana_admin_password.expose(),
    )?;
    env.set("UMAMI_APP_SECRET", secrets.umami_app_secret.expose())?;
    env.set("POSTGRES_USER", settings.postgres_user.as_str())?;
    env.set("POSTGRES_PASSWORD", secrets.postgres_password.expose())?;
    env.set("POSTGRES_DB", settings.postgres_db.as_str())?;
    env.set("UMAMI_PORT", settings.ports.umami.to_string())?;
    env.set("LOKI_RETENTION_PERIOD", settings.log_retention.as_str())?;
    env.set("STATSTACK_ACCESS_MODE", config.mode().as_str())?;
    Ok(env)
}

/// `openreplay.env`, present only when the sub-stack is enabled
pub fn substack_env(config: &DeploymentConfig) -> Result<Option<EnvFile>, RenderError> {
    let Some(substack) = &config.substack else {
        return Ok(None);
    };
    let secrets = &substack.secrets;
    let port = config.settings.ports.openreplay;

    let domain = match &config.access {
        Access::Domain { hostnames, .. } => hostnames
            .get(&ServiceId::OpenReplay)
            .map(|h| h.to_string())
            .unwrap_or_else(|| "localhost".to_string()),
        Access::DirectAddress { address } => address.url_host(),
        Access::Tunnel => "localhost".to_string(),
    };
    let site_url = config
        .public_url(&ExposedService::new(ServiceId::OpenReplay, port))
        .unwrap_or_else(|| format!("http://{}:{}", domain, port));

    let mut env = EnvFile::new();
    env.set("OPENREPLAY_DOMAIN", domain)?;
    env.set("OPENREPLAY_PORT", port.to_string())?;
    // Host-side publishing restricts access; the container always listens on every interface.
    env.set("OPENREPLAY_BIND", "0.0.0.0")?;
    env.set("OPENREPLAY_SITE_URL", site_url)?;
    env.set("OPENREPLAY_JWT_SECRET", secrets.jwt_secret.expose())?;
    env.set(
        "OPENREPLAY_POSTGRES_PASSWORD",
        secrets.postgres_password.expose(),
    )?;
    env.set(
        "OPENREPLAY_MINIO_ACCESS_KEY",
        secrets.minio_access_key.expose(),
    )?;
    env.set(
        "OPENREPLAY_MINIO_SECRET_KEY",
        secrets.minio_secret_key.expose(),
    )?;
    env.set("TZ", config.settings.timezone.as_str())?;
    Ok(Some(env))
}
