//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::layout::PROJECT_CONFIG;
use crate::error::{StatstackError, StatstackResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StatstackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (table, warnings) = parse_layer(path, &content)?;
    let config = into_config(path, table)?;
    Ok((config, warnings))
}

/// Merge user config, project config and `STATSTACK_*` variables, then validate.
///
/// `user_config` is usually [`user_config_path`]; a missing file is skipped.
pub fn load_layered(
    project_root: &Path,
    user_config: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> StatstackResult<LoadedConfig> {
    let project_config = project_root.join(PROJECT_CONFIG);
    let candidates = user_config
        .map(Path::to_path_buf)
        .into_iter()
        .chain(std::iter::once(project_config.clone()));

    let mut merged = toml::Table::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let (table, layer_warnings) = parse_layer(&path, &content)?;
        merge_tables(&mut merged, table);
        warnings.extend(layer_warnings);
        sources.push(path);
    }

    let origin = sources.last().cloned().unwrap_or(project_config);
    let config = with_env_overrides(into_config(&origin, merged)?, env);
    config.validate(&origin)?;

    Ok(LoadedConfig {
        config,
        sources,
        warnings,
    })
}

/// `$XDG_CONFIG_HOME/statstack/config.toml`, or `~/.config/statstack/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("statstack/config.toml"))
}

/// Apply environment variable overrides (STATSTACK_* prefix)
pub fn with_env_overrides(mut config: Config, env: impl Fn(&str) -> Option<String>) -> Config {
    let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(docker) = non_empty("STATSTACK_DOCKER") {
        config.engine.docker = docker;
    }
    if let Some(project) = non_empty("STATSTACK_PROJECT") {
        config.stack.project = project;
    }
    if let Some(tz) = non_empty("STATSTACK_TIMEZONE") {
        config.stack.timezone = tz;
    }
    if let Some(url) = non_empty("STATSTACK_IP_PROBE_URL") {
        config.network.ip_probe_url = url;
    }
    if let Some(retention) = non_empty("STATSTACK_LOG_RETENTION") {
        config.stack.log_retention = retention;
    }

    config
}

/// Parse one file into a table, reporting keys `Config` does not know
fn parse_layer(path: &Path, content: &str) -> StatstackResult<(toml::Table, Vec<ConfigWarning>)> {
    let invalid = |message: String| StatstackError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);
    let _: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(e.to_string()))?;

    let table: toml::Table = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((table, warnings))
}

fn into_config(origin: &Path, table: toml::Table) -> StatstackResult<Config> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| StatstackError::InvalidConfig {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })
}

/// Deep-merge `overlay` into `base`; tables merge key by key, anything else replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "stack",
        "project",
        "timezone",
        "log_retention",
        "grafana_admin_user",
        "postgres_user",
        "postgres_db",
        "ports",
        "umami",
        "uptime_kuma",
        "grafana",
        "openreplay",
        "network",
        "ip_probe_url",
        "probe_timeout_secs",
        "engine",
        "docker",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
