//! Grafana and Prometheus provisioning
//!
//! Grafana reads these at startup; Prometheus reads its scrape list. Both
//! files are regenerated every run so they always match the access mode.

use serde::Serialize;
use serde_json::json;

use super::{RenderError, Stamp};
use crate::domain::entities::DeploymentConfig;

const DASHBOARD_DIR: &str = "/var/lib/grafana/dashboards";
const DASHBOARD_FOLDER: &str = "Statstack";
const PROMETHEUS_URL: &str = "http://prometheus:9090";
const LOKI_URL: &str = "http://loki:3100";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Datasource {
    name: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    uid: &'static str,
    access: &'static str,
    url: &'static str,
    is_default: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasourceFile {
    api_version: u8,
    datasources: Vec<Datasource>,
}

#[derive(Debug, Serialize)]
struct ProviderOptions {
    path: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardProvider {
    name: &'static str,
    folder: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    disable_deletion: bool,
    allow_ui_updates: bool,
    options: ProviderOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderFile {
    api_version: u8,
    providers: Vec<DashboardProvider>,
}

#[derive(Debug, Serialize)]
struct GlobalSettings {
    scrape_interval: &'static str,
    evaluation_interval: &'static str,
}

#[derive(Debug, Serialize)]
struct StaticConfig {
    targets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ScrapeConfig {
    job_name: &'static str,
    static_configs: Vec<StaticConfig>,
}

#[derive(Debug, Serialize)]
struct PrometheusFile {
    global: GlobalSettings,
    scrape_configs: Vec<ScrapeConfig>,
}

fn yaml<T: Serialize>(artifact: &'static str, value: &T, stamp: &Stamp) -> Result<String, RenderError> {
    let body = serde_yaml_ng::to_string(value).map_err(|e| RenderError::Serialize {
        artifact,
        message: e.to_string(),
    })?;
    Ok(format!("{}\n{}", stamp.header("#"), body))
}

/// Prometheus (default) and Loki datasources
pub fn datasources(stamp: &Stamp) -> Result<String, RenderError> {
    let file = DatasourceFile {
        api_version: 1,
        datasources: vec![
            Datasource {
                name: "Prometheus",
                kind: "prometheus",
                uid: "statstack-prometheus",
                access: "proxy",
                url: PROMETHEUS_URL,
                is_default: true,
            },
            Datasource {
                name: "Loki",
                kind: "loki",
                uid: "statstack-loki",
                access: "proxy",
                url: LOKI_URL,
                is_default: false,
            },
        ],
    };
    yaml("grafana datasources", &file, stamp)
}

pub fn dashboard_provider(stamp: &Stamp) -> Result<String, RenderError> {
    let file = ProviderFile {
        api_version: 1,
        providers: vec![DashboardProvider {
            name: "statstack",
            folder: DASHBOARD_FOLDER,
            kind: "file",
            disable_deletion: false,
            allow_ui_updates: true,
            options: ProviderOptions {
                path: DASHBOARD_DIR,
            },
        }],
    };
    yaml("grafana dashboard provider", &file, stamp)
}

/// Scrape jobs; the proxy is scraped only when it runs
pub fn prometheus_config(config: &DeploymentConfig, stamp: &Stamp) -> Result<String, RenderError> {
    let mut jobs = vec![
        ("prometheus", "prometheus:9090"),
        ("loki", "loki:3100"),
        ("promtail", "promtail:9080"),
        ("grafana", "grafana:3000"),
    ];
    if config.mode().uses_proxy() {
        jobs.push(("caddy", "caddy:2019"));
    }

    let file = PrometheusFile {
        global: GlobalSettings {
            scrape_interval: "15s",
            evaluation_interval: "15s",
        },
        scrape_configs: jobs
            .into_iter()
            .map(|(job_name, target)| ScrapeConfig {
                job_name,
                static_configs: vec![StaticConfig {
                    targets: vec![target.to_string()],
                }],
            })
            .collect(),
    };
    yaml("prometheus config", &file, stamp)
}

/// Overview dashboard: scrape health, log volume per container, recent logs
pub fn overview_dashboard(config: &DeploymentConfig, stamp: &Stamp) -> Result<String, RenderError> {
    let prometheus = json!({ "type": "prometheus", "uid": "statstack-prometheus" });
    let loki = json!({ "type": "loki", "uid": "statstack-loki" });

    let dashboard = json!({
        "uid": "statstack-overview",
        "title": "Stack overview",
        "description": stamp.description(),
        "tags": ["statstack", config.mode().as_str()],
        "timezone": "browser",
        "schemaVersion": 39,
        "version": 1,
        "refresh": "30s",
        "time": { "from": "now-6h", "to": "now" },
        "panels": [
            {
                "id": 1,
                "type": "stat",
                "title": "Scrape targets up",
                "datasource": prometheus,
                "gridPos": { "h": 6, "w": 8, "x": 0, "y": 0 },
                "targets": [{ "refId": "A", "expr": "sum(up)", "datasource": prometheus }]
            },
            {
                "id": 2,
                "type": "timeseries",
                "title": "Target health",
                "datasource": prometheus,
                "gridPos": { "h": 6, "w": 16, "x": 8, "y": 0 },
                "targets": [{
                    "refId": "A",
                    "expr": "up",
                    "legendFormat": "{{job}}",
                    "datasource": prometheus
                }]
            },
            {
                "id": 3,
                "type": "timeseries",
                "title": "Log lines per container",
                "datasource": loki,
                "gridPos": { "h": 8, "w": 24, "x": 0, "y": 6 },
                "targets": [{
                    "refId": "A",
                    "expr": "sum by (container) (count_over_time({job=\"docker\"}[5m]))",
                    "legendFormat": "{{container}}",
                    "datasource": loki
                }]
            },
            {
                "id": 4,
                "type": "logs",
                "title": "Recent logs",
                "datasource": loki,
                "gridPos": { "h": 12, "w": 24, "x": 0, "y": 14 },
                "targets": [{ "refId": "A", "expr": "{job=\"docker\"}", "datasource": loki }]
            }
        ]
    });

    serde_json::to_string_pretty(&dashboard)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| RenderError::Serialize {
            artifact: "overview dashboard",
            message: e.to_string(),
        })
}
