//! Setup result types

use std::path::PathBuf;

use crate::domain::entities::{DeploymentConfig, ServiceId};

/// Result of a setup run
#[derive(Debug, Clone)]
pub struct SetupResult {
    /// Configuration the artifacts were rendered from
    pub config: DeploymentConfig,
    /// Bundled manifests written because they were missing
    pub bundled: Vec<PathBuf>,
    /// Artifacts written this run
    pub written: Vec<PathBuf>,
    /// Generated files from an earlier run in another mode, now removed
    pub removed_stale: Vec<PathBuf>,
    /// Files with a generated name that statstack did not write; left alone
    pub kept: Vec<PathBuf>,
    /// Number of orchestrator `up` invocations
    pub stacks_started: usize,
}

impl SetupResult {
    /// Where each service can be opened
    pub fn endpoints(&self) -> Vec<(ServiceId, String)> {
        self.config.endpoints()
    }
}
