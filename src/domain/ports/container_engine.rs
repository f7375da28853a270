//! ContainerEngine port - abstraction over the container engine and orchestrator
//!
//! Every interaction with `docker` / `docker compose` goes through this trait,
//! so use cases can be exercised against a recording fake.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Container engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required executable is not installed or not on PATH
    #[error("required dependency '{name}' was not found. {hint}")]
    MissingDependency { name: String, hint: String },

    /// The process could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and reported failure
    #[error("`{command}` failed{}{}", .code.map(|c| format!(" with exit code {}", c)).unwrap_or_default(), if .stderr.is_empty() { String::new() } else { format!(": {}", .stderr) })]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Kinds of engine resources a teardown deals with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Container,
    Volume,
    Network,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Container,
        ResourceKind::Volume,
        ResourceKind::Network,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Volume => "volume",
            Self::Network => "network",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine-level caches cleared at the end of a teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneTarget {
    Images,
    Networks,
    Volumes,
    BuildCache,
}

impl PruneTarget {
    pub const ALL: [PruneTarget; 4] = [
        PruneTarget::Images,
        PruneTarget::Networks,
        PruneTarget::Volumes,
        PruneTarget::BuildCache,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Images => "dangling images",
            Self::Networks => "unused networks",
            Self::Volumes => "unused volumes",
            Self::BuildCache => "build cache",
        }
    }
}

/// One orchestrator invocation: which manifests, which env file, which profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeInvocation {
    pub project: String,
    pub manifests: Vec<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub profiles: Vec<String>,
}

impl ComposeInvocation {
    pub fn new(project: impl Into<String>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            manifests: vec![manifest.into()],
            env_file: None,
            profiles: Vec::new(),
        }
    }

    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifests.push(manifest.into());
        self
    }

    pub fn with_env_file(mut self, env_file: impl Into<PathBuf>) -> Self {
        self.env_file = Some(env_file.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profiles.push(profile.into());
        self
    }

    /// The manifest the invocation is anchored on
    pub fn primary_manifest(&self) -> Option<&PathBuf> {
        self.manifests.first()
    }

    /// Orchestrator arguments shared by every compose verb
    pub fn base_args(&self) -> Vec<String> {
        let mut args = vec!["-p".to_string(), self.project.clone()];
        for manifest in &self.manifests {
            args.push("-f".to_string());
            args.push(manifest.display().to_string());
        }
        if let Some(env_file) = &self.env_file {
            args.push("--env-file".to_string());
            args.push(env_file.display().to_string());
        }
        for profile in &self.profiles {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }
}

/// Abstract container engine + orchestrator
///
/// Implementations:
/// - `DockerCli` - shells out to `docker` / `docker compose`
/// - a recording fake in the application tests
pub trait ContainerEngine {
    /// Verify the engine and the orchestrator are installed.
    ///
    /// Returns `EngineError::MissingDependency` when either is absent.
    fn preflight(&self) -> EngineResult<()>;

    /// Bring services up in the background
    fn compose_up(&self, invocation: &ComposeInvocation) -> EngineResult<()>;

    /// Stop and remove services.
    ///
    /// With `purge`, named volumes and orphaned containers are removed too.
    fn compose_down(&self, invocation: &ComposeInvocation, purge: bool) -> EngineResult<()>;

    /// Human-readable service status table
    fn compose_ps(&self, invocation: &ComposeInvocation) -> EngineResult<String>;

    /// Names of all resources of a kind known to the engine
    fn list(&self, kind: ResourceKind) -> EngineResult<Vec<String>>;

    /// Stop a running container
    fn stop_container(&self, name: &str) -> EngineResult<()>;

    /// Force-remove a resource
    fn remove(&self, kind: ResourceKind, name: &str) -> EngineResult<()>;

    /// Clear an engine-level cache
    fn prune(&self, target: PruneTarget) -> EngineResult<()>;
}
