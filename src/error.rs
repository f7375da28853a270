//! Error types for statstack
//!
//! Library errors use `thiserror`; command handlers wrap them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{EngineError, PromptError};
use crate::render::RenderError;

/// Result type alias for statstack operations
pub type StatstackResult<T> = Result<T, StatstackError>;

/// Main error type for statstack operations
#[derive(Error, Debug)]
pub enum StatstackError {
    /// Configuration file could not be used
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Compose manifest could not be parsed
    #[error("invalid compose manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Another invocation holds the working-directory lock
    #[error("another statstack run is in progress (lock held on {path})")]
    Locked { path: PathBuf },

    /// Container engine / orchestrator failure (includes missing dependencies)
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Artifact rendering failure
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Interactive input failure
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatstackError {
    /// True when the error is a missing external executable (pre-flight failure).
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, StatstackError::Engine(EngineError::MissingDependency { .. }))
    }
}
