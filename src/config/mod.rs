//! Configuration module for statstack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STATSTACK_*)
//! 3. Project config (statstack.toml in the stack directory)
//! 4. User config (~/.config/statstack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_layered, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, EngineConfig, NetworkConfig, OutputConfig, PortsConfig, StackConfig};
