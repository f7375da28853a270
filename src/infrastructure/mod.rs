//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `engine/` - Container engine (Docker CLI)
//! - `fs/` - Local file system
//! - `manifest/` - Bundled compose manifests and manifest loading
//! - `network/` - Host address probes
//! - `prompt/` - Terminal and line-based prompters
//! - `lock` - Working-directory run lock

pub mod engine;
pub mod fs;
pub mod lock;
pub mod manifest;
pub mod network;
pub mod prompt;

// Re-export for convenience
pub use engine::DockerCli;
pub use fs::LocalFs;
pub use lock::RunLock;
pub use network::{HttpIpProbe, LocalInterfaceProbe};
pub use prompt::{DialoguerPrompter, LinePrompter};
