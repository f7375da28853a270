//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod address_probe;
pub mod container_engine;
pub mod file_system;
pub mod prompter;
pub mod status_sink;

pub use address_probe::{AddressProbe, ProbeError};
pub use container_engine::{
    ComposeInvocation, ContainerEngine, EngineError, EngineResult, PruneTarget, ResourceKind,
};
pub use file_system::{FileSystem, FsError, FsResult};
pub use prompter::{PromptError, Prompter};
pub use status_sink::{NullSink, Severity, StatusSink};
