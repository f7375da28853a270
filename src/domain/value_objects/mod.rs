//! Domain Value Objects
//!
//! Immutable value types that are validated on construction.

mod access_mode;
mod address;
mod secret;

pub use access_mode::{AccessMode, ModeChoice};
pub use address::{ContactEmail, HostAddress, Hostname, InvalidValue};
pub use secret::Secret;
