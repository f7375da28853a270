//! Domain Layer
//!
//! Deployment decisions without I/O: what the stack looks like, which access
//! mode exposes it, and which resources belong to it.
//!
//! ## Structure
//!
//! - `entities/` - Deployment configuration, service catalog, file layout
//! - `value_objects/` - Validated values (AccessMode, Hostname, Secret)
//! - `services/` - Secret generation, address detection, teardown inventory
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Processes, sockets and files are only reached through ports
//! 2. **Validated once** - Values are checked when constructed, renderers trust them
//! 3. **Ports & Adapters** - The orchestrator, terminal and network are traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
