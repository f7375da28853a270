//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! I/O happens only through the ports they are handed.

pub mod address;
pub mod inventory;
pub mod secrets;

pub use address::detect_host_address;
pub use inventory::ResourceInventory;
pub use secrets::{
    generate_secret, generate_stack_secrets, generate_substack_secrets, StackSecrets,
    SubstackSecrets,
};
