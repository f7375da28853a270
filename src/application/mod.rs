//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SetupUseCase` - Ask, render, write and start the stack
//! - `TeardownUseCase` - Remove every resource and generated file
//! - `LifecycleUseCase` - `down` and `status` for an existing deployment

pub mod invocation;
pub mod lifecycle;
pub mod setup;
pub mod teardown;

#[cfg(test)]
pub(crate) mod testing;

pub use invocation::{primary_invocation, substack_invocation};
pub use lifecycle::{LifecycleUseCase, StackStatus};
pub use setup::{SetupAnswers, SetupOptions, SetupResult, SetupUseCase};
pub use teardown::{
    TeardownFailure, TeardownOptions, TeardownOutcome, TeardownReport, TeardownUseCase,
    CONFIRM_WORD,
};
