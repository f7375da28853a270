//! Teardown Use Case
//!
//! Removes every container, volume, network and generated file the stack
//! owns. Each step is best-effort; leftovers are reported, not fatal.

mod options;
mod result;
mod use_case;


pub use options::TeardownOptions;
pub use result::{TeardownFailure, TeardownOutcome, TeardownReport};
pub use use_case::{TeardownUseCase, CONFIRM_WORD};
