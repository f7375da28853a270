//! Setup Use Case
//!
//! Gathers deployment choices, renders the configuration artifacts and starts
//! the stack through the orchestrator.

mod answers;
mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use answers::{gather_answers, SetupAnswers};
pub use options::SetupOptions;
pub use result::SetupResult;
pub use use_case::SetupUseCase;
