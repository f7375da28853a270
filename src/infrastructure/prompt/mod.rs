//! Prompter implementations

mod lines;
mod terminal;

pub use lines::LinePrompter;
pub use terminal::DialoguerPrompter;
